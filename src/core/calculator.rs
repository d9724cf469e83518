use rayon::prelude::*;

use crate::{
    core::{
        Acquisition,
        Caveat,
        DiscountSchedule,
        Powertrain,
        Projector,
        Scenario,
        TcoResult,
        VehicleTcoResult,
    },
    prelude::*,
    quantity::Kilometres,
    reference::ReferenceData,
};

/// Compares the two vehicles of a scenario against borrowed reference data.
///
/// Holds nothing but the reference, so one calculator may serve any number of threads.
pub struct Calculator<'a, D: ?Sized> {
    reference: &'a D,
}

impl<'a, D: ReferenceData + ?Sized> Calculator<'a, D> {
    pub const fn new(reference: &'a D) -> Self {
        Self { reference }
    }

    #[instrument(
        skip_all,
        fields(
            category = %scenario.category,
            province = %scenario.province,
            daily_distance = %scenario.daily_distance,
            years = scenario.years,
        ),
    )]
    pub fn calculate(&self, scenario: &Scenario) -> Result<TcoResult> {
        let discount = DiscountSchedule::new(scenario.discount_rate, scenario.years);
        let projector = Projector::new(self.reference);
        let ev_results = projector.project(scenario, Powertrain::Electric, &discount)?;
        let ice_results = projector.project(scenario, Powertrain::Combustion, &discount)?;
        let caveats = Self::caveats(scenario, &ev_results, &ice_results);

        let result = TcoResult::new(scenario.clone(), ev_results, ice_results, caveats);
        info!(
            ev = ?result.ev_results.total_cost,
            ice = ?result.ice_results.total_cost,
            savings = ?result.total_savings,
            breakeven_year = ?result.breakeven_year,
            n_caveats = result.caveats.len(),
            "calculated",
        );
        Ok(result)
    }

    /// Calculate the scenario for every daily distance, in parallel. Results keep the input order.
    #[instrument(skip_all, fields(n_distances = distances.len()))]
    pub fn sweep(&self, scenario: &Scenario, distances: &[Kilometres]) -> Result<Vec<TcoResult>> {
        distances
            .par_iter()
            .map(|distance| self.calculate(&scenario.with_daily_distance(*distance)?))
            .collect()
    }

    fn caveats(
        scenario: &Scenario,
        ev_results: &VehicleTcoResult,
        ice_results: &VehicleTcoResult,
    ) -> Vec<Caveat> {
        let mut caveats = Vec::new();
        if ev_results.incentives.is_empty() {
            warn!(vehicle = %ev_results.vehicle_name, "no incentives matched");
            caveats.push(Caveat::NoIncentives { vehicle: ev_results.vehicle_name.clone() });
        }
        for results in [ev_results, ice_results] {
            if let Some(capacity) = results.payload_capacity
                && scenario.max_payload > capacity
            {
                warn!(vehicle = %results.vehicle_name, %capacity, "payload exceeds capacity");
                caveats.push(Caveat::PayloadExceedsCapacity {
                    vehicle: results.vehicle_name.clone(),
                    capacity,
                });
            }
        }
        if let Acquisition::Finance { term_years, .. } = scenario.acquisition
            && term_years > scenario.years
        {
            warn!(term_years, years = scenario.years, "loan outlives the horizon");
            caveats.push(Caveat::LoanOutlivesHorizon { term_years, years: scenario.years });
        }
        caveats
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{Province, YearlyCostLine},
        quantity::{Dollars, Pounds},
        reference::Snapshot,
    };

    fn calculate(scenario: &Scenario) -> TcoResult {
        Calculator::new(&crate::fixtures::snapshot()).calculate(scenario).unwrap()
    }

    /// British Columbia, light duty, 200 km a day over 7 years at 4 %.
    #[test]
    fn test_light_duty_in_british_columbia() {
        let result = calculate(&crate::fixtures::scenario());
        let ev = &result.ev_results;
        let ice = &result.ice_results;

        assert_abs_diff_eq!(ev.lines[0].energy.0, 2_802.84, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[6].energy.0, 3_156.45, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[6].maintenance.0, 4_932.59, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[0].infrastructure.0, 15_214.07, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[0].rebates.0, -55_000.0, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[4].credits.0, -1_997.82, epsilon = 0.01);
        assert_eq!(ev.lines[5].credits, Dollars::ZERO);
        assert_abs_diff_eq!(ev.lines[6].residual.0, -16_411.21, epsilon = 0.01);
        assert_abs_diff_eq!(ev.lines[0].total().0, 38_023.39, epsilon = 0.01);
        assert_abs_diff_eq!(ev.purchase_price_effective.0, 16_000.0, epsilon = 0.01);
        assert_abs_diff_eq!(ev.nominal_cost.0, 71_791.80, epsilon = 0.01);
        assert_abs_diff_eq!(ev.total_cost.0, 65_853.68, epsilon = 0.01);

        assert_abs_diff_eq!(ice.lines[0].energy.0, 20_629.80, epsilon = 0.01);
        assert_abs_diff_eq!(ice.lines[3].carbon_tax.0, 2_018.28, epsilon = 0.01);
        assert_abs_diff_eq!(ice.lines[6].residual.0, -17_631.74, epsilon = 0.01);
        assert_abs_diff_eq!(ice.lines[0].total().0, 86_323.08, epsilon = 0.01);
        assert_abs_diff_eq!(ice.nominal_cost.0, 268_759.28, epsilon = 0.01);
        assert_abs_diff_eq!(ice.total_cost.0, 237_337.13, epsilon = 0.01);

        assert_abs_diff_eq!(result.total_savings.0, 171_483.45, epsilon = 0.01);
        assert_abs_diff_eq!(result.nominal_savings.0, 196_967.48, epsilon = 0.01);
        assert_eq!(result.breakeven_year, Some(1));
        assert!(result.caveats.is_empty());
    }

    #[test]
    fn test_savings_identity() {
        let result = calculate(&crate::fixtures::scenario());
        assert_eq!(
            result.total_savings,
            result.ice_results.total_cost - result.ev_results.total_cost
        );
    }

    #[test]
    fn test_zero_discount_rate_is_nominal_sum() {
        let scenario = Scenario { discount_rate: 0.0, ..crate::fixtures::scenario() };
        let result = calculate(&scenario);
        for results in [&result.ev_results, &result.ice_results] {
            let nominal: Dollars = results.lines.iter().map(YearlyCostLine::total).sum();
            assert_eq!(results.total_cost, nominal);
        }
    }

    #[test]
    fn test_deterministic() {
        let scenario = crate::fixtures::scenario();
        assert_eq!(calculate(&scenario), calculate(&scenario));
    }

    #[test]
    fn test_single_year() {
        let scenario = Scenario { years: 1, ..crate::fixtures::scenario() };
        let result = calculate(&scenario);
        for results in [&result.ev_results, &result.ice_results] {
            assert_eq!(results.lines.len(), 1);
            assert!(results.lines[0].purchase > Dollars::ZERO);
            assert!(results.lines[0].residual < Dollars::ZERO);
        }
    }

    #[test]
    fn test_no_incentives_caveat() {
        let scenario = Scenario { province: Province::Ab, ..crate::fixtures::scenario() };
        let mut snapshot = crate::fixtures::snapshot();
        snapshot.incentives.clear();
        snapshot.credits.clear();
        let result = Calculator::new(&snapshot).calculate(&scenario).unwrap();
        assert!(result.ev_results.incentives.is_empty());
        assert_eq!(result.ev_results.lines[0].rebates, Dollars::ZERO);
        assert_eq!(
            result.caveats,
            [Caveat::NoIncentives { vehicle: "Ford E-Transit".to_string() }]
        );
    }

    #[test]
    fn test_payload_caveat() {
        let scenario = Scenario { max_payload: Pounds(4_000.0), ..crate::fixtures::scenario() };
        assert_eq!(
            calculate(&scenario).caveats,
            [Caveat::PayloadExceedsCapacity {
                vehicle: "Ford E-Transit".to_string(),
                capacity: Pounds(3_800.0),
            }]
        );
    }

    #[test]
    fn test_loan_caveat() {
        let scenario = Scenario {
            years: 5,
            acquisition: Acquisition::Finance {
                down_payment_share: 0.1,
                annual_interest_rate: 0.05,
                term_years: 8,
            },
            ..crate::fixtures::scenario()
        };
        assert_eq!(
            calculate(&scenario).caveats,
            [Caveat::LoanOutlivesHorizon { term_years: 8, years: 5 }]
        );
    }

    #[test]
    fn test_unsupported_region() {
        let scenario = Scenario { province: Province::Yt, ..crate::fixtures::scenario() };
        let error = Calculator::new(&crate::fixtures::snapshot()).calculate(&scenario).unwrap_err();
        assert!(matches!(error, Error::UnsupportedRegion(_)));
    }

    #[test]
    fn test_empty_reference() {
        let snapshot = Snapshot::default();
        let error = Calculator::new(&snapshot).calculate(&crate::fixtures::scenario()).unwrap_err();
        assert!(matches!(error, Error::DataNotFound { kind: "vehicle", .. }));
    }

    #[test]
    fn test_sweep_keeps_order() {
        let snapshot = crate::fixtures::snapshot();
        let calculator = Calculator::new(&snapshot);
        let distances = [Kilometres(50.0), Kilometres(100.0), Kilometres(200.0)];
        let results = calculator.sweep(&crate::fixtures::scenario(), &distances).unwrap();
        assert!(
            results.iter().map(|result| result.scenario.daily_distance).eq(distances.into_iter())
        );
        assert!(results.is_sorted_by_key(|result| result.total_savings));
        assert_eq!(results[2], calculator.calculate(&crate::fixtures::scenario()).unwrap());
    }

    #[test]
    fn test_sweep_fails_on_invalid_distance() {
        let snapshot = crate::fixtures::snapshot();
        let result =
            Calculator::new(&snapshot).sweep(&crate::fixtures::scenario(), &[Kilometres(-1.0)]);
        assert!(matches!(result, Err(Error::Validation { field: "daily_distance_km", .. })));
    }
}
