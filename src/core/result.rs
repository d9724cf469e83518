use serde::Serialize;

use crate::{
    core::{DiscountSchedule, Incentives, Powertrain, Scenario},
    quantity::{Dollars, Pounds},
};

/// Nominal costs of one projection year. Credits to the owner are negative.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct YearlyCostLine {
    /// 1-based projection year.
    pub year: u32,

    /// Purchase price, or the down payment when financed.
    pub purchase: Dollars,

    pub loan_payments: Dollars,
    pub energy: Dollars,
    pub maintenance: Dollars,
    pub insurance: Dollars,
    pub carbon_tax: Dollars,

    /// Charger installation.
    pub infrastructure: Dollars,

    pub infrastructure_maintenance: Dollars,
    pub rebates: Dollars,
    pub credits: Dollars,

    /// Resale of the vehicle and the charger, in the final year only.
    pub residual: Dollars,

    /// Present-value factor of the year, filled in from the discount schedule.
    pub discount_factor: f64,
}

impl YearlyCostLine {
    pub fn total(&self) -> Dollars {
        self.purchase
            + self.loan_payments
            + self.energy
            + self.maintenance
            + self.insurance
            + self.carbon_tax
            + self.infrastructure
            + self.infrastructure_maintenance
            + self.rebates
            + self.credits
            + self.residual
    }

    pub fn discounted_total(&self) -> Dollars {
        self.total() * self.discount_factor
    }
}

/// Projection of a single vehicle.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleTcoResult {
    pub vehicle_name: String,
    pub powertrain: Powertrain,

    /// Price the projection started from, after overrides.
    pub list_price: Dollars,

    /// List price minus the one-time rebates.
    pub purchase_price_effective: Dollars,

    pub payload_capacity: Option<Pounds>,
    pub incentives: Incentives,
    pub lines: Vec<YearlyCostLine>,

    /// Running nominal total at the end of each year.
    pub cumulative: Vec<Dollars>,

    pub nominal_cost: Dollars,

    /// Net present cost, the sum of the discounted yearly totals.
    pub total_cost: Dollars,
}

impl VehicleTcoResult {
    /// Wrap the nominal lines, discounting them with the schedule that covers their horizon.
    pub fn new(
        vehicle_name: String,
        powertrain: Powertrain,
        list_price: Dollars,
        payload_capacity: Option<Pounds>,
        incentives: Incentives,
        mut lines: Vec<YearlyCostLine>,
        discount: &DiscountSchedule,
    ) -> Self {
        for line in &mut lines {
            line.discount_factor = discount.factor(line.year);
        }
        let cumulative: Vec<Dollars> = lines
            .iter()
            .scan(Dollars::ZERO, |total, line| {
                *total += line.total();
                Some(*total)
            })
            .collect();
        Self {
            vehicle_name,
            powertrain,
            list_price,
            purchase_price_effective: list_price - incentives.one_time_total(),
            payload_capacity,
            incentives,
            nominal_cost: cumulative.last().copied().unwrap_or_default(),
            total_cost: discount.present_value(lines.iter().map(YearlyCostLine::total)),
            lines,
            cumulative,
        }
    }
}

/// Non-fatal observations about a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Caveat {
    /// The vehicle matched no incentive or credit program.
    NoIncentives { vehicle: String },

    /// Requested payload is above the vehicle capacity.
    PayloadExceedsCapacity { vehicle: String, capacity: Pounds },

    /// Loan term is longer than the horizon; the outstanding balance is not modeled.
    LoanOutlivesHorizon { term_years: u32, years: u32 },
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TcoResult {
    pub scenario: Scenario,
    pub ev_results: VehicleTcoResult,
    pub ice_results: VehicleTcoResult,

    /// Discounted ICE cost minus discounted EV cost; positive when the EV is cheaper.
    pub total_savings: Dollars,

    pub nominal_savings: Dollars,

    /// First year the EV cumulative nominal cost drops below the ICE one.
    pub breakeven_year: Option<u32>,

    pub caveats: Vec<Caveat>,
}

impl TcoResult {
    pub fn new(
        scenario: Scenario,
        ev_results: VehicleTcoResult,
        ice_results: VehicleTcoResult,
        caveats: Vec<Caveat>,
    ) -> Self {
        let breakeven_year = ev_results
            .lines
            .iter()
            .zip(ev_results.cumulative.iter().zip(&ice_results.cumulative))
            .find(|(_, (ev, ice))| ev < ice)
            .map(|(line, _)| line.year);
        Self {
            total_savings: ice_results.total_cost - ev_results.total_cost,
            nominal_savings: ice_results.nominal_cost - ev_results.nominal_cost,
            breakeven_year,
            scenario,
            ev_results,
            ice_results,
            caveats,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn line(year: u32, energy: f64) -> YearlyCostLine {
        YearlyCostLine { year, energy: Dollars(energy), ..Default::default() }
    }

    fn result(
        powertrain: Powertrain,
        lines: Vec<YearlyCostLine>,
        discount_rate: f64,
    ) -> VehicleTcoResult {
        let discount = DiscountSchedule::new(discount_rate, lines.len().try_into().unwrap());
        VehicleTcoResult::new(
            powertrain.to_string(),
            powertrain,
            Dollars::ZERO,
            None,
            Incentives::default(),
            lines,
            &discount,
        )
    }

    #[test]
    fn test_line_total() {
        let line = YearlyCostLine {
            purchase: Dollars(1_000.0),
            energy: Dollars(100.0),
            rebates: Dollars(-300.0),
            residual: Dollars(-50.0),
            discount_factor: 0.5,
            ..Default::default()
        };
        assert_abs_diff_eq!(line.total().0, 750.0);
        assert_abs_diff_eq!(line.discounted_total().0, 375.0);
    }

    #[test]
    fn test_cumulative_and_totals() {
        // 100 % discount rate: factors 0.5 and 0.25.
        let result = result(Powertrain::Electric, vec![line(1, 100.0), line(2, 50.0)], 1.0);
        assert_eq!(result.cumulative, [Dollars(100.0), Dollars(150.0)]);
        assert_abs_diff_eq!(result.nominal_cost.0, 150.0);
        assert_abs_diff_eq!(result.total_cost.0, 62.5);
        assert_abs_diff_eq!(result.lines[1].discount_factor, 0.25);
        let discounted: Dollars = result.lines.iter().map(YearlyCostLine::discounted_total).sum();
        assert_abs_diff_eq!(discounted.0, result.total_cost.0);
    }

    #[test]
    fn test_breakeven() {
        let scenario = Scenario { years: 3, ..crate::fixtures::scenario() };
        let ev = result(
            Powertrain::Electric,
            vec![line(1, 300.0), line(2, 10.0), line(3, 10.0)],
            0.0,
        );
        let ice = result(
            Powertrain::Combustion,
            vec![line(1, 100.0), line(2, 250.0), line(3, 200.0)],
            0.0,
        );
        let result = TcoResult::new(scenario, ev, ice, Vec::new());
        assert_eq!(result.breakeven_year, Some(2));
        assert_abs_diff_eq!(result.total_savings.0, 230.0);
        assert_eq!(result.total_savings, result.nominal_savings);
    }

    #[test]
    fn test_no_breakeven() {
        let scenario = Scenario { years: 1, ..crate::fixtures::scenario() };
        let ev = result(Powertrain::Electric, vec![line(1, 300.0)], 0.04);
        let ice = result(Powertrain::Combustion, vec![line(1, 100.0)], 0.04);
        assert_eq!(TcoResult::new(scenario, ev, ice, Vec::new()).breakeven_year, None);
    }
}
