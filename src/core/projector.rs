use crate::{
    core::{
        Acquisition,
        DiscountSchedule,
        IncentiveResolver,
        Incentives,
        Loan,
        Powertrain,
        Scenario,
        Usage,
        VehicleTcoResult,
        YearlyCostLine,
    },
    prelude::*,
    quantity::{
        Dollars,
        DollarsPerKilometre,
        KilowattHours,
        KilowattHoursPer100Km,
        Kilometres,
        Litres,
        LitresPer100Km,
    },
    reference::{Applicant, Charger, Drive, ReferenceData, RegionRates, VehicleSpec},
};

/// Year-by-year nominal costs of a single vehicle.
pub struct Projector<'a, D: ?Sized> {
    reference: &'a D,
}

impl<'a, D: ReferenceData + ?Sized> Projector<'a, D> {
    pub const fn new(reference: &'a D) -> Self {
        Self { reference }
    }

    /// Project the vehicle over the scenario horizon, which the discount schedule must cover exactly.
    #[instrument(skip_all, fields(powertrain = %powertrain))]
    pub fn project(
        &self,
        scenario: &Scenario,
        powertrain: Powertrain,
        discount: &DiscountSchedule,
    ) -> Result<VehicleTcoResult> {
        if discount.years() != scenario.years as usize {
            return Err(Error::validation(
                "discount",
                format!(
                    "the schedule covers {} years but the horizon is {} years",
                    discount.years(),
                    scenario.years,
                ),
            ));
        }
        let vehicle = self.reference.vehicle(
            scenario.vehicle_name(powertrain),
            powertrain,
            scenario.category,
        )?;
        let region = self.reference.region(scenario.province)?;
        let charger = match &vehicle.drive {
            Drive::Electric { charger: Some(name), .. } => Some(self.reference.charger(name)?),
            _ => None,
        };
        let overrides = scenario.overrides(powertrain);
        let price = overrides.price.unwrap_or(vehicle.list_price);

        let applicant = Applicant {
            powertrain,
            category: scenario.category,
            province: scenario.province,
            class: vehicle.fhwa_class.as_deref(),
            battery: match vehicle.drive {
                Drive::Electric { battery, .. } => battery,
                Drive::Combustion { .. } => None,
            },
        };
        let incentives = IncentiveResolver::new(self.reference).resolve(
            &applicant,
            price,
            charger.map(Charger::vehicle_cost),
        );

        let vehicle_year = VehicleYear {
            scenario,
            vehicle,
            region,
            charger,
            incentives: &incentives,
            price,
            annual_distance: scenario.daily_distance
                * self.reference.assumptions().operating_days_per_year,
            consumption: overrides.consumption,
            refrigeration_surcharge: self.reference.assumptions().refrigeration_surcharge,
        };
        let lines: Vec<YearlyCostLine> =
            (1..=scenario.years).map(|year| vehicle_year.line(year)).collect();
        info!(
            vehicle = %vehicle.name,
            ?price,
            one_time_incentives = ?incentives.one_time_total(),
            n_credits = incentives.credits.len(),
            "projected",
        );

        Ok(VehicleTcoResult::new(
            vehicle.name.clone(),
            powertrain,
            price,
            vehicle.payload_capacity,
            incentives,
            lines,
            discount,
        ))
    }
}

/// Everything resolved for one vehicle, shared by all its years.
struct VehicleYear<'a> {
    scenario: &'a Scenario,
    vehicle: &'a VehicleSpec,
    region: &'a RegionRates,
    charger: Option<&'a Charger>,
    incentives: &'a Incentives,
    price: Dollars,
    annual_distance: Kilometres,
    consumption: Option<f64>,
    refrigeration_surcharge: DollarsPerKilometre,
}

impl VehicleYear<'_> {
    fn line(&self, year: u32) -> YearlyCostLine {
        let escalation = &self.region.escalation;
        let is_first = year == 1;
        let is_final = year == self.scenario.years;

        let mut line = YearlyCostLine { year, ..YearlyCostLine::default() };

        match &self.vehicle.drive {
            Drive::Electric { consumption, .. } => {
                line.energy = self.electricity_used(*consumption)
                    * self.region.electricity
                    * escalation.electricity.factor(year);
            }
            Drive::Combustion { consumption, fuel } => {
                let litres = self.fuel_burned(*consumption);
                line.energy =
                    litres * self.region.fuel_price(*fuel) * escalation.fuel.factor(year);
                line.carbon_tax =
                    litres * self.region.carbon_tax * escalation.carbon_tax.factor(year);
            }
        }

        let mut maintenance_rate = self.vehicle.maintenance;
        if self.scenario.refrigeration_required {
            maintenance_rate += self.refrigeration_surcharge;
        }
        line.maintenance =
            self.annual_distance * maintenance_rate * escalation.maintenance.factor(year);
        line.insurance =
            self.price * self.vehicle.insurance_rate * escalation.insurance.factor(year);

        if let Some(charger) = self.charger {
            let cost = charger.vehicle_cost();
            if is_first {
                line.infrastructure = cost;
            }
            line.infrastructure_maintenance =
                cost * charger.maintenance_rate * escalation.maintenance.factor(year);
        }

        match self.scenario.acquisition {
            Acquisition::Purchase => {
                if is_first {
                    line.purchase = self.price;
                    line.rebates = -self.incentives.one_time_total();
                }
            }
            Acquisition::Finance { down_payment_share, annual_interest_rate, term_years } => {
                let down_payment = self.price * down_payment_share;
                let financed = self.price - self.incentives.purchase_total - down_payment;
                let loan = Loan {
                    principal: financed.max(Dollars::ZERO),
                    annual_interest_rate,
                    term_years,
                };
                if is_first {
                    line.purchase = down_payment;

                    // Purchase rebates beyond the financed amount come back as a credit.
                    let excess = (-financed).max(Dollars::ZERO);
                    line.rebates = -(self.incentives.charger_total + excess);
                }
                line.loan_payments = loan.payments_in(year);
            }
        }

        line.credits = -self.incentives.credit(year, self.usage());

        if is_final {
            let vehicle_residual = self
                .vehicle
                .residual
                .as_ref()
                .map_or(Dollars::ZERO, |curve| self.price * curve.fraction(year));
            let charger_residual =
                self.charger.map_or(Dollars::ZERO, |charger| charger.residual_value(year));
            line.residual = -(vehicle_residual + charger_residual);
        }

        line
    }

    fn electricity_used(&self, consumption: KilowattHoursPer100Km) -> KilowattHours {
        self.annual_distance * self.consumption.map_or(consumption, KilowattHoursPer100Km)
    }

    fn fuel_burned(&self, consumption: LitresPer100Km) -> Litres {
        self.annual_distance * self.consumption.map_or(consumption, LitresPer100Km)
    }

    fn usage(&self) -> Usage {
        let energy = match &self.vehicle.drive {
            Drive::Electric { consumption, .. } => self.electricity_used(*consumption),
            Drive::Combustion { .. } => KilowattHours::ZERO,
        };
        Usage { distance: self.annual_distance, energy }
    }
}
