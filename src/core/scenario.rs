use bon::bon;
use serde::Serialize;

use crate::{
    core::{Category, Powertrain, Province},
    prelude::*,
    quantity::{Dollars, Kilometres, Pounds},
};

/// One comparison request. Only constructed through [`Scenario::builder`], which validates it.
#[must_use]
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    pub daily_distance: Kilometres,
    pub max_payload: Pounds,
    pub category: Category,
    pub refrigeration_required: bool,
    pub ev_vehicle_name: String,
    pub ice_vehicle_name: String,
    pub province: Province,
    pub years: u32,
    pub discount_rate: f64,
    pub acquisition: Acquisition,
    pub ev_overrides: Overrides,
    pub ice_overrides: Overrides,
}

/// How the vehicles are paid for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Acquisition {
    /// Paid in full in the first year.
    #[default]
    Purchase,

    /// Down payment in the first year, then monthly loan payments.
    Finance { down_payment_share: f64, annual_interest_rate: f64, term_years: u32 },
}

/// Manual replacements for catalog values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Overrides {
    pub price: Option<Dollars>,

    /// Consumption per 100 km, in the vehicle's own unit (kWh or litres).
    pub consumption: Option<f64>,
}

#[bon]
impl Scenario {
    pub const DEFAULT_YEARS: u32 = 7;
    pub const DEFAULT_DISCOUNT_RATE: f64 = 0.04;
    pub const MAX_YEARS: u32 = 50;
    pub const MAX_TERM_YEARS: u32 = 30;

    #[builder]
    pub fn new(
        #[builder(into)] daily_distance: Kilometres,
        #[builder(into, default = Pounds::ZERO)] max_payload: Pounds,
        category: Category,
        #[builder(default)] refrigeration_required: bool,
        #[builder(into)] ev_vehicle_name: String,
        #[builder(into)] ice_vehicle_name: String,
        province: Province,
        #[builder(default = Scenario::DEFAULT_YEARS)] years: u32,
        #[builder(default = Scenario::DEFAULT_DISCOUNT_RATE)] discount_rate: f64,
        #[builder(default)] acquisition: Acquisition,
        #[builder(default)] ev_overrides: Overrides,
        #[builder(default)] ice_overrides: Overrides,
    ) -> Result<Self> {
        let this = Self {
            daily_distance,
            max_payload,
            category,
            refrigeration_required,
            ev_vehicle_name,
            ice_vehicle_name,
            province,
            years,
            discount_rate,
            acquisition,
            ev_overrides,
            ice_overrides,
        };
        this.validate()?;
        Ok(this)
    }

    /// Same scenario with another daily distance, for sweeps.
    pub fn with_daily_distance(&self, daily_distance: Kilometres) -> Result<Self> {
        let this = Self { daily_distance, ..self.clone() };
        this.validate()?;
        Ok(this)
    }

    pub fn vehicle_name(&self, powertrain: Powertrain) -> &str {
        match powertrain {
            Powertrain::Electric => &self.ev_vehicle_name,
            Powertrain::Combustion => &self.ice_vehicle_name,
        }
    }

    pub const fn overrides(&self, powertrain: Powertrain) -> Overrides {
        match powertrain {
            Powertrain::Electric => self.ev_overrides,
            Powertrain::Combustion => self.ice_overrides,
        }
    }

    fn validate(&self) -> Result {
        if !(self.daily_distance.0.is_finite() && self.daily_distance > Kilometres::ZERO) {
            return Err(Error::validation("daily_distance_km", "must be a positive distance"));
        }
        if !(self.max_payload.0.is_finite() && self.max_payload >= Pounds::ZERO) {
            return Err(Error::validation("max_payload_lbs", "must not be negative"));
        }
        if !(1..=Self::MAX_YEARS).contains(&self.years) {
            return Err(Error::validation(
                "years",
                format!("the horizon must be from 1 to {} years", Self::MAX_YEARS),
            ));
        }
        if !(0.0..1.0).contains(&self.discount_rate) {
            return Err(Error::validation("discount_rate", "must be in [0, 1)"));
        }
        if self.ev_vehicle_name.trim().is_empty() {
            return Err(Error::validation("ev_vehicle_name", "must not be empty"));
        }
        if self.ice_vehicle_name.trim().is_empty() {
            return Err(Error::validation("ice_vehicle_name", "must not be empty"));
        }
        if let Acquisition::Finance { down_payment_share, annual_interest_rate, term_years } =
            self.acquisition
        {
            if !(0.0..=1.0).contains(&down_payment_share) {
                return Err(Error::validation("down_payment_share", "must be in [0, 1]"));
            }
            if !(annual_interest_rate.is_finite() && annual_interest_rate >= 0.0) {
                return Err(Error::validation("annual_interest_rate", "must not be negative"));
            }
            if !(1..=Self::MAX_TERM_YEARS).contains(&term_years) {
                return Err(Error::validation(
                    "term_years",
                    format!("must be from 1 to {} years", Self::MAX_TERM_YEARS),
                ));
            }
        }
        for (field, overrides) in
            [("ev_overrides", self.ev_overrides), ("ice_overrides", self.ice_overrides)]
        {
            if overrides.price.is_some_and(|price| !(price.0.is_finite() && price >= Dollars::ZERO))
            {
                return Err(Error::validation(field, "price must not be negative"));
            }
            if overrides.consumption.is_some_and(|consumption| {
                !(consumption.is_finite() && consumption > 0.0)
            }) {
                return Err(Error::validation(field, "consumption must be positive"));
            }
        }
        Ok(())
    }
}
