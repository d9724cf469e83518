use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tco::{
    core::{Acquisition, Category, Overrides, Province, Scenario},
    quantity::{Dollars, Kilometres, Pounds},
    reference::Snapshot,
};

#[derive(Parser)]
pub struct ReferenceArgs {
    /// Reference data: vehicles, regional rates, and incentive programs.
    #[clap(long = "reference", env = "TCO_REFERENCE", default_value = "data/reference.toml")]
    pub path: PathBuf,
}

impl ReferenceArgs {
    pub fn load(&self) -> Result<Snapshot> {
        Snapshot::read(&self.path).with_context(|| {
            format!("failed to load the reference data from `{}`", self.path.display())
        })
    }
}

/// Everything of the scenario but the daily distance.
#[derive(Parser)]
pub struct ScenarioArgs {
    /// Vehicle category: light, medium, or heavy duty.
    #[clap(long, env = "TCO_CATEGORY")]
    pub category: Category,

    /// Two-letter province or territory code.
    #[clap(long, env = "TCO_PROVINCE", value_enum, ignore_case = true)]
    pub province: Province,

    /// Electric vehicle name in the catalog.
    #[clap(long = "ev", env = "TCO_EV")]
    pub ev_vehicle_name: String,

    /// Combustion vehicle name in the catalog.
    #[clap(long = "ice", env = "TCO_ICE")]
    pub ice_vehicle_name: String,

    #[clap(long, env = "TCO_YEARS", default_value = "7")]
    pub years: u32,

    #[clap(long, env = "TCO_DISCOUNT_RATE", default_value = "0.04")]
    pub discount_rate: f64,

    /// Maximum payload the vehicles have to carry.
    #[clap(long = "payload-lbs", env = "TCO_PAYLOAD_LBS", default_value = "0")]
    pub max_payload: Pounds,

    /// The cargo needs a refrigeration unit.
    #[clap(long, env = "TCO_REFRIGERATION")]
    pub refrigeration: bool,

    /// Replaces the catalog EV price.
    #[clap(long = "ev-price", env = "TCO_EV_PRICE")]
    pub ev_price: Option<Dollars>,

    /// Replaces the catalog EV consumption, kWh per 100 km.
    #[clap(long = "ev-consumption", env = "TCO_EV_CONSUMPTION")]
    pub ev_consumption: Option<f64>,

    /// Replaces the catalog ICE price.
    #[clap(long = "ice-price", env = "TCO_ICE_PRICE")]
    pub ice_price: Option<Dollars>,

    /// Replaces the catalog ICE consumption, litres per 100 km.
    #[clap(long = "ice-consumption", env = "TCO_ICE_CONSUMPTION")]
    pub ice_consumption: Option<f64>,

    #[clap(flatten)]
    pub finance: FinanceArgs,
}

impl ScenarioArgs {
    pub fn scenario(&self, daily_distance: Kilometres) -> Result<Scenario> {
        Scenario::builder()
            .daily_distance(daily_distance)
            .max_payload(self.max_payload)
            .category(self.category)
            .refrigeration_required(self.refrigeration)
            .ev_vehicle_name(&self.ev_vehicle_name)
            .ice_vehicle_name(&self.ice_vehicle_name)
            .province(self.province)
            .years(self.years)
            .discount_rate(self.discount_rate)
            .acquisition(self.finance.acquisition())
            .ev_overrides(Overrides { price: self.ev_price, consumption: self.ev_consumption })
            .ice_overrides(Overrides { price: self.ice_price, consumption: self.ice_consumption })
            .build()
            .context("invalid scenario")
    }
}

#[derive(Copy, Clone, Parser)]
pub struct FinanceArgs {
    /// Finance both vehicles instead of paying in full.
    #[clap(long = "finance", env = "TCO_FINANCE")]
    pub is_enabled: bool,

    #[clap(long, env = "TCO_DOWN_PAYMENT_SHARE", default_value = "0.2")]
    pub down_payment_share: f64,

    #[clap(long = "interest-rate", env = "TCO_INTEREST_RATE", default_value = "0.06")]
    pub annual_interest_rate: f64,

    #[clap(long, env = "TCO_TERM_YEARS", default_value = "5")]
    pub term_years: u32,
}

impl FinanceArgs {
    pub const fn acquisition(self) -> Acquisition {
        if self.is_enabled {
            Acquisition::Finance {
                down_payment_share: self.down_payment_share,
                annual_interest_rate: self.annual_interest_rate,
                term_years: self.term_years,
            }
        } else {
            Acquisition::Purchase
        }
    }
}
