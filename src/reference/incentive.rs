use std::collections::BTreeMap;

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Category, Powertrain, Province},
    quantity::{Dollars, DollarsPerKilometre, DollarsPerKilowattHour, KilowattHours},
};

/// What a one-time program pays for.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    /// Vehicle purchase rebate, based on the vehicle price.
    Purchase,

    /// Charger installation rebate, based on the charger cost.
    Charger,
}

/// One-time incentive program.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncentiveProgram {
    pub name: String,

    pub kind: ProgramKind,

    #[serde(default)]
    pub eligibility: Eligibility,

    pub amount: ProgramAmount,

    #[serde(rename = "cap_cad", default)]
    pub cap: Option<Dollars>,

    /// Names of programs this one cannot be stacked with.
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl IncentiveProgram {
    /// Whether either program declares the other mutually exclusive.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.excludes.iter().any(|name| name == &other.name)
            || other.excludes.iter().any(|name| name == &self.name)
    }

    /// Program contribution for the base cost, capped; `None` when the class table has no entry.
    #[must_use]
    pub fn amount(&self, base: Dollars, class: Option<&str>) -> Option<Dollars> {
        let amount = match &self.amount {
            ProgramAmount::Fixed(amount) => *amount,
            ProgramAmount::ShareOfPrice(share) => base * *share,
            ProgramAmount::ByClass(amounts) => *amounts.get(class?)?,
        };
        Some(self.cap.map_or(amount, |cap| amount.min(cap)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramAmount {
    Fixed(Dollars),

    ShareOfPrice(f64),

    /// Amount keyed by FHWA class.
    ByClass(BTreeMap<String, Dollars>),
}

/// Recurring credit earned by usage, such as CFR or LCFS credits.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreditProgram {
    pub name: String,

    #[serde(default)]
    pub eligibility: Eligibility,

    pub rate: CreditBasis,

    /// Yearly decline of the credit value.
    #[serde(default)]
    pub decline_rate: f64,

    /// Calendar year the program ends; credits are earned strictly before it.
    #[serde(default)]
    pub end_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditBasis {
    PerKilometre(DollarsPerKilometre),

    /// Per kilowatt-hour dispensed to the vehicle.
    PerKilowattHour(DollarsPerKilowattHour),
}

/// Eligibility predicate. Empty lists match anything.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eligibility {
    /// Provinces the program is offered in; empty for federal programs.
    pub provinces: Vec<Province>,

    pub categories: Vec<Category>,

    pub powertrain: Option<Powertrain>,

    /// FHWA classes.
    pub classes: Vec<String>,

    #[serde(rename = "battery_kwh_above")]
    pub battery_above: Option<KilowattHours>,

    #[serde(rename = "battery_kwh_at_most")]
    pub battery_at_most: Option<KilowattHours>,
}

/// Vehicle and region the eligibility is checked against.
#[derive(Copy, Clone, Debug)]
pub struct Applicant<'a> {
    pub powertrain: Powertrain,
    pub category: Category,
    pub province: Province,
    pub class: Option<&'a str>,
    pub battery: Option<KilowattHours>,
}

impl Eligibility {
    pub fn categories(&self) -> EnumSet<Category> {
        if self.categories.is_empty() {
            EnumSet::all()
        } else {
            self.categories.iter().copied().collect()
        }
    }

    #[must_use]
    pub fn matches(&self, applicant: &Applicant<'_>) -> bool {
        (self.provinces.is_empty() || self.provinces.contains(&applicant.province))
            && self.categories().contains(applicant.category)
            && self.powertrain.is_none_or(|powertrain| powertrain == applicant.powertrain)
            && (self.classes.is_empty()
                || applicant.class.is_some_and(|class| self.classes.iter().any(|it| it == class)))
            && self.battery_above.is_none_or(|threshold| {
                applicant.battery.is_some_and(|battery| battery > threshold)
            })
            && self.battery_at_most.is_none_or(|threshold| {
                applicant.battery.is_some_and(|battery| battery <= threshold)
            })
    }
}
