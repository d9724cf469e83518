use serde::{Deserialize, Serialize};

use crate::{
    core::{Escalation, FuelKind, Province},
    quantity::{DollarsPerKilowattHour, DollarsPerLitre},
};

/// Energy prices and taxes of one province, as of the first projection year.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionRates {
    pub province: Province,

    #[serde(rename = "gasoline_cad_per_litre")]
    pub gasoline: DollarsPerLitre,

    #[serde(rename = "diesel_cad_per_litre")]
    pub diesel: DollarsPerLitre,

    #[serde(rename = "electricity_cad_per_kwh")]
    pub electricity: DollarsPerKilowattHour,

    #[serde(rename = "carbon_tax_cad_per_litre", default)]
    pub carbon_tax: DollarsPerLitre,

    #[serde(default)]
    pub escalation: RegionEscalation,
}

impl RegionRates {
    pub const fn fuel_price(&self, fuel: FuelKind) -> DollarsPerLitre {
        match fuel {
            FuelKind::Gasoline => self.gasoline,
            FuelKind::Diesel => self.diesel,
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionEscalation {
    pub fuel: Escalation,
    pub electricity: Escalation,
    pub maintenance: Escalation,
    pub insurance: Escalation,
    pub carbon_tax: Escalation,
}
