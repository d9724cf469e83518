use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Powertrain {
    #[serde(rename = "EV")]
    Electric,

    #[serde(rename = "ICE")]
    Combustion,
}

impl Display for Powertrain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Electric => write!(f, "EV"),
            Self::Combustion => write!(f, "ICE"),
        }
    }
}

/// Fuel burned by a combustion vehicle.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelKind {
    #[default]
    Gasoline,
    Diesel,
}
