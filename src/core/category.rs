use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Vehicle duty category.
#[derive(Debug, Hash, Serialize, Deserialize, enumset::EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// FHWA classes 2B–3: cargo vans and pickups.
    LightDuty,

    /// FHWA classes 4–6: box trucks and step vans.
    MediumDuty,

    /// FHWA classes 7–8: tractors and heavy straight trucks.
    HeavyDuty,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LightDuty => write!(f, "Light Duty"),
            Self::MediumDuty => write!(f, "Medium Duty"),
            Self::HeavyDuty => write!(f, "Heavy Duty"),
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accept the workbook labels (`Light Duty`), kebab-case, and the bare class word.
    fn from_str(category: &str) -> Result<Self> {
        let normalized = category.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.trim_end_matches(" duty") {
            "light" => Ok(Self::LightDuty),
            "medium" => Ok(Self::MediumDuty),
            "heavy" => Ok(Self::HeavyDuty),
            _ => Err(Error::validation(
                "category",
                format!("`{category}` is not one of Light Duty, Medium Duty, Heavy Duty"),
            )),
        }
    }
}
