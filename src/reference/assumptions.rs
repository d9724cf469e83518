use serde::{Deserialize, Serialize};

use crate::quantity::DollarsPerKilometre;

/// Model constants the workbook hard-codes in its formulas.
///
/// Any mismatch here silently breaks parity with the spreadsheet, so every one of them
/// is named and overridable from the `[assumptions]` table.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Days per year the vehicle is operated; the workbook multiplies daily distance by 365.
    pub operating_days_per_year: f64,

    /// One-time purchase rebates never exceed this share of the vehicle price.
    pub max_rebate_share: f64,

    /// Extra maintenance of a refrigeration unit.
    #[serde(rename = "refrigeration_surcharge_per_km")]
    pub refrigeration_surcharge: DollarsPerKilometre,

    /// Calendar year of the first projection year, used to expire credit programs.
    pub base_year: i32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            operating_days_per_year: 365.0,
            max_rebate_share: 0.75,
            refrigeration_surcharge: DollarsPerKilometre::ZERO,
            base_year: 2024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_table_keeps_defaults() {
        let assumptions: Assumptions = toml::from_str("operating_days_per_year = 260.0").unwrap();
        assert_eq!(assumptions.operating_days_per_year, 260.0);
        assert_eq!(assumptions.base_year, 2024);
        assert_eq!(assumptions.max_rebate_share, 0.75);
    }
}
