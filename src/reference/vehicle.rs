use serde::{Deserialize, Serialize};

use crate::{
    core::{Category, FuelKind, Powertrain},
    quantity::{
        Dollars,
        DollarsPerKilometre,
        KilowattHours,
        KilowattHoursPer100Km,
        LitresPer100Km,
        Pounds,
    },
};

/// Catalog entry of a single vehicle model.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub name: String,

    pub category: Category,

    /// FHWA gross weight class, `2B` through `8`.
    #[serde(default)]
    pub fhwa_class: Option<String>,

    #[serde(rename = "list_price_cad")]
    pub list_price: Dollars,

    #[serde(rename = "maintenance_cad_per_km")]
    pub maintenance: DollarsPerKilometre,

    /// Yearly insurance premium as a share of the list price.
    pub insurance_rate: f64,

    #[serde(rename = "payload_capacity_lbs", default)]
    pub payload_capacity: Option<Pounds>,

    /// Resale value at the end of the horizon; no credit when absent.
    #[serde(default)]
    pub residual: Option<ResidualCurve>,

    pub drive: Drive,
}

impl VehicleSpec {
    pub const fn powertrain(&self) -> Powertrain {
        match self.drive {
            Drive::Electric { .. } => Powertrain::Electric,
            Drive::Combustion { .. } => Powertrain::Combustion,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drive {
    Electric {
        consumption: KilowattHoursPer100Km,

        #[serde(rename = "battery_kwh", default)]
        battery: Option<KilowattHours>,

        /// Charger name in the charger catalog.
        #[serde(default)]
        charger: Option<String>,
    },

    Combustion {
        consumption: LitresPer100Km,

        #[serde(default)]
        fuel: FuelKind,
    },
}

/// Share of the list price a vehicle keeps at a given age.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidualCurve {
    /// Constant yearly depreciation on the remaining value, `(1 - d)^age`.
    DecliningBalance(f64),

    /// Published resale shares for ages 1, 2, …; the last one holds for older vehicles.
    ByAge(Vec<f64>),
}

impl ResidualCurve {
    #[must_use]
    pub fn fraction(&self, age: u32) -> f64 {
        if age == 0 {
            return 1.0;
        }
        match self {
            Self::DecliningBalance(rate) => (1.0 - rate).powi(age.cast_signed()),
            Self::ByAge(shares) => {
                shares.get(age as usize - 1).or_else(|| shares.last()).copied().unwrap_or(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_declining_balance() {
        assert_abs_diff_eq!(ResidualCurve::DecliningBalance(0.15).fraction(7), 0.85_f64.powi(7));
        assert_abs_diff_eq!(ResidualCurve::DecliningBalance(0.15).fraction(0), 1.0);
    }

    #[test]
    fn test_by_age() {
        let curve = ResidualCurve::ByAge(vec![0.8, 0.65, 0.5]);
        assert_abs_diff_eq!(curve.fraction(2), 0.65);
        assert_abs_diff_eq!(curve.fraction(10), 0.5);
    }

    #[test]
    fn test_deserialize_combustion() {
        let spec: VehicleSpec = toml::from_str(
            r#"
            name = "Ford Transit 250"
            category = "light-duty"
            fhwa_class = "2B"
            list_price_cad = 55000.0
            maintenance_cad_per_km = 0.1
            insurance_rate = 0.025
            residual = { declining_balance = 0.15 }
            drive = { combustion = { consumption = 15.7, fuel = "gasoline" } }
            "#,
        )
        .unwrap();
        assert_eq!(spec.powertrain(), Powertrain::Combustion);
        assert_eq!(spec.category, Category::LightDuty);
        assert_eq!(spec.residual, Some(ResidualCurve::DecliningBalance(0.15)));
        assert_eq!(spec.payload_capacity, None);
    }
}
