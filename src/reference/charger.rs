use serde::{Deserialize, Serialize};

use crate::quantity::Dollars;

/// Charging equipment an EV depends on.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Charger {
    pub name: String,

    #[serde(rename = "installed_cost_cad")]
    pub installed_cost: Dollars,

    /// Share of the charger attributed to a single vehicle (1 / vehicles per charger).
    #[serde(default = "Charger::default_vehicle_share")]
    pub vehicle_share: f64,

    /// Yearly maintenance as a share of the attributed cost.
    #[serde(default)]
    pub maintenance_rate: f64,

    /// Capital cost allowance rate, when the residual value is modeled.
    #[serde(default)]
    pub cca_rate: Option<f64>,
}

impl Charger {
    const fn default_vehicle_share() -> f64 {
        1.0
    }

    /// Installed cost attributed to one vehicle.
    pub fn vehicle_cost(&self) -> Dollars {
        self.installed_cost * self.vehicle_share
    }

    /// Undepreciated capital cost after `years`, with the half-year rule in the first year.
    pub fn residual_value(&self, years: u32) -> Dollars {
        let Some(rate) = self.cca_rate else {
            return Dollars::ZERO;
        };
        if years == 0 {
            return self.vehicle_cost();
        }
        self.vehicle_cost() * (1.0 - 0.5 * rate) * (1.0 - rate).powi(years.cast_signed() - 1)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn charger(cca_rate: Option<f64>) -> Charger {
        Charger {
            name: "Level 2".to_string(),
            installed_cost: Dollars(10_000.0),
            vehicle_share: 0.5,
            maintenance_rate: 0.02,
            cca_rate,
        }
    }

    #[test]
    fn test_vehicle_cost() {
        assert_abs_diff_eq!(charger(None).vehicle_cost().0, 5_000.0);
    }

    #[test]
    fn test_residual_value_half_year_rule() {
        // 5000 × (1 − 0.15) × 0.7⁶
        assert_abs_diff_eq!(
            charger(Some(0.3)).residual_value(7).0,
            5_000.0 * 0.85 * 0.117_649,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(charger(Some(0.3)).residual_value(1).0, 4_250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_residual_value_not_modeled() {
        assert_eq!(charger(None).residual_value(7), Dollars::ZERO);
    }
}
