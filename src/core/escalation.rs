use serde::{Deserialize, Serialize};

/// Year-over-year growth of a unit rate.
///
/// Compounding starts from the first projection year: year 1 always uses the base rate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Escalation {
    /// Constant yearly rate, `(1 + r)^(year - 1)`.
    Compound(f64),

    /// Published multipliers, one per projection year. The last one holds for later years.
    Schedule(Vec<f64>),
}

impl Default for Escalation {
    fn default() -> Self {
        Self::Compound(0.0)
    }
}

impl Escalation {
    /// Multiplier for the 1-based projection year.
    #[must_use]
    pub fn factor(&self, year: u32) -> f64 {
        let index = year.saturating_sub(1);
        match self {
            Self::Compound(rate) => (1.0 + rate).powi(index.cast_signed()),
            Self::Schedule(multipliers) => multipliers
                .get(index as usize)
                .or_else(|| multipliers.last())
                .copied()
                .unwrap_or(1.0),
        }
    }
}
