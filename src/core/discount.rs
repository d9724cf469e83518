use crate::quantity::Dollars;

/// Present-value factors `1 / (1 + r)^year` for years `1..=years`.
///
/// Computed once per calculation and shared by both vehicles.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct DiscountSchedule {
    factors: Vec<f64>,
}

impl DiscountSchedule {
    pub fn new(rate: f64, years: u32) -> Self {
        let mut factors = Vec::with_capacity(years as usize);
        let mut factor = 1.0;
        for _ in 1..=years {
            factor /= 1.0 + rate;
            factors.push(factor);
        }
        Self { factors }
    }

    #[must_use]
    pub const fn years(&self) -> usize {
        self.factors.len()
    }

    /// Factor of the 1-based year. Years outside the horizon weigh nothing.
    #[must_use]
    pub fn factor(&self, year: u32) -> f64 {
        year.checked_sub(1)
            .and_then(|index| self.factors.get(index as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of the discounted amounts, the first one being year 1.
    ///
    /// Amounts past the horizon are ignored, so the caller must check [`DiscountSchedule::years`].
    pub fn present_value(&self, amounts: impl IntoIterator<Item = Dollars>) -> Dollars {
        amounts.into_iter().zip(&self.factors).map(|(amount, factor)| amount * *factor).sum()
    }
}
