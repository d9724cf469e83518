quantity!(
    /// Canadian dollars. Costs are positive, credits are negative.
    Dollars, suffix: "CAD", precision: 2
);

impl Dollars {
    pub const ONE_CENT: Self = Self(0.01);

    /// Round to whole cents, the way the workbook displays its cells.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }
}
