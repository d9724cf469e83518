use crate::quantity::{
    DollarsPerKilometre,
    KilowattHours,
    KilowattHoursPer100Km,
    Litres,
    LitresPer100Km,
    money::Dollars,
};

quantity!(Kilometres, suffix: "km", precision: 0);

implement_mul!(Kilometres, DollarsPerKilometre, Dollars);

impl std::ops::Mul<KilowattHoursPer100Km> for Kilometres {
    type Output = KilowattHours;

    fn mul(self, rhs: KilowattHoursPer100Km) -> Self::Output {
        KilowattHours(self.0 / 100.0 * rhs.0)
    }
}

impl std::ops::Mul<LitresPer100Km> for Kilometres {
    type Output = Litres;

    fn mul(self, rhs: LitresPer100Km) -> Self::Output {
        Litres(self.0 / 100.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_energy_from_consumption() {
        let energy = Kilometres(73_000.0) * KilowattHoursPer100Km(35.0);
        assert_abs_diff_eq!(energy.0, 25_550.0);
    }

    #[test]
    fn test_fuel_from_consumption() {
        let fuel = Kilometres(1_000.0) * LitresPer100Km(12.5);
        assert_abs_diff_eq!(fuel.0, 125.0);
    }
}
