#[macro_use]
mod macros;

pub mod consumption;
pub mod distance;
pub mod energy;
pub mod mass;
pub mod money;
pub mod price;
pub mod volume;

pub use self::{
    consumption::{KilowattHoursPer100Km, LitresPer100Km},
    distance::Kilometres,
    energy::KilowattHours,
    mass::Pounds,
    money::Dollars,
    price::{DollarsPerKilometre, DollarsPerKilowattHour, DollarsPerLitre},
    volume::Litres,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max() {
        assert_eq!(Dollars(1.0).min(Dollars(2.0)), Dollars(1.0));
        assert_eq!(Dollars(1.0).max(Dollars(2.0)), Dollars(2.0));
    }

    #[test]
    fn test_sum() {
        let total: Dollars = [Dollars(1.5), Dollars(2.5), -Dollars(1.0)].into_iter().sum();
        assert_eq!(total, Dollars(3.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0.04".parse::<DollarsPerKilometre>().unwrap(), DollarsPerKilometre(0.04));
    }
}
