mod compare;
mod scenario;
mod sweep;
mod vehicles;

use clap::{Parser, Subcommand};

pub use self::{compare::compare, sweep::sweep, vehicles::vehicles};
use crate::cli::{compare::CompareArgs, sweep::SweepArgs, vehicles::VehiclesArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the EV and ICE total cost of ownership year by year.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Compare the same scenario over several daily distances.
    #[clap(name = "sweep")]
    Sweep(Box<SweepArgs>),

    /// List the vehicle catalog.
    #[clap(name = "vehicles")]
    Vehicles(Box<VehiclesArgs>),
}

#[cfg(test)]
mod tests {
    use tco::{
        core::{Acquisition, Category, Province},
        quantity::{Dollars, Kilometres, Pounds},
    };

    use super::*;

    #[test]
    fn test_parse_compare() {
        let args = Args::try_parse_from([
            "tco",
            "compare",
            "--daily-distance-km",
            "200",
            "--category",
            "light duty",
            "--province",
            "bc",
            "--ev",
            "Ford E-Transit",
            "--ice",
            "Ford Transit 250",
            "--payload-lbs",
            "1500",
            "--ice-price",
            "60000",
            "--json",
        ])
        .unwrap();
        let Command::Compare(args) = args.command else {
            panic!("expected `compare`");
        };
        assert!(args.json);
        let scenario = args.scenario.scenario(args.daily_distance).unwrap();
        assert_eq!(scenario.daily_distance, Kilometres(200.0));
        assert_eq!(scenario.category, Category::LightDuty);
        assert_eq!(scenario.province, Province::Bc);
        assert_eq!(scenario.max_payload, Pounds(1500.0));
        assert_eq!(scenario.years, 7);
        assert_eq!(scenario.ice_overrides.price, Some(Dollars(60_000.0)));
        assert_eq!(scenario.acquisition, Acquisition::Purchase);
    }

    #[test]
    fn test_parse_financed_sweep() {
        let args = Args::try_parse_from([
            "tco",
            "sweep",
            "--distances",
            "50,100,200",
            "--category",
            "heavy-duty",
            "--province",
            "AB",
            "--ev",
            "Freightliner eCascadia",
            "--ice",
            "Freightliner Cascadia",
            "--finance",
            "--term-years",
            "6",
        ])
        .unwrap();
        let Command::Sweep(args) = args.command else {
            panic!("expected `sweep`");
        };
        assert_eq!(args.distances, [Kilometres(50.0), Kilometres(100.0), Kilometres(200.0)]);
        let scenario = args.scenario.scenario(args.distances[0]).unwrap();
        assert_eq!(
            scenario.acquisition,
            Acquisition::Finance {
                down_payment_share: 0.2,
                annual_interest_rate: 0.06,
                term_years: 6
            }
        );
    }

    #[test]
    fn test_unknown_category() {
        assert!(
            Args::try_parse_from([
                "tco",
                "compare",
                "--daily-distance-km",
                "200",
                "--category",
                "super duty",
                "--province",
                "BC",
                "--ev",
                "A",
                "--ice",
                "B",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_invalid_scenario() {
        let args = Args::try_parse_from([
            "tco",
            "compare",
            "--daily-distance-km",
            "0",
            "--category",
            "medium",
            "--province",
            "QC",
            "--ev",
            "Motiv EPIC 6",
            "--ice",
            "Ford F-650",
        ])
        .unwrap();
        let Command::Compare(args) = args.command else {
            panic!("expected `compare`");
        };
        assert!(args.scenario.scenario(args.daily_distance).is_err());
    }
}
