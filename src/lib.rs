#![doc = include_str!("../README.md")]

pub mod core;
pub mod error;
pub mod prelude;
pub mod quantity;
pub mod reference;

pub use crate::error::Error;

#[cfg(test)]
mod fixtures {
    use crate::{
        core::{Category, Province, Scenario},
        reference::Snapshot,
    };

    pub const REFERENCE_TOML: &str = include_str!("../data/reference.toml");

    pub fn snapshot() -> Snapshot {
        Snapshot::from_toml_str(REFERENCE_TOML).unwrap()
    }

    /// British Columbia, light duty, 200 km a day, with the default horizon and discount rate.
    pub fn scenario() -> Scenario {
        Scenario::builder()
            .daily_distance(200.0)
            .category(Category::LightDuty)
            .ev_vehicle_name("Ford E-Transit")
            .ice_vehicle_name("Ford Transit 250")
            .province(Province::Bc)
            .build()
            .unwrap()
    }
}
