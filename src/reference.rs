//! Reference data: the vehicle catalog, regional rates, and incentive programs.
//!
//! The engine only talks to [`ReferenceData`], so the storage format stays outside the core.
//! [`Snapshot`] is the TOML-backed implementation shipped with the crate.

mod assumptions;
mod charger;
mod incentive;
mod region;
mod snapshot;
mod vehicle;

pub use self::{
    assumptions::Assumptions,
    charger::Charger,
    incentive::{
        Applicant,
        CreditBasis,
        CreditProgram,
        Eligibility,
        IncentiveProgram,
        ProgramAmount,
        ProgramKind,
    },
    region::{RegionEscalation, RegionRates},
    snapshot::Snapshot,
    vehicle::{Drive, ResidualCurve, VehicleSpec},
};
use crate::{
    core::{Category, Powertrain, Province},
    prelude::*,
};

/// Read-only lookups the engine needs.
///
/// Lookups are deterministic for a given key and fail with [`Error::DataNotFound`]
/// or [`Error::UnsupportedRegion`] instead of falling back to defaults.
pub trait ReferenceData: Sync {
    fn assumptions(&self) -> &Assumptions;

    fn vehicle(&self, name: &str, powertrain: Powertrain, category: Category)
    -> Result<&VehicleSpec>;

    fn charger(&self, name: &str) -> Result<&Charger>;

    fn region(&self, province: Province) -> Result<&RegionRates>;

    fn incentives(&self) -> &[IncentiveProgram];

    fn credits(&self) -> &[CreditProgram];
}
