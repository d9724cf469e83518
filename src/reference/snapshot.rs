use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{Category, Powertrain, Province},
    prelude::*,
    reference::{
        Assumptions,
        Charger,
        CreditProgram,
        IncentiveProgram,
        ReferenceData,
        RegionRates,
        VehicleSpec,
    },
};

/// Reference data loaded once at startup and never mutated afterwards.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub assumptions: Assumptions,

    #[serde(default)]
    pub regions: Vec<RegionRates>,

    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,

    #[serde(default)]
    pub chargers: Vec<Charger>,

    #[serde(default)]
    pub incentives: Vec<IncentiveProgram>,

    #[serde(default)]
    pub credits: Vec<CreditProgram>,
}

impl Snapshot {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let this = Self::from_toml_str(&text)?;
        info!(
            n_regions = this.regions.len(),
            n_vehicles = this.vehicles.len(),
            n_chargers = this.chargers.len(),
            n_incentives = this.incentives.len(),
            n_credits = this.credits.len(),
            "loaded reference data",
        );
        Ok(this)
    }

    /// Vehicles of the powertrain, in catalog order.
    pub fn vehicles_of(&self, powertrain: Powertrain) -> impl Iterator<Item = &VehicleSpec> {
        self.vehicles.iter().filter(move |vehicle| vehicle.powertrain() == powertrain)
    }
}

impl ReferenceData for Snapshot {
    fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    fn vehicle(
        &self,
        name: &str,
        powertrain: Powertrain,
        category: Category,
    ) -> Result<&VehicleSpec> {
        self.vehicles_of(powertrain)
            .filter(|vehicle| vehicle.name.eq_ignore_ascii_case(name.trim()))
            .find(|vehicle| vehicle.category == category)
            .ok_or_else(|| Error::not_found("vehicle", format!("{powertrain} {name} ({category})")))
    }

    fn charger(&self, name: &str) -> Result<&Charger> {
        self.chargers
            .iter()
            .find(|charger| charger.name == name)
            .ok_or_else(|| Error::not_found("charger", name))
    }

    fn region(&self, province: Province) -> Result<&RegionRates> {
        self.regions
            .iter()
            .find(|region| region.province == province)
            .ok_or(Error::UnsupportedRegion(province))
    }

    fn incentives(&self) -> &[IncentiveProgram] {
        &self.incentives
    }

    fn credits(&self) -> &[CreditProgram] {
        &self.credits
    }
}
