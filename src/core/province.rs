use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Canadian province or territory, keyed by its postal code.
#[derive(
    Copy,
    Clone,
    Debug,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
#[display(rename_all = "UPPERCASE")]
pub enum Province {
    Ab,
    Bc,
    Mb,
    Nb,
    Nl,
    Ns,
    Nt,
    Nu,
    On,
    Pe,
    Qc,
    Sk,
    Yt,
}

impl FromStr for Province {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let code = code.trim();
        <Self as ValueEnum>::from_str(code, true)
            .map_err(|_| Error::validation("province", format!("unknown region code `{code}`")))
    }
}
