use std::path::PathBuf;

use crate::core::Province;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed scenario input.
    #[error("invalid `{field}`: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Vehicle, charger, or program is absent from the reference data.
    #[error("{kind} `{key}` is not found in the reference data")]
    DataNotFound { kind: &'static str, key: String },

    #[error("no fuel and electricity rates for province `{0}`")]
    UnsupportedRegion(Province),

    #[error("failed to read `{path}`")]
    Io {
        path: PathBuf,

        #[source]
        source: std::io::Error,
    },

    #[error("malformed reference data")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::DataNotFound { kind, key: key.into() }
    }
}
