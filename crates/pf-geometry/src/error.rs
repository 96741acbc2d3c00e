//! Error types for geometry construction.

use pf_core::PfError;
use thiserror::Error;

/// Errors raised while building bundle geometry from configuration.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },
}

pub type GeometryResult<T> = Result<T, GeometryError>;

impl GeometryError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        GeometryError::Configuration { what: what.into() }
    }
}

impl From<PfError> for GeometryError {
    fn from(e: PfError) -> Self {
        GeometryError::Configuration {
            what: e.to_string(),
        }
    }
}
