//! Error types for conduction solves.

use pf_fields::FieldError;
use thiserror::Error;

/// Errors that can occur while solving the conduction columns.
#[derive(Error, Debug)]
pub enum ConductionError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Conduction solve failed for pin {pin}, axial level {axial}: {what}")]
    NotConverged {
        pin: usize,
        axial: usize,
        what: String,
    },

    #[error("Invalid temperature {value} K at pin {pin}, axial level {axial}, ring {ring}")]
    InvalidTemperature {
        pin: usize,
        axial: usize,
        ring: usize,
        value: f64,
    },

    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

pub type ConductionResult<T> = Result<T, ConductionError>;
