//! Error type for the command-line front end.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Project error: {0}")]
    Project(#[from] pf_project::ProjectError),

    #[error("Driver error: {0}")]
    Driver(#[from] pf_driver::DriverError),

    #[error("Results error: {0}")]
    Results(#[from] pf_results::ResultsError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CliResult<T> = Result<T, CliError>;
