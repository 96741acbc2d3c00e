//! Error types for the driver layer.

use thiserror::Error;

/// Aggregates every error the surrogate stack can raise.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Project error: {0}")]
    Project(#[from] pf_project::ProjectError),

    #[error("Validation error: {0}")]
    Validation(#[from] pf_project::ValidationError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] pf_geometry::GeometryError),

    #[error("Field error: {0}")]
    Field(#[from] pf_fields::FieldError),

    #[error("Conduction error: {0}")]
    Conduction(#[from] pf_conduction::ConductionError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] pf_snapshot::SnapshotError),

    #[error("Lifecycle error: {what}")]
    Lifecycle { what: String },

    #[error("Invalid input: {what}")]
    InvalidInput { what: String },
}

pub type DriverResult<T> = Result<T, DriverError>;
