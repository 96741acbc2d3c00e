//! Configuration validation.

use crate::schema::{ConductivityDef, SurrogateConfig};
use pf_geometry::{GeometryError, GeometryModel};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_config(config: &SurrogateConfig) -> Result<(), ValidationError> {
    if config.version == 0 || config.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    // Building the model runs every geometric precondition.
    GeometryModel::new(config.to_geometry_params())?;

    let z = &config.axial.z;
    if z.len() < 2 {
        return Err(invalid(
            "axial.z",
            format!("{} values", z.len()),
            "at least two boundaries are required",
        ));
    }
    if let Some(bad) = z.iter().find(|v| !v.is_finite()) {
        return Err(invalid("axial.z", bad, "must be finite"));
    }
    if z.windows(2).any(|w| w[1] <= w[0]) {
        return Err(invalid(
            "axial.z",
            format!("{:?}", z),
            "must be strictly increasing",
        ));
    }

    let solver = &config.solver;
    if !(solver.tolerance.is_finite() && solver.tolerance > 0.0) {
        return Err(invalid("solver.tolerance", solver.tolerance, "must be positive"));
    }
    if solver.max_iterations == 0 {
        return Err(invalid(
            "solver.max_iterations",
            solver.max_iterations,
            "must be at least 1",
        ));
    }
    if let ConductivityDef::Constant { fuel, clad } = solver.conductivity {
        if !(fuel.is_finite() && fuel > 0.0) {
            return Err(invalid("solver.conductivity.fuel", fuel, "must be positive"));
        }
        if !(clad.is_finite() && clad > 0.0) {
            return Err(invalid("solver.conductivity.clad", clad, "must be positive"));
        }
    }
    if let Some(h) = solver.gap_conductance
        && !(h.is_finite() && h > 0.0)
    {
        return Err(invalid("solver.gap_conductance", h, "must be positive"));
    }

    if let Some(viz) = &config.visualization {
        if viz.resolution < 3 {
            return Err(invalid(
                "visualization.resolution",
                viz.resolution,
                "at least 3 azimuthal segments are required",
            ));
        }
        if viz.filename.as_deref() == Some("") {
            return Err(invalid("visualization.filename", "\"\"", "must not be empty"));
        }
    }

    Ok(())
}
