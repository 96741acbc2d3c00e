//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub case_name: String,
    pub timestamp: String,
    pub solver_version: String,
    pub parameters: RunParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SolveSummaryRecord>,
    /// Snapshot files written during the run
    #[serde(default)]
    pub snapshots: Vec<String>,
}

/// Inputs of a run beyond the case file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunParameters {
    /// Uniform fuel heat source, W/cm^3
    pub power_density: f64,
    pub timesteps: usize,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SolveSummaryRecord {
    pub columns: usize,
    pub min_temperature_k: f64,
    pub max_temperature_k: f64,
    pub solve_time_s: f64,
    pub total_time_s: f64,
}

/// Radial profile of one `(pin, axial)` column after the last solve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnRecord {
    pub pin: usize,
    pub axial: usize,
    pub temperature_k: Vec<f64>,
    pub source_w_cm3: Vec<f64>,
}

/// RFC 3339 timestamp for a manifest.
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339()
}
