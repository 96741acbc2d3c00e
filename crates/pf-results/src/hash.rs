//! Content-based hashing for run IDs.

use crate::types::RunParameters;
use pf_project::SurrogateConfig;
use sha2::{Digest, Sha256};

/// Identical inputs map to the same run directory.
pub fn compute_run_id(
    config: &SurrogateConfig,
    parameters: &RunParameters,
    solver_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_string(config).unwrap_or_default();
    hasher.update(config_json.as_bytes());

    let parameters_json = serde_json::to_string(parameters).unwrap_or_default();
    hasher.update(parameters_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
