//! Schema migration.

use crate::ProjectError;
use crate::schema::SurrogateConfig;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut config: SurrogateConfig) -> Result<SurrogateConfig, ProjectError> {
    while config.version < LATEST_VERSION {
        config = migrate_one_version(config)?;
    }
    Ok(config)
}

fn migrate_one_version(config: SurrogateConfig) -> Result<SurrogateConfig, ProjectError> {
    match config.version {
        0 => migrate_v0_to_v1(config),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// v0 files carry the same sections unversioned.
fn migrate_v0_to_v1(mut config: SurrogateConfig) -> Result<SurrogateConfig, ProjectError> {
    config.version = 1;
    Ok(config)
}
