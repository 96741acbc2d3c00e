//! Snapshot scheduling: when to write and what to call the file.

use crate::error::{SnapshotError, SnapshotResult};
use crate::writer::{Snapshot, SnapshotSettings, SnapshotWriter};
use pf_fields::FieldStore;
use pf_geometry::{AxialGrid, GeometryModel};
use std::path::PathBuf;
use tracing::{debug, info};

/// Extension appended to every snapshot basename.
pub const SNAPSHOT_EXTENSION: &str = "vtk";

/// Which `write_step` calls produce output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotMode {
    /// Only the final call (`iteration < 0`).
    #[default]
    Final,
    /// Every intermediate call (`iteration >= 0`); the final call is skipped.
    All,
    None,
}

/// Decision table for one request. A negative `iteration` marks the final call.
pub fn should_write(mode: SnapshotMode, iteration: i64) -> bool {
    let is_final = iteration < 0;
    match mode {
        SnapshotMode::Final => is_final,
        SnapshotMode::All => !is_final,
        SnapshotMode::None => false,
    }
}

/// `<base>.vtk`, or `<base>_t<timestep>_i<iteration>.vtk` when both are non-negative.
pub fn snapshot_filename(base: &str, timestep: i64, iteration: i64) -> String {
    if timestep >= 0 && iteration >= 0 {
        format!("{base}_t{timestep}_i{iteration}.{SNAPSHOT_EXTENSION}")
    } else {
        format!("{base}.{SNAPSHOT_EXTENSION}")
    }
}

pub struct SnapshotScheduler {
    mode: SnapshotMode,
    basename: Option<String>,
    output_dir: Option<PathBuf>,
    settings: SnapshotSettings,
    writer: Box<dyn SnapshotWriter>,
}

impl SnapshotScheduler {
    /// A missing basename disables output regardless of `mode`.
    pub fn new(
        mode: SnapshotMode,
        basename: Option<String>,
        settings: SnapshotSettings,
        writer: Box<dyn SnapshotWriter>,
    ) -> SnapshotResult<Self> {
        if settings.resolution < 3 {
            return Err(SnapshotError::InvalidSettings {
                what: format!("resolution must be at least 3, got {}", settings.resolution),
            });
        }
        let basename = basename.filter(|b| !b.is_empty());
        Ok(Self {
            mode,
            basename,
            output_dir: None,
            settings,
            writer,
        })
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Effective mode after accounting for a missing basename.
    pub fn mode(&self) -> SnapshotMode {
        if self.basename.is_some() {
            self.mode
        } else {
            SnapshotMode::None
        }
    }

    pub fn basename(&self) -> Option<&str> {
        self.basename.as_deref()
    }

    pub fn settings(&self) -> &SnapshotSettings {
        &self.settings
    }

    /// Path a write for this request would go to, if one is due.
    pub fn target_path(&self, timestep: i64, iteration: i64) -> Option<PathBuf> {
        if !should_write(self.mode(), iteration) {
            return None;
        }
        let base = self.basename.as_deref()?;
        let name = snapshot_filename(base, timestep, iteration);
        Some(match &self.output_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        })
    }

    /// Writes a snapshot if one is due; returns the file written.
    pub fn maybe_write(
        &self,
        timestep: i64,
        iteration: i64,
        geometry: &GeometryModel,
        axial: &AxialGrid,
        fields: &FieldStore,
    ) -> SnapshotResult<Option<PathBuf>> {
        let Some(path) = self.target_path(timestep, iteration) else {
            debug!(timestep, iteration, mode = ?self.mode(), "Snapshot skipped");
            return Ok(None);
        };

        if let Some(dir) = &self.output_dir {
            std::fs::create_dir_all(dir).map_err(|source| SnapshotError::Io {
                path: dir.clone(),
                source,
            })?;
        }

        let snapshot = Snapshot {
            geometry,
            axial,
            fields,
        };
        self.writer.write(&path, &snapshot, &self.settings)?;
        info!(path = %path.display(), timestep, iteration, "Snapshot written");
        Ok(Some(path))
    }
}
