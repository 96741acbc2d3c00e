//! Writer interface and the data handed to it.

use crate::error::{SnapshotError, SnapshotResult};
use pf_fields::{FieldStore, Shape3};
use pf_geometry::{AxialGrid, GeometryModel};
use std::path::Path;

/// Which cell fields are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSelection {
    #[default]
    All,
    Temperature,
    Density,
    Source,
}

impl DataSelection {
    pub fn temperature(self) -> bool {
        matches!(self, DataSelection::All | DataSelection::Temperature)
    }

    pub fn density(self) -> bool {
        matches!(self, DataSelection::All | DataSelection::Density)
    }

    pub fn source(self) -> bool {
        matches!(self, DataSelection::All | DataSelection::Source)
    }

    pub fn fluid_mask(self) -> bool {
        matches!(self, DataSelection::All)
    }
}

/// Which rings are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionSelection {
    #[default]
    All,
    Fuel,
    Clad,
}

impl RegionSelection {
    pub fn includes(self, is_fuel_ring: bool) -> bool {
        match self {
            RegionSelection::All => true,
            RegionSelection::Fuel => is_fuel_ring,
            RegionSelection::Clad => !is_fuel_ring,
        }
    }
}

/// Output options shared by all writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSettings {
    /// Azimuthal segments per ring
    pub resolution: usize,
    pub data: DataSelection,
    pub regions: RegionSelection,
}

pub const DEFAULT_RESOLUTION: usize = 20;

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            data: DataSelection::default(),
            regions: RegionSelection::default(),
        }
    }
}

/// Read-only view of the model state being serialized.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub geometry: &'a GeometryModel,
    pub axial: &'a AxialGrid,
    pub fields: &'a FieldStore,
}

impl Snapshot<'_> {
    /// Fails unless the fields are shaped by this geometry and axial grid.
    pub fn check_shape(&self) -> SnapshotResult<()> {
        let expected = Shape3::from_geometry(self.geometry, self.axial);
        let actual = self.fields.shape();
        if actual != expected {
            return Err(SnapshotError::InvalidSettings {
                what: format!(
                    "fields are shaped {:?}, geometry and axial grid imply {:?}",
                    actual, expected
                ),
            });
        }
        Ok(())
    }
}

/// Serializes one snapshot to `path`.
///
/// A failed write must not leave a file that looks valid behind.
pub trait SnapshotWriter: Send + Sync {
    fn write(
        &self,
        path: &Path,
        snapshot: &Snapshot<'_>,
        settings: &SnapshotSettings,
    ) -> SnapshotResult<()>;
}
