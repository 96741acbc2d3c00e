//! Visualization snapshots of the surrogate fields.
//!
//! [`SnapshotScheduler`] decides, per `(timestep, iteration)` request,
//! whether a snapshot is due and which file it goes to; the bytes are
//! produced by a [`SnapshotWriter`] such as the legacy-VTK [`VtkWriter`].

pub mod error;
pub mod scheduler;
pub mod vtk;
pub mod writer;

pub use error::{SnapshotError, SnapshotResult};
pub use scheduler::{SnapshotMode, SnapshotScheduler, should_write, snapshot_filename};
pub use vtk::VtkWriter;
pub use writer::{DataSelection, RegionSelection, Snapshot, SnapshotSettings, SnapshotWriter};
