//! Pin-bundle geometry for the surrogate thermal-hydraulics model.
//!
//! Decomposes a rectangular lattice of fuel pins into pin centers, a
//! coolant-centered channel partition with per-channel mass-flow shares,
//! radial ring grids for the fuel and clad, and the axial plane grid.

pub mod axial;
pub mod channels;
pub mod error;
pub mod model;
pub mod radial;

pub use axial::AxialGrid;
pub use channels::{ChannelKind, ChannelPartition};
pub use error::{GeometryError, GeometryResult};
pub use model::{GeometryModel, GeometryParams, PinLayout};
pub use radial::RadialGrid;
