//! 3-D field storage for the surrogate model.
//!
//! Every field is a dense `(pin, axial, ring)` array stored row-major, so a
//! flattened view enumerates pins first, then axial levels, then rings.
//! The ring axis is contiguous: one `(pin, axial)` column is one slice.

pub mod error;
pub mod field;
pub mod store;

pub use error::{FieldError, FieldResult};
pub use field::{Field3D, Shape3};
pub use store::FieldStore;
