//! pf-core: shared foundation for pinflow.
//!
//! Contains:
//! - units (uom SI types, constructors and the cm/W-per-cm3 conversions)
//! - numeric (tolerances + float helpers)
//! - error (shared error types)
//! - timing (wall-clock timer for solve phases)

pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use timing::Timer;
pub use units::*;
