//! pf-driver: the surrogate heat/fluids driver and its run loop.
//!
//! [`HeatFluidsDriver`] is the capability an outer coupling loop drives;
//! [`SurrogateHeatDriver`] implements it on top of the geometry, field,
//! conduction and snapshot crates.

pub mod build;
pub mod driver;
pub mod error;
pub mod run;
pub mod surrogate;

pub use build::{conduction_backend, snapshot_scheduler};
pub use driver::HeatFluidsDriver;
pub use error::{DriverError, DriverResult};
pub use run::{RunOutcome, RunSchedule, run_schedule};
pub use surrogate::SurrogateHeatDriver;
