//! Per-column steady-state radial conduction for the surrogate model.
//!
//! [`ConductionStepper`] owns unit conversion, column enumeration and the
//! write-back of converged temperatures. The nonlinear solve of each
//! `(pin, axial)` column is delegated to a [`ConductionSolver`] backend;
//! [`RadialConduction`] is the built-in finite-volume / Newton backend.

pub mod error;
pub mod jacobian;
pub mod materials;
pub mod newton;
pub mod radial;
pub mod solver;
pub mod stepper;

pub use error::{ConductionError, ConductionResult};
pub use materials::Conductivity;
pub use newton::{NewtonConfig, NewtonResult};
pub use radial::RadialConduction;
pub use solver::{ColumnInput, ConductionSolver};
pub use stepper::{ConductionStepper, StepSummary};
