//! Heat/fluids driver capability.

use crate::error::DriverResult;

/// A heat/fluids solver as seen by a coupling loop.
///
/// The flattened views enumerate pins first, then axial levels, then rings.
pub trait HeatFluidsDriver {
    /// Prepare for a new coupling step.
    fn init_step(&mut self) -> DriverResult<()>;

    fn solve_step(&mut self) -> DriverResult<()>;

    /// Emit a snapshot if one is due. A negative `iteration` marks the final call.
    fn write_step(&mut self, timestep: i64, iteration: i64) -> DriverResult<()>;

    /// Close the current coupling step.
    fn finalize_step(&mut self) -> DriverResult<()>;

    fn temperature(&self) -> &[f64];

    fn density(&self) -> &[f64];

    fn fluid_mask(&self) -> &[i32];

    fn n_pins(&self) -> usize;

    fn n_axial(&self) -> usize;

    fn n_rings(&self) -> usize;
}
