//! Backend interface for a single-column conduction solve.

use crate::error::ConductionResult;

/// Inputs for one `(pin, axial)` column, already in SI units.
#[derive(Debug, Clone, Copy)]
pub struct ColumnInput<'a> {
    /// Volumetric heat source per ring, fuel rings first (W/m^3)
    pub source: &'a [f64],
    /// Fuel ring boundaries from the centerline to the pellet surface (m)
    pub r_fuel: &'a [f64],
    /// Clad ring boundaries from the inner to the outer clad surface (m)
    pub r_clad: &'a [f64],
    /// Temperature imposed at the clad outer surface (K)
    pub boundary_temperature: f64,
    /// Convergence tolerance of the nonlinear solve
    pub tolerance: f64,
}

impl ColumnInput<'_> {
    pub fn n_fuel_rings(&self) -> usize {
        self.r_fuel.len().saturating_sub(1)
    }

    pub fn n_clad_rings(&self) -> usize {
        self.r_clad.len().saturating_sub(1)
    }

    pub fn n_rings(&self) -> usize {
        self.n_fuel_rings() + self.n_clad_rings()
    }
}

/// A nonlinear steady-state radial conduction solver.
///
/// Implementations must be pure with respect to the column: the stepper calls
/// `solve_column` concurrently for different columns.
pub trait ConductionSolver: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Solve one column.
    ///
    /// `temperature` holds the initial guess on entry (one value per ring)
    /// and must hold the converged ring temperatures (K) on success.
    fn solve_column(
        &self,
        input: &ColumnInput<'_>,
        temperature: &mut [f64],
    ) -> ConductionResult<()>;
}
