//! Orchestration of the per-column conduction solves.

use crate::error::{ConductionError, ConductionResult};
use crate::solver::{ColumnInput, ConductionSolver};
use pf_core::Timer;
use pf_core::constants::INLET_TEMPERATURE_K;
use pf_core::units::{cm_slice_to_m, w_per_cm3_slice_to_w_per_m3};
use pf_fields::FieldStore;
use pf_geometry::GeometryModel;
use rayon::prelude::*;

/// Outcome of one [`ConductionStepper::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummary {
    pub columns: usize,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub elapsed_s: f64,
}

/// Solves every `(pin, axial)` column of the temperature field.
///
/// Columns are independent: each one reads its own slice of the source
/// field plus the shared radial grids and writes only its own slice of the
/// temperature field.
pub struct ConductionStepper {
    solver: Box<dyn ConductionSolver>,
    tolerance: f64,
}

impl ConductionStepper {
    pub fn new(solver: Box<dyn ConductionSolver>, tolerance: f64) -> ConductionResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConductionError::ProblemSetup {
                what: format!("tolerance must be positive, got {}", tolerance),
            });
        }
        Ok(Self { solver, tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Clad-surface temperature imposed on every column (K).
    pub fn boundary_temperature(&self) -> f64 {
        INLET_TEMPERATURE_K
    }

    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    /// Reset temperatures to the boundary value and solve all columns.
    ///
    /// Any failing column aborts the step; the temperature field is then in
    /// an unspecified but finite-sized state and must not be consumed.
    pub fn solve(
        &self,
        geometry: &GeometryModel,
        fields: &mut FieldStore,
    ) -> ConductionResult<StepSummary> {
        let timer = Timer::start("conduction solve");
        let shape = fields.shape();
        if shape.n_rings != geometry.n_rings() || shape.n_pins != geometry.n_pins() {
            return Err(ConductionError::ProblemSetup {
                what: format!(
                    "field shape {:?} does not match geometry ({} pins, {} rings)",
                    shape,
                    geometry.n_pins(),
                    geometry.n_rings()
                ),
            });
        }

        let t_boundary = self.boundary_temperature();
        let grid = geometry.radial_grid();
        let r_fuel = cm_slice_to_m(grid.fuel());
        let r_clad = cm_slice_to_m(grid.clad());

        let (source, temperature) = fields.source_and_temperature_mut();
        temperature.fill(t_boundary);
        let q = w_per_cm3_slice_to_w_per_m3(source.as_slice());

        tracing::info!(
            solver = self.solver.name(),
            columns = shape.n_columns(),
            rings = shape.n_rings,
            "Solving heat equation"
        );

        let n_rings = shape.n_rings;
        temperature
            .as_mut_slice()
            .par_chunks_mut(n_rings)
            .zip(q.par_chunks(n_rings))
            .enumerate()
            .try_for_each(|(column, (t_col, q_col))| {
                let (pin, axial) = shape.column_coords(column);
                let input = ColumnInput {
                    source: q_col,
                    r_fuel: &r_fuel,
                    r_clad: &r_clad,
                    boundary_temperature: t_boundary,
                    tolerance: self.tolerance,
                };
                self.solver
                    .solve_column(&input, t_col)
                    .map_err(|e| ConductionError::NotConverged {
                        pin,
                        axial,
                        what: e.to_string(),
                    })?;
                check_column(pin, axial, t_col)
            })?;

        let (min_temperature, max_temperature) = temperature
            .as_slice()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
                (lo.min(t), hi.max(t))
            });

        let summary = StepSummary {
            columns: shape.n_columns(),
            min_temperature,
            max_temperature,
            elapsed_s: timer.stop(),
        };
        tracing::info!(
            columns = summary.columns,
            t_max_k = summary.max_temperature,
            elapsed_s = summary.elapsed_s,
            "Heat equation solved"
        );
        Ok(summary)
    }
}

fn check_column(pin: usize, axial: usize, temperature: &[f64]) -> ConductionResult<()> {
    match temperature
        .iter()
        .enumerate()
        .find(|(_, t)| !t.is_finite() || **t < 0.0)
    {
        Some((ring, &value)) => Err(ConductionError::InvalidTemperature {
            pin,
            axial,
            ring,
            value,
        }),
        None => Ok(()),
    }
}
