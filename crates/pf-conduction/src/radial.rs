//! Finite-volume radial conduction through pellet, gap and clad.
//!
//! Each ring is one control volume with its temperature stored at the
//! mid-radius. Neighbouring rings exchange heat through a series of
//! cylindrical-shell resistances; the pellet-clad gap adds a surface
//! conductance and the outermost clad ring is tied to the imposed
//! clad-surface temperature. Everything is per unit pin length.

use crate::error::{ConductionError, ConductionResult};
use crate::jacobian::finite_difference_jacobian;
use crate::materials::Conductivity;
use crate::newton::{NewtonConfig, newton_solve};
use crate::solver::{ColumnInput, ConductionSolver};
use nalgebra::{DMatrix, DVector};
use std::f64::consts::PI;

/// Default pellet-clad gap conductance, W/(m^2 K).
pub const DEFAULT_GAP_CONDUCTANCE: f64 = 1.0e4;

/// Built-in conduction backend.
#[derive(Debug, Clone)]
pub struct RadialConduction {
    conductivity: Conductivity,
    gap_conductance: f64,
    max_iterations: usize,
}

impl Default for RadialConduction {
    fn default() -> Self {
        Self::new(Conductivity::default())
    }
}

impl RadialConduction {
    pub fn new(conductivity: Conductivity) -> Self {
        Self {
            conductivity,
            gap_conductance: DEFAULT_GAP_CONDUCTANCE,
            max_iterations: NewtonConfig::default().max_iterations,
        }
    }

    pub fn with_gap_conductance(mut self, h_gap: f64) -> Self {
        self.gap_conductance = h_gap;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn conductivity(&self) -> Conductivity {
        self.conductivity
    }

    pub fn gap_conductance(&self) -> f64 {
        self.gap_conductance
    }

    /// Net heat balance per ring (W/m): generation + inflow - outflow.
    fn residual(&self, column: &Column, t: &DVector<f64>) -> ConductionResult<DVector<f64>> {
        let n = column.n_rings();
        let mut outflow = vec![0.0; n];
        for (i, q_out) in outflow.iter_mut().enumerate() {
            let t_next = if i + 1 < n {
                t[i + 1]
            } else {
                column.boundary_temperature
            };
            *q_out = (t[i] - t_next) / self.outer_resistance(column, i, t);
        }

        Ok(DVector::from_fn(n, |i, _| {
            let inflow = if i == 0 { 0.0 } else { outflow[i - 1] };
            column.heat[i] + inflow - outflow[i]
        }))
    }

    /// Thermal resistance (m K / W) from the center of ring `i` to the
    /// center of ring `i + 1`, or to the clad surface for the last ring.
    fn outer_resistance(&self, column: &Column, i: usize, t: &DVector<f64>) -> f64 {
        let k_i = self.ring_conductivity(column, i, t[i]);
        let r_face = column.outer[i];
        let mut resistance = (r_face / column.center[i]).ln() / (2.0 * PI * k_i);

        if i + 1 == column.n_rings() {
            return resistance;
        }

        if i + 1 == column.n_fuel {
            resistance += 1.0 / (2.0 * PI * r_face * self.gap_conductance);
        }

        let k_next = self.ring_conductivity(column, i + 1, t[i + 1]);
        resistance += (column.center[i + 1] / column.inner[i + 1]).ln() / (2.0 * PI * k_next);
        resistance
    }

    fn ring_conductivity(&self, column: &Column, ring: usize, t_k: f64) -> f64 {
        if ring < column.n_fuel {
            self.conductivity.fuel(t_k)
        } else {
            self.conductivity.clad(t_k)
        }
    }
}

/// Ring geometry and heat generation of one column.
struct Column {
    n_fuel: usize,
    inner: Vec<f64>,
    outer: Vec<f64>,
    center: Vec<f64>,
    heat: Vec<f64>,
    boundary_temperature: f64,
}

impl Column {
    fn new(input: &ColumnInput<'_>) -> ConductionResult<Self> {
        let n_fuel = input.n_fuel_rings();
        let n_clad = input.n_clad_rings();
        if n_fuel == 0 || n_clad == 0 {
            return Err(ConductionError::ProblemSetup {
                what: "fuel and clad grids need at least two boundaries each".to_string(),
            });
        }
        if input.source.len() != n_fuel + n_clad {
            return Err(ConductionError::ProblemSetup {
                what: format!(
                    "source has {} rings, grids describe {}",
                    input.source.len(),
                    n_fuel + n_clad
                ),
            });
        }
        if input.r_clad[0] <= input.r_fuel[n_fuel] {
            return Err(ConductionError::ProblemSetup {
                what: "clad inner radius must exceed pellet radius".to_string(),
            });
        }
        if !input.boundary_temperature.is_finite() || input.boundary_temperature <= 0.0 {
            return Err(ConductionError::ProblemSetup {
                what: format!(
                    "boundary temperature must be positive, got {}",
                    input.boundary_temperature
                ),
            });
        }

        let bounds = input
            .r_fuel
            .windows(2)
            .chain(input.r_clad.windows(2))
            .map(|w| (w[0], w[1]));

        let mut inner = Vec::with_capacity(n_fuel + n_clad);
        let mut outer = Vec::with_capacity(n_fuel + n_clad);
        let mut center = Vec::with_capacity(n_fuel + n_clad);
        let mut heat = Vec::with_capacity(n_fuel + n_clad);
        for ((r_in, r_out), &q) in bounds.zip(input.source) {
            if r_in.is_nan() || r_out.is_nan() || r_out <= r_in {
                return Err(ConductionError::ProblemSetup {
                    what: "ring boundaries must be strictly increasing".to_string(),
                });
            }
            if !q.is_finite() {
                return Err(ConductionError::ProblemSetup {
                    what: format!("non-finite source {}", q),
                });
            }
            inner.push(r_in);
            outer.push(r_out);
            center.push(0.5 * (r_in + r_out));
            heat.push(q * PI * (r_out * r_out - r_in * r_in));
        }

        Ok(Self {
            n_fuel,
            inner,
            outer,
            center,
            heat,
            boundary_temperature: input.boundary_temperature,
        })
    }

    fn n_rings(&self) -> usize {
        self.heat.len()
    }
}

impl ConductionSolver for RadialConduction {
    fn name(&self) -> &str {
        "radial-fv-newton"
    }

    fn solve_column(
        &self,
        input: &ColumnInput<'_>,
        temperature: &mut [f64],
    ) -> ConductionResult<()> {
        let column = Column::new(input)?;
        if temperature.len() != column.n_rings() {
            return Err(ConductionError::ProblemSetup {
                what: format!(
                    "temperature buffer has {} rings, expected {}",
                    temperature.len(),
                    column.n_rings()
                ),
            });
        }

        let config = NewtonConfig {
            max_iterations: self.max_iterations,
            abs_tol: input.tolerance,
            rel_tol: input.tolerance,
            ..NewtonConfig::default()
        };

        let residual_fn =
            |t: &DVector<f64>| -> ConductionResult<DVector<f64>> { self.residual(&column, t) };
        let jacobian_fn = |t: &DVector<f64>| -> ConductionResult<DMatrix<f64>> {
            finite_difference_jacobian(t, residual_fn, 1e-7)
        };

        let x0 = DVector::from_column_slice(temperature);
        let result = newton_solve(x0, residual_fn, jacobian_fn, &config)?;

        temperature.copy_from_slice(result.x.as_slice());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::constants::INLET_TEMPERATURE_K;

    const R_FUEL: [f64; 3] = [0.0, 0.002, 0.004];
    const R_CLAD: [f64; 2] = [0.005, 0.0055];

    fn input<'a>(source: &'a [f64]) -> ColumnInput<'a> {
        ColumnInput {
            source,
            r_fuel: &R_FUEL,
            r_clad: &R_CLAD,
            boundary_temperature: INLET_TEMPERATURE_K,
            tolerance: 1e-8,
        }
    }

    #[test]
    fn zero_source_stays_at_boundary() {
        let solver = RadialConduction::default();
        let source = [0.0; 3];
        let mut t = [INLET_TEMPERATURE_K; 3];
        solver.solve_column(&input(&source), &mut t).unwrap();
        for v in t {
            assert!((v - INLET_TEMPERATURE_K).abs() < 1e-9);
        }
    }

    #[test]
    fn heated_pin_peaks_at_centerline() {
        let solver = RadialConduction::default();
        let source = [3.0e8, 3.0e8, 0.0];
        let mut t = [INLET_TEMPERATURE_K; 3];
        solver.solve_column(&input(&source), &mut t).unwrap();

        assert!(t[0] > t[1], "{t:?}");
        assert!(t[1] > t[2], "{t:?}");
        assert!(t[2] > INLET_TEMPERATURE_K, "{t:?}");
        assert!(t.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn clad_matches_log_profile_for_constant_conductivity() {
        let k_clad = 15.0;
        let solver = RadialConduction::new(Conductivity::Constant {
            fuel: 3.0,
            clad: k_clad,
        });
        let q = 2.0e8;
        let source = [q, q, 0.0];
        let mut t = [INLET_TEMPERATURE_K; 3];
        solver.solve_column(&input(&source), &mut t).unwrap();

        // All heat leaves through the clad, which carries no source.
        let linear_power = q * PI * R_FUEL[2] * R_FUEL[2];
        let r_mid = 0.5 * (R_CLAD[0] + R_CLAD[1]);
        let expected =
            INLET_TEMPERATURE_K + linear_power * (R_CLAD[1] / r_mid).ln() / (2.0 * PI * k_clad);
        assert!((t[2] - expected).abs() < 1e-6 * expected, "{} vs {}", t[2], expected);
    }

    #[test]
    fn larger_gap_conductance_cools_fuel() {
        let source = [3.0e8, 3.0e8, 0.0];

        let mut tight = [INLET_TEMPERATURE_K; 3];
        RadialConduction::default()
            .with_gap_conductance(5.0e4)
            .solve_column(&input(&source), &mut tight)
            .unwrap();

        let mut open = [INLET_TEMPERATURE_K; 3];
        RadialConduction::default()
            .with_gap_conductance(2.0e3)
            .solve_column(&input(&source), &mut open)
            .unwrap();

        assert!(open[0] > tight[0]);
        assert!((open[2] - tight[2]).abs() < 1e-3);
    }

    #[test]
    fn mismatched_source_length_is_setup_error() {
        let solver = RadialConduction::default();
        let source = [0.0; 2];
        let mut t = [INLET_TEMPERATURE_K; 3];
        let err = solver.solve_column(&input(&source), &mut t).unwrap_err();
        assert!(matches!(err, ConductionError::ProblemSetup { .. }));
    }

    #[test]
    fn iteration_cap_is_reported() {
        let solver = RadialConduction::default().with_max_iterations(0);
        let source = [3.0e8, 3.0e8, 0.0];
        let mut t = [INLET_TEMPERATURE_K; 3];
        let err = solver.solve_column(&input(&source), &mut t).unwrap_err();
        assert!(matches!(err, ConductionError::ConvergenceFailed { .. }));
    }
}
