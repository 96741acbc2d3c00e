//! Damped Newton iteration for the per-column conduction residual.
//!
//! Unknowns are temperatures, so every trial iterate must stay above
//! [`NewtonConfig::min_value`]; steps that leave that region or fail to
//! reduce the residual are halved until they do.

use crate::error::{ConductionError, ConductionResult};
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone)]
pub struct NewtonConfig {
    pub max_iterations: usize,
    /// Absolute residual tolerance
    pub abs_tol: f64,
    /// Tolerance relative to the initial residual
    pub rel_tol: f64,
    /// Floor on every unknown (K)
    pub min_value: f64,
    /// Step reduction factor per backtrack
    pub line_search_beta: f64,
    pub max_line_search_iters: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-6,
            rel_tol: 1e-6,
            min_value: 1.0,
            line_search_beta: 0.5,
            max_line_search_iters: 20,
        }
    }
}

impl NewtonConfig {
    fn converged(&self, norm: f64, initial_norm: f64) -> bool {
        norm < self.abs_tol || norm < self.rel_tol * initial_norm
    }
}

#[derive(Debug, Clone)]
pub struct NewtonResult {
    pub x: DVector<f64>,
    pub residual_norm: f64,
    pub iterations: usize,
}

pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    residual_fn: F,
    jacobian_fn: J,
    config: &NewtonConfig,
) -> ConductionResult<NewtonResult>
where
    F: Fn(&DVector<f64>) -> ConductionResult<DVector<f64>>,
    J: Fn(&DVector<f64>) -> ConductionResult<DMatrix<f64>>,
{
    let mut x = x0;
    let mut r = residual_fn(&x)?;
    let initial_norm = r.norm();
    let mut norm = initial_norm;

    for iteration in 0..config.max_iterations {
        if !norm.is_finite() {
            return Err(ConductionError::Numeric {
                what: format!("residual became non-finite at iteration {}", iteration),
            });
        }
        if config.converged(norm, initial_norm) {
            return Ok(NewtonResult {
                x,
                residual_norm: norm,
                iterations: iteration,
            });
        }

        let step = jacobian_fn(&x)?
            .lu()
            .solve(&(-r.clone()))
            .ok_or_else(|| ConductionError::Numeric {
                what: "singular Jacobian".to_string(),
            })?;

        let Some((x_next, r_next)) = backtrack(&x, &step, norm, &residual_fn, config)? else {
            return Err(ConductionError::ConvergenceFailed {
                what: format!(
                    "line search stalled at iteration {}, residual = {:e}",
                    iteration, norm
                ),
            });
        };
        x = x_next;
        norm = r_next.norm();
        r = r_next;
    }

    if config.converged(norm, initial_norm) {
        return Ok(NewtonResult {
            x,
            residual_norm: norm,
            iterations: config.max_iterations,
        });
    }
    Err(ConductionError::ConvergenceFailed {
        what: format!(
            "no convergence after {} iterations, residual = {:e}",
            config.max_iterations, norm
        ),
    })
}

/// Shrinks the Newton step until the iterate respects the floor and the
/// residual decreases. Returns `None` when the backtrack budget runs out
/// without an acceptable trial point.
fn backtrack<F>(
    x: &DVector<f64>,
    step: &DVector<f64>,
    norm: f64,
    residual_fn: &F,
    config: &NewtonConfig,
) -> ConductionResult<Option<(DVector<f64>, DVector<f64>)>>
where
    F: Fn(&DVector<f64>) -> ConductionResult<DVector<f64>>,
{
    let mut alpha = 1.0;
    for _ in 0..=config.max_line_search_iters {
        let x_trial = x + alpha * step;
        if x_trial.iter().all(|&v| v >= config.min_value) {
            let r_trial = residual_fn(&x_trial)?;
            if r_trial.norm() < norm {
                return Ok(Some((x_trial, r_trial)));
            }
        }
        alpha *= config.line_search_beta;
    }
    Ok(None)
}
