//! Axial plane grid.

use crate::error::{GeometryError, GeometryResult};
use pf_core::{ensure_finite, is_strictly_increasing};

/// Axial z-plane boundaries (cm); `n_axial = len - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxialGrid {
    z: Vec<f64>,
}

impl AxialGrid {
    pub fn new(z: Vec<f64>) -> GeometryResult<Self> {
        if z.len() < 2 {
            return Err(GeometryError::config(format!(
                "axial grid needs at least two z boundaries, got {}",
                z.len()
            )));
        }
        for &v in &z {
            ensure_finite(v, "z boundary")?;
        }
        if !is_strictly_increasing(&z) {
            return Err(GeometryError::config(
                "z boundaries must be strictly increasing",
            ));
        }
        Ok(Self { z })
    }

    pub fn n_axial(&self) -> usize {
        self.z.len() - 1
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.z
    }

    /// Lower and upper z of axial level `axial`.
    pub fn bounds(&self, axial: usize) -> Option<(f64, f64)> {
        if axial < self.n_axial() {
            Some((self.z[axial], self.z[axial + 1]))
        } else {
            None
        }
    }

    /// Midplane of each axial level.
    pub fn centers(&self) -> Vec<f64> {
        self.z.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.z.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
