//! Radial ring grids for fuel and clad.

use crate::error::{GeometryError, GeometryResult};
use pf_core::{is_strictly_increasing, linspace};

/// Ring boundaries (cm) for the pellet and the clad.
///
/// The fuel grid spans `[0, pellet_radius]` and the clad grid spans
/// `[clad_inner_radius, clad_outer_radius]`, each equally spaced.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGrid {
    fuel: Vec<f64>,
    clad: Vec<f64>,
}

impl RadialGrid {
    pub fn new(
        pellet_radius: f64,
        clad_inner_radius: f64,
        clad_outer_radius: f64,
        n_fuel_rings: usize,
        n_clad_rings: usize,
    ) -> GeometryResult<Self> {
        if n_fuel_rings == 0 || n_clad_rings == 0 {
            return Err(GeometryError::config("ring counts must be positive"));
        }
        let fuel = linspace(0.0, pellet_radius, n_fuel_rings + 1)?;
        let clad = linspace(clad_inner_radius, clad_outer_radius, n_clad_rings + 1)?;

        if !is_strictly_increasing(&fuel) || !is_strictly_increasing(&clad) {
            return Err(GeometryError::config(
                "radial grid is not strictly increasing",
            ));
        }

        Ok(Self { fuel, clad })
    }

    /// Fuel ring boundaries, length `n_fuel_rings + 1`.
    pub fn fuel(&self) -> &[f64] {
        &self.fuel
    }

    /// Clad ring boundaries, length `n_clad_rings + 1`.
    pub fn clad(&self) -> &[f64] {
        &self.clad
    }

    pub fn n_fuel_rings(&self) -> usize {
        self.fuel.len() - 1
    }

    pub fn n_clad_rings(&self) -> usize {
        self.clad.len() - 1
    }

    pub fn n_rings(&self) -> usize {
        self.n_fuel_rings() + self.n_clad_rings()
    }

    /// Inner and outer radius of ring `ring`, fuel rings first.
    pub fn ring_bounds(&self, ring: usize) -> Option<(f64, f64)> {
        let nf = self.n_fuel_rings();
        if ring < nf {
            Some((self.fuel[ring], self.fuel[ring + 1]))
        } else if ring < self.n_rings() {
            let c = ring - nf;
            Some((self.clad[c], self.clad[c + 1]))
        } else {
            None
        }
    }

    /// Whether ring `ring` lies in the pellet.
    pub fn is_fuel_ring(&self, ring: usize) -> bool {
        ring < self.n_fuel_rings()
    }
}
