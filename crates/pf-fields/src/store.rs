//! The four surrogate fields.

use crate::error::FieldResult;
use crate::field::{Field3D, Shape3};

/// Source, temperature, density and fluid-mask fields of one model instance.
///
/// Units: source W/cm^3, temperature K, density g/cm^3. `fluid_mask` is 1
/// for rings in the fluid phase and 0 for solid rings. Fields are allocated
/// once and mutated in place; their shape never changes.
#[derive(Debug, Clone)]
pub struct FieldStore {
    shape: Shape3,
    source: Field3D<f64>,
    temperature: Field3D<f64>,
    density: Field3D<f64>,
    fluid_mask: Field3D<i32>,
}

impl FieldStore {
    pub fn new(shape: Shape3) -> Self {
        Self {
            shape,
            source: Field3D::zeros(shape),
            temperature: Field3D::zeros(shape),
            density: Field3D::zeros(shape),
            fluid_mask: Field3D::zeros(shape),
        }
    }

    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    pub fn source(&self) -> &Field3D<f64> {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut Field3D<f64> {
        &mut self.source
    }

    pub fn temperature(&self) -> &Field3D<f64> {
        &self.temperature
    }

    pub fn temperature_mut(&mut self) -> &mut Field3D<f64> {
        &mut self.temperature
    }

    pub fn density(&self) -> &Field3D<f64> {
        &self.density
    }

    pub fn density_mut(&mut self) -> &mut Field3D<f64> {
        &mut self.density
    }

    pub fn fluid_mask(&self) -> &Field3D<i32> {
        &self.fluid_mask
    }

    pub fn fluid_mask_mut(&mut self) -> &mut Field3D<i32> {
        &mut self.fluid_mask
    }

    pub fn set_source(&mut self, pin: usize, axial: usize, ring: usize, q: f64) -> FieldResult<()> {
        self.source.set(pin, axial, ring, q)
    }

    /// Replace the whole source field from a flattened buffer.
    pub fn set_source_flat(&mut self, values: &[f64]) -> FieldResult<()> {
        self.source.copy_from_flat(values)
    }

    pub fn set_density(
        &mut self,
        pin: usize,
        axial: usize,
        ring: usize,
        rho: f64,
    ) -> FieldResult<()> {
        self.density.set(pin, axial, ring, rho)
    }

    pub fn source_flat(&self) -> &[f64] {
        self.source.as_slice()
    }

    pub fn temperature_flat(&self) -> &[f64] {
        self.temperature.as_slice()
    }

    pub fn density_flat(&self) -> &[f64] {
        self.density.as_slice()
    }

    pub fn fluid_mask_flat(&self) -> &[i32] {
        self.fluid_mask.as_slice()
    }

    /// Split borrow: read-only source alongside writable temperature.
    pub fn source_and_temperature_mut(&mut self) -> (&Field3D<f64>, &mut Field3D<f64>) {
        (&self.source, &mut self.temperature)
    }
}
