//! Dense `(pin, axial, ring)` arrays.

use crate::error::{FieldError, FieldResult};
use pf_geometry::{AxialGrid, GeometryModel};

/// Extent of a field along its three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape3 {
    pub n_pins: usize,
    pub n_axial: usize,
    pub n_rings: usize,
}

impl Shape3 {
    pub fn new(n_pins: usize, n_axial: usize, n_rings: usize) -> Self {
        Self {
            n_pins,
            n_axial,
            n_rings,
        }
    }

    /// Shape implied by a bundle geometry and its axial grid.
    pub fn from_geometry(geometry: &GeometryModel, axial: &AxialGrid) -> Self {
        Self::new(geometry.n_pins(), axial.n_axial(), geometry.n_rings())
    }

    pub fn len(&self) -> usize {
        self.n_pins * self.n_axial * self.n_rings
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of `(pin, axial)` columns.
    pub fn n_columns(&self) -> usize {
        self.n_pins * self.n_axial
    }

    /// Flat offset of `(pin, axial, ring)`.
    pub fn offset(&self, pin: usize, axial: usize, ring: usize) -> FieldResult<usize> {
        check(pin, self.n_pins, "pin")?;
        check(axial, self.n_axial, "axial")?;
        check(ring, self.n_rings, "ring")?;
        Ok((pin * self.n_axial + axial) * self.n_rings + ring)
    }

    /// `(pin, axial)` of the column at flat column index `column`.
    pub fn column_coords(&self, column: usize) -> (usize, usize) {
        (column / self.n_axial, column % self.n_axial)
    }
}

fn check(index: usize, len: usize, axis: &'static str) -> FieldResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(FieldError::IndexOutOfBounds { axis, index, len })
    }
}

/// A dense field over `(pin, axial, ring)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field3D<T> {
    shape: Shape3,
    data: Vec<T>,
}

impl<T: Copy + Default> Field3D<T> {
    /// Allocate a field filled with `T::default()`.
    pub fn zeros(shape: Shape3) -> Self {
        Self::filled(shape, T::default())
    }
}

impl<T: Copy> Field3D<T> {
    pub fn filled(shape: Shape3, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Rebuild a field from a flattened row-major buffer.
    pub fn from_flat(shape: Shape3, data: Vec<T>) -> FieldResult<Self> {
        if data.len() != shape.len() {
            return Err(FieldError::ShapeMismatch {
                expected: shape.len(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> Shape3 {
        self.shape
    }

    pub fn get(&self, pin: usize, axial: usize, ring: usize) -> FieldResult<T> {
        let i = self.shape.offset(pin, axial, ring)?;
        Ok(self.data[i])
    }

    pub fn set(&mut self, pin: usize, axial: usize, ring: usize, value: T) -> FieldResult<()> {
        let i = self.shape.offset(pin, axial, ring)?;
        self.data[i] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Overwrite the whole field from a flattened buffer of the same length.
    pub fn copy_from_flat(&mut self, values: &[T]) -> FieldResult<()> {
        if values.len() != self.data.len() {
            return Err(FieldError::ShapeMismatch {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.copy_from_slice(values);
        Ok(())
    }

    /// Ring values of one `(pin, axial)` column.
    pub fn column(&self, pin: usize, axial: usize) -> FieldResult<&[T]> {
        let start = self.shape.offset(pin, axial, 0)?;
        Ok(&self.data[start..start + self.shape.n_rings])
    }

    pub fn column_mut(&mut self, pin: usize, axial: usize) -> FieldResult<&mut [T]> {
        let start = self.shape.offset(pin, axial, 0)?;
        Ok(&mut self.data[start..start + self.shape.n_rings])
    }

    /// Flattened, order-preserving view (pin, then axial, then ring).
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable flattened view; chunks of `n_rings` are columns.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy out the flattened data.
    pub fn to_flat(&self) -> Vec<T> {
        self.data.clone()
    }

    pub fn into_flat(self) -> Vec<T> {
        self.data
    }
}
