//! Bundle geometry model built from configuration.

use crate::channels::{ChannelKind, ChannelPartition};
use crate::error::{GeometryError, GeometryResult};
use crate::radial::RadialGrid;
use pf_core::ensure_finite;
use pf_core::units::{Area, Length, MassRate, cm, cm2, kgps};

/// Geometric and flow inputs for a rectangular pin bundle.
///
/// Lengths are in cm, mass flow rate in kg/s.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryParams {
    pub n_pins_x: usize,
    pub n_pins_y: usize,
    pub pin_pitch: f64,
    pub clad_inner_radius: f64,
    pub clad_outer_radius: f64,
    pub pellet_radius: f64,
    pub mass_flowrate: f64,
    pub n_fuel_rings: usize,
    pub n_clad_rings: usize,
}

impl GeometryParams {
    /// Check the physical preconditions of the bundle.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite(self.pin_pitch, "pin_pitch")?;
        ensure_finite(self.clad_inner_radius, "clad_inner_radius")?;
        ensure_finite(self.clad_outer_radius, "clad_outer_radius")?;
        ensure_finite(self.pellet_radius, "pellet_radius")?;
        ensure_finite(self.mass_flowrate, "mass_flowrate")?;

        if self.clad_inner_radius <= 0.0 {
            return Err(GeometryError::config("clad_inner_radius must be positive"));
        }
        if self.clad_outer_radius <= self.clad_inner_radius {
            return Err(GeometryError::config(
                "clad_outer_radius must exceed clad_inner_radius",
            ));
        }
        if self.pellet_radius >= self.clad_inner_radius {
            return Err(GeometryError::config(
                "pellet_radius must be smaller than clad_inner_radius",
            ));
        }
        if self.pellet_radius <= 0.0 {
            return Err(GeometryError::config("pellet_radius must be positive"));
        }
        if self.n_fuel_rings == 0 {
            return Err(GeometryError::config("fuel_rings must be positive"));
        }
        if self.n_clad_rings == 0 {
            return Err(GeometryError::config("clad_rings must be positive"));
        }
        if self.n_pins_x == 0 {
            return Err(GeometryError::config("n_pins_x must be positive"));
        }
        if self.n_pins_y == 0 {
            return Err(GeometryError::config("n_pins_y must be positive"));
        }
        if self.pin_pitch <= 2.0 * self.clad_outer_radius {
            return Err(GeometryError::config(
                "pin_pitch must exceed the clad outer diameter",
            ));
        }
        if self.mass_flowrate <= 0.0 {
            return Err(GeometryError::config("mass_flowrate must be positive"));
        }
        Ok(())
    }
}

/// Pin centers (cm) of the lattice, centered on the assembly origin.
///
/// Pin `row * n_x + col` sits in lattice row `row` counted from the top
/// (+y) and column `col` counted from the left (-x).
#[derive(Debug, Clone, PartialEq)]
pub struct PinLayout {
    n_x: usize,
    n_y: usize,
    pitch: f64,
    centers: Vec<(f64, f64)>,
}

impl PinLayout {
    pub fn new(n_x: usize, n_y: usize, pitch: f64) -> Self {
        let width_x = n_x as f64 * pitch;
        let width_y = n_y as f64 * pitch;

        let mut centers = Vec::with_capacity(n_x * n_y);
        for row in 0..n_y {
            for col in 0..n_x {
                let x = -width_x / 2.0 + pitch / 2.0 + col as f64 * pitch;
                let y = width_y / 2.0 - (pitch / 2.0 + row as f64 * pitch);
                centers.push((x, y));
            }
        }

        Self {
            n_x,
            n_y,
            pitch,
            centers,
        }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn n_x(&self) -> usize {
        self.n_x
    }

    pub fn n_y(&self) -> usize {
        self.n_y
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn centers(&self) -> &[(f64, f64)] {
        &self.centers
    }

    pub fn center(&self, pin: usize) -> Option<(f64, f64)> {
        self.centers.get(pin).copied()
    }
}

/// Immutable geometry of one fuel assembly: pins, channels, radial rings.
#[derive(Debug, Clone)]
pub struct GeometryModel {
    params: GeometryParams,
    pins: PinLayout,
    channels: ChannelPartition,
    radial: RadialGrid,
}

impl GeometryModel {
    pub fn new(params: GeometryParams) -> GeometryResult<Self> {
        params.validate()?;

        let pins = PinLayout::new(params.n_pins_x, params.n_pins_y, params.pin_pitch);
        let channels = ChannelPartition::new(
            params.n_pins_x,
            params.n_pins_y,
            params.pin_pitch,
            params.clad_outer_radius,
            params.mass_flowrate,
        );
        let radial = RadialGrid::new(
            params.pellet_radius,
            params.clad_inner_radius,
            params.clad_outer_radius,
            params.n_fuel_rings,
            params.n_clad_rings,
        )?;

        Ok(Self {
            params,
            pins,
            channels,
            radial,
        })
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    pub fn n_pins(&self) -> usize {
        self.pins.len()
    }

    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    pub fn n_fuel_rings(&self) -> usize {
        self.params.n_fuel_rings
    }

    pub fn n_clad_rings(&self) -> usize {
        self.params.n_clad_rings
    }

    pub fn n_rings(&self) -> usize {
        self.params.n_fuel_rings + self.params.n_clad_rings
    }

    pub fn pin_layout(&self) -> &PinLayout {
        &self.pins
    }

    pub fn pin_center(&self, pin: usize) -> Option<(f64, f64)> {
        self.pins.center(pin)
    }

    pub fn channels(&self) -> &ChannelPartition {
        &self.channels
    }

    pub fn channel_index(&self, row: usize, col: usize) -> Option<usize> {
        self.channels.index(row, col)
    }

    pub fn channel_kind(&self, row: usize, col: usize) -> Option<ChannelKind> {
        self.channels.kind(row, col)
    }

    pub fn channel_areas(&self) -> &[f64] {
        self.channels.areas()
    }

    pub fn interior_flow_area(&self) -> f64 {
        self.channels.interior_area()
    }

    pub fn total_flow_area(&self) -> f64 {
        self.channels.total_area()
    }

    /// Total open flow area as a dimensioned quantity.
    pub fn flow_area(&self) -> Area {
        cm2(self.channels.total_area())
    }

    pub fn pin_pitch(&self) -> Length {
        cm(self.params.pin_pitch)
    }

    pub fn flow_fractions(&self) -> &[f64] {
        self.channels.fractions()
    }

    pub fn channel_flowrates(&self) -> &[f64] {
        self.channels.flowrates()
    }

    pub fn mass_flowrate(&self) -> MassRate {
        kgps(self.params.mass_flowrate)
    }

    pub fn radial_grid(&self) -> &RadialGrid {
        &self.radial
    }
}
