//! Coolant-centered channel partition.
//!
//! Channels sit on an `(n_x + 1) x (n_y + 1)` grid overlaid on the pin
//! lattice. Interior channels get the full open area of one lattice cell,
//! channels on the assembly edge get half of it and the four corners a
//! quarter. Mass flow is split in proportion to open area.

use std::f64::consts::PI;

/// Position class of a channel on the assembly boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Corner,
    Edge,
    Interior,
}

impl ChannelKind {
    /// Share of the interior open area given to this class of channel.
    pub fn area_share(self) -> f64 {
        match self {
            ChannelKind::Corner => 0.25,
            ChannelKind::Edge => 0.5,
            ChannelKind::Interior => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPartition {
    n_x: usize,
    n_y: usize,
    interior_area: f64,
    areas: Vec<f64>,
    total_area: f64,
    fractions: Vec<f64>,
    flowrates: Vec<f64>,
}

impl ChannelPartition {
    /// Build the partition for an `n_x` by `n_y` pin lattice.
    ///
    /// `pitch` and `clad_outer_radius` are in cm, `mass_flowrate` in kg/s.
    pub fn new(
        n_x: usize,
        n_y: usize,
        pitch: f64,
        clad_outer_radius: f64,
        mass_flowrate: f64,
    ) -> Self {
        let interior_area = pitch * pitch - PI * clad_outer_radius * clad_outer_radius;
        let edge_area = interior_area / 2.0;
        let corner_area = interior_area / 4.0;

        let mut areas = Vec::with_capacity((n_x + 1) * (n_y + 1));
        for row in 0..=n_y {
            for col in 0..=n_x {
                let area = match classify(row, col, n_x, n_y) {
                    ChannelKind::Corner => corner_area,
                    ChannelKind::Edge => edge_area,
                    ChannelKind::Interior => interior_area,
                };
                areas.push(area);
            }
        }

        let total_area: f64 = areas.iter().sum();
        let fractions: Vec<f64> = areas.iter().map(|a| a / total_area).collect();
        let flowrates = areas
            .iter()
            .map(|a| a / total_area * mass_flowrate)
            .collect();

        Self {
            n_x,
            n_y,
            interior_area,
            areas,
            total_area,
            fractions,
            flowrates,
        }
    }

    /// Flat channel index for grid position `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row > self.n_y || col > self.n_x {
            return None;
        }
        Some(row * (self.n_x + 1) + col)
    }

    /// Position class of the channel at `(row, col)`.
    pub fn kind(&self, row: usize, col: usize) -> Option<ChannelKind> {
        if row > self.n_y || col > self.n_x {
            return None;
        }
        Some(classify(row, col, self.n_x, self.n_y))
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Number of channel rows, `n_y + 1`.
    pub fn rows(&self) -> usize {
        self.n_y + 1
    }

    /// Number of channel columns, `n_x + 1`.
    pub fn cols(&self) -> usize {
        self.n_x + 1
    }

    /// Open flow area of a full lattice cell, `pitch^2 - pi * r_co^2` (cm^2).
    pub fn interior_area(&self) -> f64 {
        self.interior_area
    }

    /// Channel flow areas (cm^2) in channel-index order.
    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Per-channel share of the total mass flow; sums to one.
    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Per-channel mass flow rates (kg/s).
    pub fn flowrates(&self) -> &[f64] {
        &self.flowrates
    }
}

fn classify(row: usize, col: usize, n_x: usize, n_y: usize) -> ChannelKind {
    let row_edge = row == 0 || row == n_y;
    let col_edge = col == 0 || col == n_x;
    match (row_edge, col_edge) {
        (true, true) => ChannelKind::Corner,
        (true, false) | (false, true) => ChannelKind::Edge,
        (false, false) => ChannelKind::Interior,
    }
}
