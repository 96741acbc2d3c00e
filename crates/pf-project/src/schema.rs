//! Case file schema.
//!
//! Lengths are in cm, mass flow rate in kg/s, conductivities in W/(m·K)
//! and gap conductance in W/(m²·K).

use pf_geometry::GeometryParams;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 50;
pub const DEFAULT_RESOLUTION: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurrogateConfig {
    /// Absent in unversioned files, which load as version 0.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub geometry: GeometryDef,
    pub flow: FlowDef,
    pub axial: AxialDef,
    pub solver: SolverDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization: Option<VisualizationDef>,
}

impl SurrogateConfig {
    pub fn to_geometry_params(&self) -> GeometryParams {
        let g = &self.geometry;
        GeometryParams {
            n_pins_x: g.n_pins_x,
            n_pins_y: g.n_pins_y,
            pin_pitch: g.pin_pitch,
            clad_inner_radius: g.clad_inner_radius,
            clad_outer_radius: g.clad_outer_radius,
            pellet_radius: g.pellet_radius,
            mass_flowrate: self.flow.mass_flowrate,
            n_fuel_rings: g.fuel_rings,
            n_clad_rings: g.clad_rings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub clad_inner_radius: f64,
    pub clad_outer_radius: f64,
    pub pellet_radius: f64,
    pub fuel_rings: usize,
    pub clad_rings: usize,
    pub n_pins_x: usize,
    pub n_pins_y: usize,
    pub pin_pitch: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub mass_flowrate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxialDef {
    pub z: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub conductivity: ConductivityDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_conductance: Option<f64>,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type")]
pub enum ConductivityDef {
    #[default]
    Correlation,
    Constant {
        fuel: f64,
        clad: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisualizationDef {
    /// Snapshot basename; no snapshots are written without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub iterations: VizIterations,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    #[serde(default)]
    pub data: VizData,
    #[serde(default)]
    pub regions: VizRegions,
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VizIterations {
    #[default]
    Final,
    All,
    None,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VizData {
    #[default]
    All,
    Temperature,
    Density,
    Source,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VizRegions {
    #[default]
    All,
    Fuel,
    Clad,
}
