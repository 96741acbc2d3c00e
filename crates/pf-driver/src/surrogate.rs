//! Surrogate heat driver.

use crate::build::{conduction_backend, snapshot_scheduler};
use crate::driver::HeatFluidsDriver;
use crate::error::{DriverError, DriverResult};
use pf_conduction::{ConductionSolver, ConductionStepper, StepSummary};
use pf_core::constants::{INLET_TEMPERATURE_K, inlet_temperature};
use pf_core::units::Temperature;
use pf_fields::{FieldStore, Shape3};
use pf_geometry::{AxialGrid, GeometryModel};
use pf_project::{SurrogateConfig, validate_config};
use pf_snapshot::{SnapshotScheduler, SnapshotWriter, VtkWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Surrogate thermal-hydraulics model for a rectangular pin bundle.
///
/// Owns the geometry, the field arrays, the conduction stepper and the
/// snapshot scheduler. One instance per process; nothing is shared.
pub struct SurrogateHeatDriver {
    config: SurrogateConfig,
    geometry: GeometryModel,
    axial: AxialGrid,
    fields: FieldStore,
    stepper: ConductionStepper,
    scheduler: SnapshotScheduler,
    in_step: bool,
    last_summary: Option<StepSummary>,
    snapshots: Vec<PathBuf>,
}

impl SurrogateHeatDriver {
    /// Built-in backends: [`pf_conduction::RadialConduction`] and [`VtkWriter`].
    pub fn from_config(config: &SurrogateConfig) -> DriverResult<Self> {
        Self::new(config, conduction_backend(config), Box::new(VtkWriter::new()))
    }

    pub fn new(
        config: &SurrogateConfig,
        solver: Box<dyn ConductionSolver>,
        writer: Box<dyn SnapshotWriter>,
    ) -> DriverResult<Self> {
        validate_config(config)?;

        let geometry = GeometryModel::new(config.to_geometry_params())?;
        let axial = AxialGrid::new(config.axial.z.clone())?;
        let mut fields = FieldStore::new(Shape3::from_geometry(&geometry, &axial));
        fields.temperature_mut().fill(INLET_TEMPERATURE_K);
        let stepper = ConductionStepper::new(solver, config.solver.tolerance)?;
        let scheduler = snapshot_scheduler(config, writer)?;

        info!(
            case = %config.name,
            pins = geometry.n_pins(),
            channels = geometry.n_channels(),
            axial = axial.n_axial(),
            rings = geometry.n_rings(),
            solver = stepper.solver_name(),
            snapshots = ?scheduler.mode(),
            "Surrogate model built"
        );

        Ok(Self {
            config: config.clone(),
            geometry,
            axial,
            fields,
            stepper,
            scheduler,
            in_step: false,
            last_summary: None,
            snapshots: Vec::new(),
        })
    }

    /// Place snapshot files under `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scheduler = self.scheduler.with_output_dir(dir);
        self
    }

    pub fn config(&self) -> &SurrogateConfig {
        &self.config
    }

    pub fn geometry(&self) -> &GeometryModel {
        &self.geometry
    }

    pub fn axial(&self) -> &AxialGrid {
        &self.axial
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    pub fn scheduler(&self) -> &SnapshotScheduler {
        &self.scheduler
    }

    pub fn stepper(&self) -> &ConductionStepper {
        &self.stepper
    }

    /// Clad-surface temperature imposed by every solve.
    pub fn boundary_temperature(&self) -> Temperature {
        inlet_temperature()
    }

    /// Summary of the most recent successful solve.
    pub fn last_summary(&self) -> Option<&StepSummary> {
        self.last_summary.as_ref()
    }

    /// Snapshot files written so far, in order.
    pub fn snapshots(&self) -> &[PathBuf] {
        &self.snapshots
    }

    /// Volumetric heat source of one cell, W/cm^3.
    pub fn set_source(
        &mut self,
        pin: usize,
        axial: usize,
        ring: usize,
        q: f64,
    ) -> DriverResult<()> {
        check_source(q)?;
        self.fields.set_source(pin, axial, ring, q)?;
        Ok(())
    }

    /// Whole source field in flattened order, W/cm^3.
    pub fn set_source_flat(&mut self, values: &[f64]) -> DriverResult<()> {
        if let Some(&q) = values.iter().find(|q| !q.is_finite()) {
            return Err(DriverError::InvalidInput {
                what: format!("heat source must be finite, got {}", q),
            });
        }
        self.fields.set_source_flat(values)?;
        Ok(())
    }

    /// Same source in every fuel ring, zero in the clad.
    pub fn set_uniform_fuel_source(&mut self, q: f64) -> DriverResult<()> {
        check_source(q)?;
        let radial = self.geometry.radial_grid();
        let n_rings = radial.n_rings();
        let values: Vec<f64> = (0..self.fields.shape().len())
            .map(|i| if radial.is_fuel_ring(i % n_rings) { q } else { 0.0 })
            .collect();
        self.fields.set_source_flat(&values)?;
        Ok(())
    }

    pub fn set_density(
        &mut self,
        pin: usize,
        axial: usize,
        ring: usize,
        rho: f64,
    ) -> DriverResult<()> {
        self.fields.set_density(pin, axial, ring, rho)?;
        Ok(())
    }

    pub fn temperature_at(&self, pin: usize, axial: usize, ring: usize) -> DriverResult<f64> {
        Ok(self.fields.temperature().get(pin, axial, ring)?)
    }

    /// Write a snapshot for this request and report where it went.
    pub fn write_snapshot(&mut self, timestep: i64, iteration: i64) -> DriverResult<Option<&Path>> {
        let written =
            self.scheduler
                .maybe_write(timestep, iteration, &self.geometry, &self.axial, &self.fields)?;
        Ok(match written {
            Some(path) => {
                self.snapshots.push(path);
                self.snapshots.last().map(PathBuf::as_path)
            }
            None => None,
        })
    }
}

fn check_source(q: f64) -> DriverResult<()> {
    if q.is_finite() {
        Ok(())
    } else {
        Err(DriverError::InvalidInput {
            what: format!("heat source must be finite, got {}", q),
        })
    }
}

impl HeatFluidsDriver for SurrogateHeatDriver {
    fn init_step(&mut self) -> DriverResult<()> {
        if self.in_step {
            return Err(DriverError::Lifecycle {
                what: "init_step called twice without finalize_step".to_string(),
            });
        }
        self.in_step = true;
        debug!("Step initialized");
        Ok(())
    }

    fn solve_step(&mut self) -> DriverResult<()> {
        if !self.in_step {
            return Err(DriverError::Lifecycle {
                what: "solve_step called outside init_step/finalize_step".to_string(),
            });
        }
        let summary = self.stepper.solve(&self.geometry, &mut self.fields)?;
        self.last_summary = Some(summary);
        Ok(())
    }

    fn write_step(&mut self, timestep: i64, iteration: i64) -> DriverResult<()> {
        self.write_snapshot(timestep, iteration)?;
        Ok(())
    }

    fn finalize_step(&mut self) -> DriverResult<()> {
        if !self.in_step {
            return Err(DriverError::Lifecycle {
                what: "finalize_step called without init_step".to_string(),
            });
        }
        self.in_step = false;
        debug!("Step finalized");
        Ok(())
    }

    fn temperature(&self) -> &[f64] {
        self.fields.temperature_flat()
    }

    fn density(&self) -> &[f64] {
        self.fields.density_flat()
    }

    fn fluid_mask(&self) -> &[i32] {
        self.fields.fluid_mask_flat()
    }

    fn n_pins(&self) -> usize {
        self.geometry.n_pins()
    }

    fn n_axial(&self) -> usize {
        self.axial.n_axial()
    }

    fn n_rings(&self) -> usize {
        self.geometry.n_rings()
    }
}
