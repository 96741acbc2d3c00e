//! Configuration-time selection of backends.

use crate::error::DriverResult;
use pf_conduction::{ConductionSolver, Conductivity, RadialConduction};
use pf_project::{ConductivityDef, SurrogateConfig, VizData, VizIterations, VizRegions};
use pf_snapshot::{
    DataSelection, RegionSelection, SnapshotMode, SnapshotScheduler, SnapshotSettings,
    SnapshotWriter,
};

/// Built-in conduction backend configured from the solver section.
pub fn conduction_backend(config: &SurrogateConfig) -> Box<dyn ConductionSolver> {
    let conductivity = match config.solver.conductivity {
        ConductivityDef::Correlation => Conductivity::Correlation,
        ConductivityDef::Constant { fuel, clad } => Conductivity::Constant { fuel, clad },
    };
    let mut backend =
        RadialConduction::new(conductivity).with_max_iterations(config.solver.max_iterations);
    if let Some(h) = config.solver.gap_conductance {
        backend = backend.with_gap_conductance(h);
    }
    Box::new(backend)
}

/// Scheduler for the visualization section; absent section means no output.
pub fn snapshot_scheduler(
    config: &SurrogateConfig,
    writer: Box<dyn SnapshotWriter>,
) -> DriverResult<SnapshotScheduler> {
    let Some(viz) = &config.visualization else {
        return Ok(SnapshotScheduler::new(
            SnapshotMode::None,
            None,
            SnapshotSettings::default(),
            writer,
        )?);
    };

    let mode = match viz.iterations {
        VizIterations::Final => SnapshotMode::Final,
        VizIterations::All => SnapshotMode::All,
        VizIterations::None => SnapshotMode::None,
    };
    let data = match viz.data {
        VizData::All => DataSelection::All,
        VizData::Temperature => DataSelection::Temperature,
        VizData::Density => DataSelection::Density,
        VizData::Source => DataSelection::Source,
    };
    let regions = match viz.regions {
        VizRegions::All => RegionSelection::All,
        VizRegions::Fuel => RegionSelection::Fuel,
        VizRegions::Clad => RegionSelection::Clad,
    };
    let settings = SnapshotSettings {
        resolution: viz.resolution,
        data,
        regions,
    };

    Ok(SnapshotScheduler::new(
        mode,
        viz.filename.clone(),
        settings,
        writer,
    )?)
}
