//! End-to-end behavior of the surrogate driver.

use pf_conduction::{ColumnInput, ConductionError, ConductionResult, ConductionSolver};
use pf_core::constants::INLET_TEMPERATURE_K;
use pf_driver::{
    DriverError, HeatFluidsDriver, RunSchedule, SurrogateHeatDriver, run_schedule,
};
use pf_fields::FieldError;
use pf_project::{SurrogateConfig, from_yaml_str};
use pf_snapshot::{Snapshot, SnapshotResult, SnapshotSettings, SnapshotWriter};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const CASE: &str = r#"
version: 1
name: 2x2 bundle
geometry:
  clad_inner_radius: 0.50
  clad_outer_radius: 0.55
  pellet_radius: 0.40
  fuel_rings: 2
  clad_rings: 1
  n_pins_x: 2
  n_pins_y: 2
  pin_pitch: 1.26
flow: { mass_flowrate: 1.0 }
axial: { z: [0.0, 1.0, 2.0, 3.0] }
solver:
  tolerance: 1.0e-6
  conductivity: { type: Constant, fuel: 3.0, clad: 16.0 }
"#;

fn config(viz: Option<&str>) -> SurrogateConfig {
    let yaml = match viz {
        Some(v) => format!("{CASE}visualization: {{ filename: bundle, iterations: {v} }}\n"),
        None => CASE.to_string(),
    };
    from_yaml_str(&yaml).unwrap()
}

type Written = Arc<Mutex<Vec<PathBuf>>>;

struct Recorder(Written);

impl SnapshotWriter for Recorder {
    fn write(
        &self,
        path: &Path,
        snapshot: &Snapshot<'_>,
        _settings: &SnapshotSettings,
    ) -> SnapshotResult<()> {
        assert_eq!(snapshot.fields.shape().n_pins, 4);
        self.0.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Ring `r` ends at `boundary + r + q[0]` (q in W/m^3, scaled down).
struct Staircase;

impl ConductionSolver for Staircase {
    fn name(&self) -> &str {
        "staircase"
    }

    fn solve_column(
        &self,
        input: &ColumnInput<'_>,
        temperature: &mut [f64],
    ) -> ConductionResult<()> {
        for (r, t) in temperature.iter_mut().enumerate() {
            *t = input.boundary_temperature + r as f64 + input.source[0] * 1e-6;
        }
        Ok(())
    }
}

struct Diverges;

impl ConductionSolver for Diverges {
    fn name(&self) -> &str {
        "diverges"
    }

    fn solve_column(
        &self,
        _input: &ColumnInput<'_>,
        _temperature: &mut [f64],
    ) -> ConductionResult<()> {
        Err(ConductionError::ConvergenceFailed {
            what: "no".to_string(),
        })
    }
}

fn recorded(viz: Option<&str>) -> (SurrogateHeatDriver, Written) {
    let written: Written = Arc::default();
    let driver = SurrogateHeatDriver::new(
        &config(viz),
        Box::new(Staircase),
        Box::new(Recorder(written.clone())),
    )
    .unwrap();
    (driver, written)
}

#[test]
fn dimensions_and_initial_views() {
    let driver = SurrogateHeatDriver::from_config(&config(None)).unwrap();
    assert_eq!(driver.n_pins(), 4);
    assert_eq!(driver.n_axial(), 3);
    assert_eq!(driver.n_rings(), 3);
    assert_eq!(driver.geometry().n_channels(), 9);

    let n = 4 * 3 * 3;
    assert_eq!(driver.temperature().len(), n);
    assert_eq!(driver.density().len(), n);
    assert_eq!(driver.fluid_mask().len(), n);
    assert!(driver.temperature().iter().all(|&t| t == INLET_TEMPERATURE_K));
    assert!(driver.density().iter().all(|&d| d == 0.0));
    assert!(driver.fluid_mask().iter().all(|&m| m == 0));
    assert!(driver.last_summary().is_none());
}

#[test]
fn solve_writes_back_in_flat_order() {
    let (mut driver, _) = recorded(None);
    driver.set_source(1, 2, 0, 5.0).unwrap();

    driver.init_step().unwrap();
    driver.solve_step().unwrap();
    driver.finalize_step().unwrap();

    // (pin 1, axial 2) sees 5 W/cm^3 = 5e6 W/m^3 in ring 0
    assert_eq!(driver.temperature_at(1, 2, 0).unwrap(), INLET_TEMPERATURE_K + 5.0);
    assert!((driver.temperature_at(1, 2, 2).unwrap() - (INLET_TEMPERATURE_K + 7.0)).abs() < 1e-9);
    assert_eq!(driver.temperature_at(0, 0, 1).unwrap(), INLET_TEMPERATURE_K + 1.0);

    let flat_index = (2 + 1) * 3;
    assert_eq!(driver.temperature()[flat_index], INLET_TEMPERATURE_K + 0.0);
    let flat_index = (3 + 2) * 3;
    assert_eq!(driver.temperature()[flat_index], INLET_TEMPERATURE_K + 5.0);

    let summary = driver.last_summary().unwrap();
    assert_eq!(summary.columns, 12);
    assert!((summary.max_temperature - (INLET_TEMPERATURE_K + 7.0)).abs() < 1e-9);
    assert_eq!(summary.min_temperature, INLET_TEMPERATURE_K);
}

#[test]
fn built_in_backend_heats_the_fuel() {
    let mut driver = SurrogateHeatDriver::from_config(&config(None)).unwrap();
    driver.set_uniform_fuel_source(200.0).unwrap();

    driver.init_step().unwrap();
    driver.solve_step().unwrap();
    driver.finalize_step().unwrap();

    for pin in 0..4 {
        for axial in 0..3 {
            let center = driver.temperature_at(pin, axial, 0).unwrap();
            let clad = driver.temperature_at(pin, axial, 2).unwrap();
            assert!(center > clad, "pin {pin} axial {axial}");
            assert!(clad >= INLET_TEMPERATURE_K);
        }
    }
    assert!(driver.temperature().iter().all(|t| t.is_finite()));
}

#[test]
fn lifecycle_is_enforced() {
    let (mut driver, _) = recorded(None);
    assert!(matches!(
        driver.solve_step(),
        Err(DriverError::Lifecycle { .. })
    ));
    assert!(matches!(
        driver.finalize_step(),
        Err(DriverError::Lifecycle { .. })
    ));
    driver.init_step().unwrap();
    assert!(matches!(
        driver.init_step(),
        Err(DriverError::Lifecycle { .. })
    ));
}

#[test]
fn bad_indices_and_shapes_are_field_errors() {
    let (mut driver, _) = recorded(None);
    assert!(matches!(
        driver.temperature_at(4, 0, 0),
        Err(DriverError::Field(FieldError::IndexOutOfBounds { .. }))
    ));
    assert!(matches!(
        driver.set_source_flat(&[1.0; 5]),
        Err(DriverError::Field(FieldError::ShapeMismatch {
            expected: 36,
            actual: 5
        }))
    ));
    assert!(matches!(
        driver.set_source(0, 0, 0, f64::NAN),
        Err(DriverError::InvalidInput { .. })
    ));
}

#[test]
fn failing_column_aborts_the_step() {
    let mut driver = SurrogateHeatDriver::new(
        &config(None),
        Box::new(Diverges),
        Box::new(Recorder(Arc::default())),
    )
    .unwrap();
    driver.init_step().unwrap();
    let err = driver.solve_step().unwrap_err();
    assert!(matches!(
        err,
        DriverError::Conduction(ConductionError::NotConverged { .. })
    ));
    assert!(driver.last_summary().is_none());
}

#[test]
fn final_mode_writes_once_at_the_end() {
    let (mut driver, written) = recorded(Some("final"));
    let outcome = run_schedule(
        &mut driver,
        &RunSchedule {
            timesteps: 2,
            iterations: 3,
        },
    )
    .unwrap();
    assert_eq!(outcome.solves, 6);
    assert_eq!(*written.lock().unwrap(), vec![PathBuf::from("bundle.vtk")]);
    assert_eq!(driver.snapshots(), &[PathBuf::from("bundle.vtk")]);
}

#[test]
fn all_mode_writes_every_iteration() {
    let (mut driver, written) = recorded(Some("all"));
    run_schedule(
        &mut driver,
        &RunSchedule {
            timesteps: 2,
            iterations: 2,
        },
    )
    .unwrap();
    let names = written.lock().unwrap().clone();
    assert_eq!(
        names,
        vec![
            PathBuf::from("bundle_t0_i0.vtk"),
            PathBuf::from("bundle_t0_i1.vtk"),
            PathBuf::from("bundle_t1_i0.vtk"),
            PathBuf::from("bundle_t1_i1.vtk"),
        ]
    );
}

#[test]
fn no_visualization_means_no_snapshots() {
    for viz in [None, Some("none")] {
        let (mut driver, written) = recorded(viz);
        run_schedule(&mut driver, &RunSchedule::default()).unwrap();
        assert!(written.lock().unwrap().is_empty());
        assert!(driver.snapshots().is_empty());
    }
}

#[test]
fn invalid_config_is_rejected_before_building() {
    let mut cfg = config(None);
    cfg.solver.tolerance = -1.0;
    assert!(matches!(
        SurrogateHeatDriver::from_config(&cfg),
        Err(DriverError::Validation(_))
    ));
}

#[test]
fn empty_schedule_is_invalid() {
    let (mut driver, _) = recorded(None);
    let schedule = RunSchedule {
        timesteps: 0,
        iterations: 1,
    };
    assert!(matches!(
        run_schedule(&mut driver, &schedule),
        Err(DriverError::InvalidInput { .. })
    ));
}
