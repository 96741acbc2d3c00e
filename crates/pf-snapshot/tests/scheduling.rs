//! Scheduler decisions and file naming against a recording writer.

use pf_fields::{FieldStore, Shape3};
use pf_geometry::{AxialGrid, GeometryModel, GeometryParams};
use pf_snapshot::{
    Snapshot, SnapshotMode, SnapshotResult, SnapshotScheduler, SnapshotSettings, SnapshotWriter,
    should_write,
};
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type Written = Arc<Mutex<Vec<PathBuf>>>;

struct Recorder(Written);

impl SnapshotWriter for Recorder {
    fn write(
        &self,
        path: &Path,
        _snapshot: &Snapshot<'_>,
        _settings: &SnapshotSettings,
    ) -> SnapshotResult<()> {
        self.0.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

fn model() -> (GeometryModel, AxialGrid, FieldStore) {
    let geometry = GeometryModel::new(GeometryParams {
        n_pins_x: 2,
        n_pins_y: 2,
        pin_pitch: 1.26,
        clad_inner_radius: 0.50,
        clad_outer_radius: 0.55,
        pellet_radius: 0.40,
        mass_flowrate: 1.0,
        n_fuel_rings: 2,
        n_clad_rings: 1,
    })
    .unwrap();
    let axial = AxialGrid::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    let fields = FieldStore::new(Shape3::from_geometry(&geometry, &axial));
    (geometry, axial, fields)
}

fn scheduler(mode: SnapshotMode, basename: Option<&str>) -> (SnapshotScheduler, Written) {
    let written: Written = Arc::default();
    let scheduler = SnapshotScheduler::new(
        mode,
        basename.map(str::to_string),
        SnapshotSettings::default(),
        Box::new(Recorder(written.clone())),
    )
    .unwrap();
    (scheduler, written)
}

#[test]
fn final_mode_writes_only_the_final_call() {
    let (geometry, axial, fields) = model();
    let (scheduler, written) = scheduler(SnapshotMode::Final, Some("bundle"));

    let first = scheduler
        .maybe_write(5, -1, &geometry, &axial, &fields)
        .unwrap();
    assert_eq!(first, Some(PathBuf::from("bundle.vtk")));

    let second = scheduler
        .maybe_write(5, 2, &geometry, &axial, &fields)
        .unwrap();
    assert_eq!(second, None);
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn all_mode_writes_suffixed_intermediates() {
    let (geometry, axial, fields) = model();
    let (scheduler, written) = scheduler(SnapshotMode::All, Some("bundle"));

    for it in 0..3 {
        scheduler
            .maybe_write(1, it, &geometry, &axial, &fields)
            .unwrap();
    }
    assert_eq!(
        scheduler
            .maybe_write(1, -1, &geometry, &axial, &fields)
            .unwrap(),
        None
    );

    let names: Vec<_> = written.lock().unwrap().clone();
    assert_eq!(
        names,
        vec![
            PathBuf::from("bundle_t1_i0.vtk"),
            PathBuf::from("bundle_t1_i1.vtk"),
            PathBuf::from("bundle_t1_i2.vtk"),
        ]
    );
}

#[test]
fn missing_basename_disables_output() {
    let (geometry, axial, fields) = model();
    for mode in [SnapshotMode::Final, SnapshotMode::All, SnapshotMode::None] {
        let (scheduler, written) = scheduler(mode, None);
        assert_eq!(scheduler.mode(), SnapshotMode::None);
        for it in [-1, 0, 4] {
            assert!(
                scheduler
                    .maybe_write(0, it, &geometry, &axial, &fields)
                    .unwrap()
                    .is_none()
            );
        }
        assert!(written.lock().unwrap().is_empty());
    }
}

#[test]
fn output_dir_prefixes_target() {
    let (scheduler, _) = scheduler(SnapshotMode::All, Some("bundle"));
    let scheduler = scheduler.with_output_dir("out");
    assert_eq!(
        scheduler.target_path(3, 4),
        Some(Path::new("out").join("bundle_t3_i4.vtk"))
    );
    assert_eq!(scheduler.target_path(3, -1), None);
}

#[test]
fn low_resolution_is_rejected() {
    let settings = SnapshotSettings {
        resolution: 2,
        ..SnapshotSettings::default()
    };
    let result = SnapshotScheduler::new(
        SnapshotMode::Final,
        Some("x".to_string()),
        settings,
        Box::new(Recorder(Arc::default())),
    );
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn decision_depends_only_on_mode_and_sign(timestep in -5i64..50, iteration in -50i64..50) {
        let (scheduler_final, _) = scheduler(SnapshotMode::Final, Some("b"));
        let (scheduler_all, _) = scheduler(SnapshotMode::All, Some("b"));
        let (scheduler_none, _) = scheduler(SnapshotMode::None, Some("b"));

        let is_final = iteration < 0;
        prop_assert_eq!(should_write(SnapshotMode::Final, iteration), is_final);
        prop_assert_eq!(should_write(SnapshotMode::All, iteration), !is_final);
        prop_assert!(!should_write(SnapshotMode::None, iteration));

        prop_assert_eq!(scheduler_final.target_path(timestep, iteration).is_some(), is_final);
        prop_assert_eq!(scheduler_all.target_path(timestep, iteration).is_some(), !is_final);
        prop_assert!(scheduler_none.target_path(timestep, iteration).is_none());
    }
}
