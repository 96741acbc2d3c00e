use pf_results::*;

fn manifest(run_id: &str, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        case_name: "2x2 bundle".to_string(),
        timestamp: timestamp.to_string(),
        solver_version: "0.1.0".to_string(),
        parameters: RunParameters {
            power_density: 150.0,
            timesteps: 1,
            iterations: 2,
        },
        summary: Some(SolveSummaryRecord {
            columns: 12,
            min_temperature_k: 523.15,
            max_temperature_k: 890.0,
            solve_time_s: 0.01,
            total_time_s: 0.02,
        }),
        snapshots: vec!["two_by_two.vtk".to_string()],
    }
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("pf_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir.clone()).unwrap();

    let m = manifest("run_abc", "2026-10-18T12:00:00+00:00");
    let columns = vec![
        ColumnRecord {
            pin: 0,
            axial: 0,
            temperature_k: vec![900.0, 800.0, 600.0],
            source_w_cm3: vec![150.0, 150.0, 0.0],
        },
        ColumnRecord {
            pin: 0,
            axial: 1,
            temperature_k: vec![901.0, 801.0, 601.0],
            source_w_cm3: vec![150.0, 150.0, 0.0],
        },
    ];
    store.save_run(&m, &columns).unwrap();

    assert!(store.has_run("run_abc"));
    assert_eq!(store.load_manifest("run_abc").unwrap(), m);
    assert_eq!(store.load_columns("run_abc").unwrap(), columns);

    store.delete_run("run_abc").unwrap();
    assert!(!store.has_run("run_abc"));
}

#[test]
fn missing_run_is_reported() {
    let temp_dir = std::env::temp_dir().join("pf_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir).unwrap();
    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
}

#[test]
fn list_runs_sorted_by_timestamp() {
    let temp_dir = std::env::temp_dir().join("pf_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = RunStore::new(temp_dir.clone()).unwrap();

    store
        .save_run(&manifest("late", "2026-10-18T13:00:00+00:00"), &[])
        .unwrap();
    store
        .save_run(&manifest("early", "2026-10-18T09:00:00+00:00"), &[])
        .unwrap();
    std::fs::create_dir_all(temp_dir.join("stray")).unwrap();

    let runs = store.list_runs().unwrap();
    let ids: Vec<_> = runs.iter().map(|m| m.run_id.as_str()).collect();
    assert_eq!(ids, vec!["early", "late"]);
}

#[test]
fn timestamp_is_rfc3339() {
    let ts = timestamp_now();
    assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
}
