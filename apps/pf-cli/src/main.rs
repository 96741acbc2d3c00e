mod error;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use pf_driver::{HeatFluidsDriver, RunSchedule, SurrogateHeatDriver, run_schedule};
use pf_geometry::{ChannelKind, GeometryModel};
use pf_project::SurrogateConfig;
use pf_results::{
    ColumnRecord, RunManifest, RunParameters, RunStore, SolveSummaryRecord, compute_run_id,
    timestamp_now,
};
use std::path::{Path, PathBuf};
use tracing::info;

const SOLVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "pinflow CLI - surrogate pin-bundle thermal solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a case file
    Validate {
        /// Path to the case YAML file
        config_path: PathBuf,
    },
    /// Print the bundle geometry derived from a case file
    Info {
        /// Path to the case YAML file
        config_path: PathBuf,
    },
    /// Solve a case with a uniform fuel heat source
    Run {
        /// Path to the case YAML file
        config_path: PathBuf,
        /// Volumetric heat source in every fuel ring, W/cm^3
        #[arg(long)]
        power_density: f64,
        /// Number of coupling timesteps
        #[arg(long, default_value_t = 1)]
        timesteps: usize,
        /// Coupling iterations per timestep
        #[arg(long, default_value_t = 1)]
        iterations: usize,
        /// Directory for snapshot files (defaults to the run directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Run store directory (defaults to .pinflow/runs next to the case file)
        #[arg(long)]
        store_dir: Option<PathBuf>,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List stored runs
    Runs {
        /// Run store directory
        store_dir: PathBuf,
    },
    /// Show details of a stored run
    ShowRun {
        /// Run store directory
        store_dir: PathBuf,
        /// Run ID to display
        run_id: String,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Info { config_path } => cmd_info(&config_path),
        Commands::Run {
            config_path,
            power_density,
            timesteps,
            iterations,
            output_dir,
            store_dir,
            no_cache,
        } => cmd_run(
            &config_path,
            RunParameters {
                power_density,
                timesteps,
                iterations,
            },
            output_dir,
            store_dir,
            !no_cache,
        ),
        Commands::Runs { store_dir } => cmd_runs(&store_dir),
        Commands::ShowRun { store_dir, run_id } => cmd_show_run(&store_dir, &run_id),
    }
}

fn cmd_validate(config_path: &Path) -> CliResult<()> {
    println!("Validating case: {}", config_path.display());
    let config = pf_project::load_yaml(config_path)?;
    pf_project::validate_config(&config).map_err(pf_project::ProjectError::from)?;
    println!("✓ Case is valid");
    Ok(())
}

fn cmd_info(config_path: &Path) -> CliResult<()> {
    let config = pf_project::load_yaml(config_path)?;
    let driver = SurrogateHeatDriver::from_config(&config)?;
    let geometry = driver.geometry();

    println!("Case: {}", config.name);
    println!(
        "  Pins: {} ({} x {}), pitch {} cm",
        geometry.n_pins(),
        config.geometry.n_pins_x,
        config.geometry.n_pins_y,
        config.geometry.pin_pitch
    );
    println!("  Flow area: {:?}", geometry.flow_area());
    println!("  Mass flow: {:?}", geometry.mass_flowrate());
    println!("  Boundary temperature: {:?}", driver.boundary_temperature());
    print_channels(geometry);

    let radial = geometry.radial_grid();
    println!(
        "  Rings: {} fuel + {} clad",
        radial.n_fuel_rings(),
        radial.n_clad_rings()
    );
    for ring in 0..radial.n_rings() {
        if let Some((r0, r1)) = radial.ring_bounds(ring) {
            let region = if radial.is_fuel_ring(ring) { "fuel" } else { "clad" };
            println!("    {:>2} {:<4} [{:.4}, {:.4}] cm", ring, region, r0, r1);
        }
    }

    let axial = driver.axial();
    println!("  Axial levels: {}", axial.n_axial());
    for (i, (z, h)) in axial.centers().iter().zip(axial.heights()).enumerate() {
        println!("    {:>2} z = {:.4} cm, dz = {:.4} cm", i, z, h);
    }
    println!("  Snapshots: {:?}", driver.scheduler().mode());
    Ok(())
}

fn print_channels(geometry: &GeometryModel) {
    let channels = geometry.channels();
    println!(
        "  Channels: {} ({} x {}), interior area {:.5} cm^2, total {:.5} cm^2",
        channels.len(),
        channels.rows(),
        channels.cols(),
        channels.interior_area(),
        channels.total_area()
    );
    for kind in [ChannelKind::Corner, ChannelKind::Edge, ChannelKind::Interior] {
        let idx: Vec<usize> = (0..channels.rows())
            .flat_map(|row| (0..channels.cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| channels.kind(row, col) == Some(kind))
            .filter_map(|(row, col)| channels.index(row, col))
            .collect();
        if let Some(&first) = idx.first() {
            println!(
                "    {:?}: {} channels, fraction {:.5}, flow {:.5} kg/s each",
                kind,
                idx.len(),
                channels.fractions()[first],
                channels.flowrates()[first]
            );
        }
    }
}

fn cmd_run(
    config_path: &Path,
    parameters: RunParameters,
    output_dir: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    use_cache: bool,
) -> CliResult<()> {
    if !parameters.power_density.is_finite() {
        return Err(CliError::InvalidInput(format!(
            "power density must be finite, got {}",
            parameters.power_density
        )));
    }

    let config = pf_project::load_yaml(config_path)?;
    let store = RunStore::new(store_dir.unwrap_or_else(|| default_store_dir(config_path)))?;
    let run_id = compute_run_id(&config, &parameters, SOLVER_VERSION);

    if use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        println!("✓ Loaded from cache: {}", run_id);
        print_manifest(&manifest);
        return Ok(());
    }

    println!(
        "Running case '{}' at {} W/cm^3 ({} timesteps x {} iterations)",
        config.name, parameters.power_density, parameters.timesteps, parameters.iterations
    );

    let snapshot_dir = output_dir.unwrap_or_else(|| store.run_dir(&run_id));
    let mut driver = SurrogateHeatDriver::from_config(&config)?.with_output_dir(snapshot_dir);
    driver.set_uniform_fuel_source(parameters.power_density)?;

    let outcome = run_schedule(
        &mut driver,
        &RunSchedule {
            timesteps: parameters.timesteps,
            iterations: parameters.iterations,
        },
    )?;

    let manifest = build_manifest(&config, &driver, run_id, parameters, outcome.elapsed_s);
    let columns = column_records(&driver)?;
    store.save_run(&manifest, &columns)?;
    info!(run_id = %manifest.run_id, "Run stored");

    println!("✓ Run completed: {}", manifest.run_id);
    print_manifest(&manifest);
    Ok(())
}

fn default_store_dir(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(".pinflow")
        .join("runs")
}

fn build_manifest(
    config: &SurrogateConfig,
    driver: &SurrogateHeatDriver,
    run_id: String,
    parameters: RunParameters,
    total_time_s: f64,
) -> RunManifest {
    RunManifest {
        run_id,
        case_name: config.name.clone(),
        timestamp: timestamp_now(),
        solver_version: SOLVER_VERSION.to_string(),
        parameters,
        summary: driver.last_summary().map(|s| SolveSummaryRecord {
            columns: s.columns,
            min_temperature_k: s.min_temperature,
            max_temperature_k: s.max_temperature,
            solve_time_s: s.elapsed_s,
            total_time_s,
        }),
        snapshots: driver
            .snapshots()
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    }
}

fn column_records(driver: &SurrogateHeatDriver) -> CliResult<Vec<ColumnRecord>> {
    let fields = driver.fields();
    let mut records = Vec::with_capacity(fields.shape().n_columns());
    for pin in 0..driver.n_pins() {
        for axial in 0..driver.n_axial() {
            records.push(ColumnRecord {
                pin,
                axial,
                temperature_k: fields
                    .temperature()
                    .column(pin, axial)
                    .map_err(pf_driver::DriverError::from)?
                    .to_vec(),
                source_w_cm3: fields
                    .source()
                    .column(pin, axial)
                    .map_err(pf_driver::DriverError::from)?
                    .to_vec(),
            });
        }
    }
    Ok(records)
}

fn print_manifest(manifest: &RunManifest) {
    println!("  Case: {}", manifest.case_name);
    println!("  Timestamp: {}", manifest.timestamp);
    println!(
        "  Power density: {} W/cm^3, {} timesteps x {} iterations",
        manifest.parameters.power_density,
        manifest.parameters.timesteps,
        manifest.parameters.iterations
    );
    if let Some(s) = &manifest.summary {
        println!("  Columns: {}", s.columns);
        println!(
            "  Temperature: {:.2} K .. {:.2} K",
            s.min_temperature_k, s.max_temperature_k
        );
        println!(
            "  Timing: solve {:.3} s, total {:.3} s",
            s.solve_time_s, s.total_time_s
        );
    }
    for snapshot in &manifest.snapshots {
        println!("  Snapshot: {}", snapshot);
    }
}

fn cmd_runs(store_dir: &Path) -> CliResult<()> {
    let store = RunStore::new(store_dir.to_path_buf())?;
    let runs = store.list_runs()?;

    if runs.is_empty() {
        println!("No runs found in {}", store_dir.display());
    } else {
        println!("Runs in {}:", store_dir.display());
        for run in runs {
            let peak = run
                .summary
                .map(|s| format!("{:.2} K", s.max_temperature_k))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {} - {} @ {} W/cm^3, peak {} ({})",
                run.run_id.chars().take(12).collect::<String>(),
                run.case_name,
                run.parameters.power_density,
                peak,
                run.timestamp
            );
        }
    }
    Ok(())
}

fn cmd_show_run(store_dir: &Path, run_id: &str) -> CliResult<()> {
    let store = RunStore::new(store_dir.to_path_buf())?;
    let manifest = store.load_manifest(run_id)?;
    println!("Run {}", manifest.run_id);
    print_manifest(&manifest);

    let columns = store.load_columns(run_id)?;
    if let Some(hottest) = columns.iter().max_by(|a, b| {
        let ta = a.temperature_k.first().copied().unwrap_or(f64::NEG_INFINITY);
        let tb = b.temperature_k.first().copied().unwrap_or(f64::NEG_INFINITY);
        ta.total_cmp(&tb)
    }) {
        println!(
            "  Hottest column: pin {}, axial {} ({:?} K)",
            hottest.pin, hottest.axial, hottest.temperature_k
        );
    }
    Ok(())
}
