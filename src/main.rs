//! procsim-sweep - design-space exploration harness for cycle-accurate
//! processor simulators
//!
//! Sweeps a parameter grid over simulator configurations, parses the
//! captured performance metrics, and selects the minimal hardware
//! configuration meeting a performance target.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use procsim_sweep::config::{CliArgs, SweepConfig};
use procsim_sweep::report;
use procsim_sweep::results::{parse_records, DirArtifactStore};
use procsim_sweep::selection::select_minimal_configs;
use procsim_sweep::sweep::SweepOrchestrator;
use procsim_sweep::utils::SweepError;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &SweepConfig) {
    if config.quiet {
        return;
    }

    println!("procsim-sweep v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Simulator: {}", config.simulator.display());
    println!(
        "Traces: {} | Outputs: {} | Figures: {}",
        config.traces_dir.display(),
        config.outputs_dir.display(),
        config.figures_dir.display()
    );
    println!(
        "k0: {:?}  k1: {:?}  k2: {:?}  R: {:?}  F: {:?}",
        config.domain.k0, config.domain.k1, config.domain.k2, config.domain.r, config.domain.f
    );
    println!(
        "Grid points: {} | Threads: {} | Threshold: {:.0}%",
        config.domain.len(),
        config.threads,
        config.threshold * 100.0
    );
    println!("====================================\n");
}

fn analyze(config: &SweepConfig) -> Result<()> {
    let store = DirArtifactStore::new(&config.outputs_dir);
    let records = parse_records(&store)?;
    if records.is_empty() {
        return Err(SweepError::EmptyDataset(config.outputs_dir.clone()).into());
    }
    info!("Loaded {} records", records.len());

    let results = select_minimal_configs(&records, config.threshold);

    std::fs::create_dir_all(&config.figures_dir)?;
    let table_path = config.figures_dir.join("minimal_configs.csv");
    report::write_table(&table_path, &results)?;
    info!("Wrote {}", table_path.display());

    report::write_axis_series(&config.figures_dir, &records, &config.baseline)?;

    if let Some(ref path) = config.output_path {
        report::write_json(path, &results)?;
        info!("Wrote {}", path.display());
    }

    if !config.quiet {
        report::print_summary(&results, config.threshold);
    }

    Ok(())
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse_args();

    // Setup logging
    setup_logging(args.verbose, args.quiet);

    // Build configuration
    let config = SweepConfig::from_cli(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // Print banner
    print_banner(&config);

    if config.run_stage {
        let orchestrator = SweepOrchestrator::new(config.clone());
        orchestrator.run()?;
    }

    if config.analyze_stage {
        analyze(&config)?;
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
