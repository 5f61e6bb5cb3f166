//! Command-line argument parsing
//!
//! Arguments are grouped by category: directory layout, the simulator
//! executable, the sweep domain, the baseline for per-parameter series,
//! selection, execution, and output.

use clap::Parser;
use std::path::PathBuf;

/// Design-space exploration harness for a cycle-accurate processor simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "procsim-sweep")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Directory Layout =====
    /// Directory containing .trace inputs
    #[arg(long = "traces-dir", default_value = "./traces")]
    pub traces_dir: PathBuf,

    /// Directory where captured simulator outputs are written
    #[arg(long = "outputs-dir", default_value = "./outputs")]
    pub outputs_dir: PathBuf,

    /// Directory for the exported report and data series
    #[arg(long = "figures-dir", default_value = "./figures")]
    pub figures_dir: PathBuf,

    // ===== Simulator =====
    /// Path to the simulator executable
    #[arg(long = "simulator", default_value = "./procsim")]
    pub simulator: PathBuf,

    // ===== Sweep Domain =====
    /// k0 functional-unit counts to sweep
    #[arg(long = "k0", value_delimiter = ',', default_values_t = vec![1u32, 2])]
    pub k0_values: Vec<u32>,

    /// k1 functional-unit counts to sweep
    #[arg(long = "k1", value_delimiter = ',', default_values_t = vec![1u32, 2])]
    pub k1_values: Vec<u32>,

    /// k2 functional-unit counts to sweep
    #[arg(long = "k2", value_delimiter = ',', default_values_t = vec![1u32, 2])]
    pub k2_values: Vec<u32>,

    /// Result-bus counts to sweep
    #[arg(short = 'r', long = "result-buses", value_delimiter = ',', default_values_t = vec![1u32, 2, 4, 8])]
    pub result_buses: Vec<u32>,

    /// Fetch rates to sweep
    #[arg(short = 'f', long = "fetch-rates", value_delimiter = ',', default_values_t = vec![4u32, 8])]
    pub fetch_rates: Vec<u32>,

    // ===== Baseline =====
    /// Baseline k0 held while other dimensions are swept for data series
    #[arg(long = "baseline-k0", default_value_t = 2)]
    pub baseline_k0: u32,

    /// Baseline k1
    #[arg(long = "baseline-k1", default_value_t = 2)]
    pub baseline_k1: u32,

    /// Baseline k2
    #[arg(long = "baseline-k2", default_value_t = 2)]
    pub baseline_k2: u32,

    /// Baseline result-bus count
    #[arg(long = "baseline-r", default_value_t = 2)]
    pub baseline_r: u32,

    /// Baseline fetch rate
    #[arg(long = "baseline-f", default_value_t = 4)]
    pub baseline_f: u32,

    // ===== Selection =====
    /// Fraction of a group's best IPC a candidate must reach
    #[arg(long = "threshold", default_value_t = 0.95)]
    pub threshold: f64,

    // ===== Execution =====
    /// Number of worker threads (0 = auto-detect)
    #[arg(long = "threads", default_value_t = 0)]
    pub threads: u32,

    /// Run the sweep only; skip analysis and reporting
    #[arg(long = "run-only")]
    pub run_only: bool,

    /// Analyze existing outputs only; skip the sweep
    #[arg(long = "analyze-only")]
    pub analyze_only: bool,

    // ===== Output =====
    /// Write selection results as JSON to this path
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.run_only && self.analyze_only {
            return Err("--run-only and --analyze-only are mutually exclusive".to_string());
        }

        let dimensions: [(&str, &Vec<u32>); 5] = [
            ("--k0", &self.k0_values),
            ("--k1", &self.k1_values),
            ("--k2", &self.k2_values),
            ("--result-buses", &self.result_buses),
            ("--fetch-rates", &self.fetch_rates),
        ];
        for (name, values) in dimensions {
            if values.is_empty() {
                return Err(format!("{} requires at least one value", name));
            }
            if values.iter().any(|&v| v == 0) {
                return Err(format!("{} values must be positive", name));
            }
        }

        let baseline = [
            ("--baseline-k0", self.baseline_k0),
            ("--baseline-k1", self.baseline_k1),
            ("--baseline-k2", self.baseline_k2),
            ("--baseline-r", self.baseline_r),
            ("--baseline-f", self.baseline_f),
        ];
        for (name, value) in baseline {
            if value == 0 {
                return Err(format!("{} must be positive", name));
            }
        }

        if self.threshold <= 0.0 || self.threshold > 1.0 {
            return Err("--threshold must be within (0.0, 1.0]".to_string());
        }

        Ok(())
    }

    /// Get effective number of worker threads (0 = auto-detect)
    pub fn effective_threads(&self) -> u32 {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get() as u32)
                .unwrap_or(4)
        } else {
            self.threads
        }
    }
}
