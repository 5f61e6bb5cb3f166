//! Sweep configuration derived from CLI arguments

use super::cli::CliArgs;
use crate::grid::SweepDomain;
use std::path::PathBuf;

/// Named baseline configuration: the value each dimension holds while one
/// dimension is swept for the per-parameter data series.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub k0: u32,
    pub k1: u32,
    pub k2: u32,
    pub r: u32,
    pub f: u32,
}

/// Complete sweep configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    // Layout
    pub traces_dir: PathBuf,
    pub outputs_dir: PathBuf,
    pub figures_dir: PathBuf,
    pub simulator: PathBuf,

    // Domain
    pub domain: SweepDomain,
    pub baseline: Baseline,

    // Selection
    pub threshold: f64,

    // Execution
    pub threads: u32,
    pub run_stage: bool,
    pub analyze_stage: bool,

    // Output
    pub output_path: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl SweepConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        // Validate first
        args.validate()?;

        let domain = SweepDomain {
            k0: args.k0_values.clone(),
            k1: args.k1_values.clone(),
            k2: args.k2_values.clone(),
            r: args.result_buses.clone(),
            f: args.fetch_rates.clone(),
        };

        let baseline = Baseline {
            k0: args.baseline_k0,
            k1: args.baseline_k1,
            k2: args.baseline_k2,
            r: args.baseline_r,
            f: args.baseline_f,
        };

        Ok(Self {
            traces_dir: args.traces_dir.clone(),
            outputs_dir: args.outputs_dir.clone(),
            figures_dir: args.figures_dir.clone(),
            simulator: args.simulator.clone(),

            domain,
            baseline,

            threshold: args.threshold,

            threads: args.effective_threads(),
            run_stage: !args.analyze_only,
            analyze_stage: !args.run_only,

            output_path: args.output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_defaults() {
        let args = CliArgs::parse_from(["test"]);
        let config = SweepConfig::from_cli(&args).unwrap();
        assert_eq!(config.domain.len(), 2 * 2 * 2 * 4 * 2);
        assert!(config.run_stage);
        assert!(config.analyze_stage);
        assert!(config.threads >= 1);
    }

    #[test]
    fn test_stage_toggles() {
        let args = CliArgs::parse_from(["test", "--run-only"]);
        let config = SweepConfig::from_cli(&args).unwrap();
        assert!(config.run_stage);
        assert!(!config.analyze_stage);

        let args = CliArgs::parse_from(["test", "--analyze-only"]);
        let config = SweepConfig::from_cli(&args).unwrap();
        assert!(!config.run_stage);
        assert!(config.analyze_stage);
    }

    #[test]
    fn test_from_cli_rejects_invalid() {
        let args = CliArgs::parse_from(["test", "--k2", "0"]);
        assert!(SweepConfig::from_cli(&args).is_err());
    }
}
