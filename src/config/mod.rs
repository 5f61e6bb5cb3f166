//! Configuration module

pub mod cli;
pub mod sweep_config;

pub use cli::CliArgs;
pub use sweep_config::{Baseline, SweepConfig};
