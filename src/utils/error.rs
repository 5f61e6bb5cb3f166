//! Error types for procsim-sweep

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
///
/// Per-artifact problems (foreign filename, missing metric) are not errors:
/// the parse stage skips them locally. Only a globally empty dataset, an
/// unwritable destination, or a simulator that cannot be launched at all is
/// fatal to a run.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch simulator {}: {source}", .path.display())]
    Spawn { path: PathBuf, source: io::Error },

    #[error("No usable simulator outputs found in {}", .0.display())]
    EmptyDataset(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    Export { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;
