//! Artifact enumeration
//!
//! The parse stage reads artifacts through a small seam so it can run
//! against an in-memory set in tests without touching a real filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::Result;

/// One captured simulator output
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Filename, no directory component
    pub name: String,
    /// Full text content
    pub text: String,
}

/// Source of artifacts for the parse stage
pub trait ArtifactStore {
    /// Enumerate all artifacts in the store
    fn load(&self) -> Result<Vec<Artifact>>;
}

/// Directory-backed store scanning for `.out` files.
///
/// A missing directory is treated as empty, matching the behavior of a
/// sweep that never ran.
pub struct DirArtifactStore {
    dir: PathBuf,
}

impl DirArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactStore for DirArtifactStore {
    fn load(&self) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::new();
        if !self.dir.is_dir() {
            return Ok(artifacts);
        }

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("out") && path.is_file() {
                paths.push(path);
            }
        }
        // Deterministic enumeration order regardless of directory layout
        paths.sort();

        for path in paths {
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            // Crashed simulators can leave non-UTF8 bytes in their output
            let bytes = fs::read(&path)?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            artifacts.push(Artifact { name, text });
        }

        Ok(artifacts)
    }
}

/// In-memory store, used to exercise the parse stage without a filesystem
pub struct MemoryArtifactStore {
    pub artifacts: Vec<Artifact>,
}

impl MemoryArtifactStore {
    pub fn new(artifacts: Vec<Artifact>) -> Self {
        Self { artifacts }
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn load(&self) -> Result<Vec<Artifact>> {
        Ok(self.artifacts.clone())
    }
}
