//! Result parsing: captured artifacts to experiment records

pub mod artifact;
pub mod naming;
pub mod parser;
pub mod record;

pub use artifact::{Artifact, ArtifactStore, DirArtifactStore, MemoryArtifactStore};
pub use naming::{artifact_file_name, parse_artifact_name};
pub use parser::{extract_ipc, parse_records, IPC_MARKER};
pub use record::ExperimentRecord;
