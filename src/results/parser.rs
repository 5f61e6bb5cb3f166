//! Simulator output parsing
//!
//! Turns captured artifacts into experiment records. Files that do not
//! match the artifact grammar are skipped silently (they are not experiment
//! artifacts); an artifact with a matching name but no metric line is
//! dropped with a warning, covering both simulator crashes and truncated
//! output.

use tracing::warn;

use super::artifact::{Artifact, ArtifactStore};
use super::naming::parse_artifact_name;
use super::record::ExperimentRecord;
use crate::utils::Result;

/// Line marker preceding the IPC value in simulator output
pub const IPC_MARKER: &str = "Avg inst retired per cycle";

/// Extract the IPC value from artifact text: the numeric value after the
/// first colon on the first line containing the marker. A marker line with
/// no parsable non-negative value counts as no metric.
pub fn extract_ipc(text: &str) -> Option<f64> {
    for line in text.lines() {
        if line.contains(IPC_MARKER) {
            let value = line.splitn(2, ':').nth(1)?.trim();
            return value.parse::<f64>().ok().filter(|v| *v >= 0.0);
        }
    }
    None
}

/// Parse every artifact in the store into experiment records.
///
/// The record set is deduplicated by construction: one artifact per
/// (trace, parameters) pair, one record per artifact at most.
pub fn parse_records(store: &dyn ArtifactStore) -> Result<Vec<ExperimentRecord>> {
    let mut records = Vec::new();
    for artifact in store.load()? {
        if let Some(record) = parse_artifact(&artifact) {
            records.push(record);
        }
    }
    Ok(records)
}

fn parse_artifact(artifact: &Artifact) -> Option<ExperimentRecord> {
    let (trace, params) = parse_artifact_name(&artifact.name)?;
    match extract_ipc(&artifact.text) {
        Some(ipc) => Some(ExperimentRecord { trace, params, ipc }),
        None => {
            warn!(
                "Skipping {}: no usable IPC metric (failed or truncated run)",
                artifact.name
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ParameterPoint;
    use crate::results::artifact::MemoryArtifactStore;

    fn artifact(name: &str, text: &str) -> Artifact {
        Artifact {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_extract_ipc_basic() {
        let text = "Processor stats\nAvg inst retired per cycle: 1.234\n";
        assert_eq!(extract_ipc(text), Some(1.234));
    }

    #[test]
    fn test_extract_ipc_space_before_colon() {
        let text = "Avg inst retired per cycle : 1.732\n";
        assert_eq!(extract_ipc(text), Some(1.732));
    }

    #[test]
    fn test_extract_ipc_missing_marker() {
        assert_eq!(extract_ipc("Segmentation fault\n"), None);
        assert_eq!(extract_ipc(""), None);
    }

    #[test]
    fn test_extract_ipc_truncated_line() {
        // Marker present but the value never made it to disk
        assert_eq!(extract_ipc("Avg inst retired per cycle"), None);
        assert_eq!(extract_ipc("Avg inst retired per cycle:"), None);
    }

    #[test]
    fn test_extract_ipc_rejects_negative() {
        assert_eq!(extract_ipc("Avg inst retired per cycle: -0.5\n"), None);
    }

    #[test]
    fn test_parse_record_scenario() {
        let store = MemoryArtifactStore::new(vec![artifact(
            "bench1_j2_k1_l2_r4_f8.out",
            "some diagnostics\nAvg inst retired per cycle : 1.732\n",
        )]);
        let records = parse_records(&store).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].trace, "bench1");
        assert_eq!(records[0].params, ParameterPoint::new(2, 1, 2, 4, 8));
        assert_eq!(records[0].ipc, 1.732);
    }

    #[test]
    fn test_foreign_filename_skipped_silently() {
        let store = MemoryArtifactStore::new(vec![artifact("bench1_bad.out", "whatever")]);
        assert!(parse_records(&store).unwrap().is_empty());
    }

    #[test]
    fn test_missing_metric_dropped() {
        let store = MemoryArtifactStore::new(vec![
            artifact("a_j1_k1_l1_r1_f4.out", "crashed before stats\n"),
            artifact("b_j1_k1_l1_r1_f4.out", "Avg inst retired per cycle: 2.0\n"),
        ]);
        let records = parse_records(&store).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].trace, "b");
    }

    #[test]
    fn test_empty_store_yields_no_records() {
        let store = MemoryArtifactStore::new(vec![]);
        assert!(parse_records(&store).unwrap().is_empty());
    }
}
