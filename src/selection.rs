//! Minimal-configuration selection
//!
//! Pure record-set to result-set transformation: group records by
//! (trace, fetch rate), keep the candidates within the relative IPC
//! threshold, and pick the cheapest hardware under a fixed tie-break so
//! repeated runs always agree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grid::ParameterPoint;
use crate::results::ExperimentRecord;

/// Selected configuration for one (trace, fetch rate) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub trace: String,
    pub f: u32,
    /// Best IPC observed anywhere in the group
    pub max_ipc: f64,
    pub chosen: ParameterPoint,
    pub chosen_ipc: f64,
    pub cost: u32,
}

/// Group records by (trace, F) and pick the minimal-cost candidate reaching
/// `threshold_frac` of the group's best IPC.
///
/// Ties break by ascending R, then k0, k1, k2. The record achieving the
/// group maximum always meets its own threshold, so every group yields
/// exactly one result; an empty record set yields no groups at all. Group
/// output order is (trace, F) ascending.
pub fn select_minimal_configs(
    records: &[ExperimentRecord],
    threshold_frac: f64,
) -> Vec<SelectionResult> {
    let mut groups: BTreeMap<(&str, u32), Vec<&ExperimentRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.trace.as_str(), record.params.f))
            .or_default()
            .push(record);
    }

    let mut results = Vec::with_capacity(groups.len());
    for ((trace, f), group) in groups {
        // Groups are never built empty
        let Some(max_record) = group.iter().copied().max_by(|a, b| a.ipc.total_cmp(&b.ipc))
        else {
            continue;
        };

        let threshold = threshold_frac * max_record.ipc;
        let chosen = group
            .iter()
            .copied()
            .filter(|r| r.ipc >= threshold)
            .min_by_key(|r| selection_rank(r))
            .unwrap_or(max_record);

        results.push(SelectionResult {
            trace: trace.to_string(),
            f,
            max_ipc: max_record.ipc,
            chosen: chosen.params,
            chosen_ipc: chosen.ipc,
            cost: chosen.params.cost(),
        });
    }
    results
}

/// Tie-break rank: cheaper first, then fewer result buses, then fewer
/// functional units in dimension order.
fn selection_rank(record: &ExperimentRecord) -> (u32, u32, u32, u32, u32) {
    let p = &record.params;
    (p.cost(), p.r, p.k0, p.k1, p.k2)
}
