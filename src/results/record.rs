//! Parsed experiment records

use crate::grid::ParameterPoint;
use serde::{Deserialize, Serialize};

/// One successfully parsed simulator run.
///
/// At most one record exists per (trace, params) pair: the artifact naming
/// scheme is a bijection over that pair, so the parse stage never needs to
/// deduplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub trace: String,
    pub params: ParameterPoint,
    /// Instructions retired per cycle, as reported by the simulator
    pub ipc: f64,
}
