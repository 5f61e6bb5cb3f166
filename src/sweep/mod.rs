//! Sweep execution: simulator invocation fan-out

pub mod counters;
pub mod invocation;
pub mod orchestrator;

pub use counters::SweepCounters;
pub use invocation::{run_simulation, RunStatus};
pub use orchestrator::{SweepOrchestrator, SweepSummary, TraceFile};
