//! Baseline-held parameter series
//!
//! For each sweep dimension, projects IPC against that dimension while the
//! other four hold their baseline values, one series per trace. The output
//! is plot-ready CSV; figure rendering happens outside this tool.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Baseline;
use crate::grid::ParameterPoint;
use crate::results::ExperimentRecord;
use crate::utils::{Result, SweepError};

/// A sweep dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    K0,
    K1,
    K2,
    R,
    F,
}

pub const ALL_AXES: [SweepAxis; 5] = [
    SweepAxis::K0,
    SweepAxis::K1,
    SweepAxis::K2,
    SweepAxis::R,
    SweepAxis::F,
];

impl SweepAxis {
    pub fn name(&self) -> &'static str {
        match self {
            SweepAxis::K0 => "k0",
            SweepAxis::K1 => "k1",
            SweepAxis::K2 => "k2",
            SweepAxis::R => "R",
            SweepAxis::F => "F",
        }
    }

    fn value(&self, p: &ParameterPoint) -> u32 {
        match self {
            SweepAxis::K0 => p.k0,
            SweepAxis::K1 => p.k1,
            SweepAxis::K2 => p.k2,
            SweepAxis::R => p.r,
            SweepAxis::F => p.f,
        }
    }

    /// The point probed for `x` on this axis: the axis takes `x`, every
    /// other dimension holds its baseline value
    fn probe(&self, b: &Baseline, x: u32) -> ParameterPoint {
        match self {
            SweepAxis::K0 => ParameterPoint::new(x, b.k1, b.k2, b.r, b.f),
            SweepAxis::K1 => ParameterPoint::new(b.k0, x, b.k2, b.r, b.f),
            SweepAxis::K2 => ParameterPoint::new(b.k0, b.k1, x, b.r, b.f),
            SweepAxis::R => ParameterPoint::new(b.k0, b.k1, b.k2, x, b.f),
            SweepAxis::F => ParameterPoint::new(b.k0, b.k1, b.k2, b.r, x),
        }
    }
}

/// One (trace, x, ipc) row of a series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub trace: String,
    pub x: u32,
    pub ipc: f64,
}

/// Build the series for one axis from the full record set.
///
/// Rows come out in (trace, x) ascending order; (trace, x) combinations
/// that were never swept at the baseline are omitted.
pub fn axis_series(
    records: &[ExperimentRecord],
    baseline: &Baseline,
    axis: SweepAxis,
) -> Vec<SeriesPoint> {
    let mut by_key: HashMap<(&str, ParameterPoint), f64> = HashMap::new();
    let mut traces: BTreeSet<&str> = BTreeSet::new();
    let mut xs: BTreeSet<u32> = BTreeSet::new();
    for r in records {
        by_key.insert((r.trace.as_str(), r.params), r.ipc);
        traces.insert(r.trace.as_str());
        xs.insert(axis.value(&r.params));
    }

    let mut series = Vec::new();
    for trace in traces {
        for &x in &xs {
            let probe = axis.probe(baseline, x);
            if let Some(&ipc) = by_key.get(&(trace, probe)) {
                series.push(SeriesPoint {
                    trace: trace.to_string(),
                    x,
                    ipc,
                });
            }
        }
    }
    series
}

/// Write `ipc_vs_<axis>.csv` under `dir` for every axis
pub fn write_axis_series(
    dir: &Path,
    records: &[ExperimentRecord],
    baseline: &Baseline,
) -> Result<()> {
    for axis in ALL_AXES {
        let path = dir.join(format!("ipc_vs_{}.csv", axis.name()));
        let export_err = |source: io::Error| SweepError::Export {
            path: path.clone(),
            source,
        };

        let mut file = File::create(&path).map_err(export_err)?;
        writeln!(file, "trace,{},ipc", axis.name()).map_err(export_err)?;
        for point in axis_series(records, baseline, axis) {
            writeln!(file, "{},{},{}", point.trace, point.x, point.ipc).map_err(export_err)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Baseline {
        Baseline {
            k0: 2,
            k1: 2,
            k2: 2,
            r: 2,
            f: 4,
        }
    }

    fn record(trace: &str, k0: u32, k1: u32, k2: u32, r: u32, f: u32, ipc: f64) -> ExperimentRecord {
        ExperimentRecord {
            trace: trace.to_string(),
            params: ParameterPoint::new(k0, k1, k2, r, f),
            ipc,
        }
    }

    #[test]
    fn test_axis_series_holds_baseline() {
        let records = vec![
            record("t", 1, 2, 2, 2, 4, 1.0),
            record("t", 2, 2, 2, 2, 4, 1.5),
            // Off-baseline point: never appears in the k0 series
            record("t", 1, 1, 2, 2, 4, 0.9),
        ];
        let series = axis_series(&records, &baseline(), SweepAxis::K0);
        assert_eq!(
            series,
            vec![
                SeriesPoint {
                    trace: "t".to_string(),
                    x: 1,
                    ipc: 1.0
                },
                SeriesPoint {
                    trace: "t".to_string(),
                    x: 2,
                    ipc: 1.5
                },
            ]
        );
    }

    #[test]
    fn test_axis_series_one_series_per_trace() {
        let records = vec![
            record("a", 2, 2, 2, 2, 4, 1.0),
            record("a", 2, 2, 2, 2, 8, 1.2),
            record("b", 2, 2, 2, 2, 4, 0.8),
        ];
        let series = axis_series(&records, &baseline(), SweepAxis::F);
        let a_points: Vec<u32> = series
            .iter()
            .filter(|p| p.trace == "a")
            .map(|p| p.x)
            .collect();
        let b_points: Vec<u32> = series
            .iter()
            .filter(|p| p.trace == "b")
            .map(|p| p.x)
            .collect();
        assert_eq!(a_points, vec![4, 8]);
        assert_eq!(b_points, vec![4]);
    }

    #[test]
    fn test_axis_series_empty_records() {
        assert!(axis_series(&[], &baseline(), SweepAxis::R).is_empty());
    }

    #[test]
    fn test_write_axis_series_files() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![record("t", 2, 2, 2, 2, 4, 1.0)];
        write_axis_series(dir.path(), &records, &baseline()).unwrap();

        for name in ["k0", "k1", "k2", "R", "F"] {
            let path = dir.path().join(format!("ipc_vs_{}.csv", name));
            assert!(path.exists(), "missing {}", path.display());
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.starts_with(&format!("trace,{},ipc", name)));
            // The lone record sits exactly at the baseline, so every axis
            // series contains it once
            assert_eq!(text.lines().count(), 2);
        }
    }
}
