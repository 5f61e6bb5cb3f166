//! Selection report export
//!
//! Renders selection results to a durable CSV table, an optional JSON
//! document, and a human-readable per-group summary. Pure projection: all
//! decisions happen in the selection stage.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::grid::ParameterPoint;
use crate::selection::SelectionResult;
use crate::utils::{Result, SweepError};

/// Column order of the exported table
pub const TABLE_HEADER: &str = "trace,F,max_ipc,k0,k1,k2,R,IPC,cost";

/// Write the minimal-configuration table.
///
/// Floats are written in their shortest round-trip form so a re-read
/// reproduces the values exactly.
pub fn write_table(path: &Path, results: &[SelectionResult]) -> Result<()> {
    let export_err = |source: io::Error| SweepError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(export_err)?;
    writeln!(file, "{}", TABLE_HEADER).map_err(export_err)?;
    for r in results {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{}",
            r.trace,
            r.f,
            r.max_ipc,
            r.chosen.k0,
            r.chosen.k1,
            r.chosen.k2,
            r.chosen.r,
            r.chosen_ipc,
            r.cost
        )
        .map_err(export_err)?;
    }
    Ok(())
}

/// Re-read a previously written table.
///
/// Rows that do not parse are skipped, mirroring how the artifact parser
/// treats foreign files.
pub fn read_table(path: &Path) -> Result<Vec<SelectionResult>> {
    let text = std::fs::read_to_string(path)?;
    let mut results = Vec::new();
    for line in text.lines().skip(1) {
        if let Some(result) = parse_table_row(line) {
            results.push(result);
        }
    }
    Ok(results)
}

fn parse_table_row(line: &str) -> Option<SelectionResult> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 9 {
        return None;
    }
    let f: u32 = fields[1].parse().ok()?;
    Some(SelectionResult {
        trace: fields[0].to_string(),
        f,
        max_ipc: fields[2].parse().ok()?,
        chosen: ParameterPoint::new(
            fields[3].parse().ok()?,
            fields[4].parse().ok()?,
            fields[5].parse().ok()?,
            fields[6].parse().ok()?,
            f,
        ),
        chosen_ipc: fields[7].parse().ok()?,
        cost: fields[8].parse().ok()?,
    })
}

/// Write selection results as pretty-printed JSON
pub fn write_json(path: &Path, results: &[SelectionResult]) -> Result<()> {
    let export_err = |source: io::Error| SweepError::Export {
        path: path.to_path_buf(),
        source,
    };

    let doc = serde_json::json!({ "groups": results });
    let mut file = File::create(path).map_err(export_err)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&doc).unwrap()).map_err(export_err)?;
    Ok(())
}

/// Print the per-group summary (compact format)
pub fn print_summary(results: &[SelectionResult], threshold_frac: f64) {
    println!(
        "\nRecommended minimal hardware per trace and fetch rate (>={:.0}% of max IPC):",
        threshold_frac * 100.0
    );
    for r in results {
        println!("Trace={}, F={}:", r.trace, r.f);
        println!("  Max IPC = {:.3}", r.max_ipc);
        println!(
            "  Chosen config: k0={}, k1={}, k2={}, R={} (cost={}) -> IPC={:.3}",
            r.chosen.k0, r.chosen.k1, r.chosen.k2, r.chosen.r, r.cost, r.chosen_ipc
        );
    }
}
