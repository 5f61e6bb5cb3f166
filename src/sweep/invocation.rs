//! Single simulator invocation
//!
//! Feeds the trace on stdin and captures merged stdout/stderr into the
//! artifact file. A non-zero exit is reported to the caller, never treated
//! as fatal: the artifact stays on disk and the parse stage decides whether
//! it is usable.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::grid::ParameterPoint;
use crate::utils::{Result, SweepError};

/// Outcome of one simulator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Simulator exited zero
    Completed,
    /// Simulator exited non-zero or was killed; artifact retained
    Failed,
}

/// Invoke the simulator once for (trace, parameter point), writing the
/// artifact at `artifact_path`. A pre-existing artifact with the same name
/// is overwritten. Blocks until the child process terminates.
pub fn run_simulation(
    simulator: &Path,
    trace_path: &Path,
    params: &ParameterPoint,
    artifact_path: &Path,
) -> Result<RunStatus> {
    let trace = File::open(trace_path)?;
    let artifact = File::create(artifact_path)?;
    let artifact_err = artifact.try_clone()?;

    let status = Command::new(simulator)
        .arg("-r")
        .arg(params.r.to_string())
        .arg("-j")
        .arg(params.k0.to_string())
        .arg("-k")
        .arg(params.k1.to_string())
        .arg("-l")
        .arg(params.k2.to_string())
        .arg("-f")
        .arg(params.f.to_string())
        .stdin(Stdio::from(trace))
        .stdout(Stdio::from(artifact))
        .stderr(Stdio::from(artifact_err))
        .status()
        .map_err(|source| SweepError::Spawn {
            path: simulator.to_path_buf(),
            source,
        })?;

    Ok(if status.success() {
        RunStatus::Completed
    } else {
        RunStatus::Failed
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn write_stub_sim(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fakesim.sh");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn test_run_captures_merged_output() {
        let dir = tempfile::tempdir().unwrap();
        let sim = write_stub_sim(
            dir.path(),
            "echo \"flags: $*\"\necho \"warning\" >&2\necho \"Avg inst retired per cycle: 1.500\"",
        );
        let trace = dir.path().join("t.trace");
        fs::write(&trace, "trace bytes").unwrap();
        let artifact = dir.path().join("t_j1_k2_l1_r4_f8.out");

        let params = ParameterPoint::new(1, 2, 1, 4, 8);
        let status = run_simulation(&sim, &trace, &params, &artifact).unwrap();
        assert_eq!(status, RunStatus::Completed);

        let text = fs::read_to_string(&artifact).unwrap();
        assert!(text.contains("-r 4 -j 1 -k 2 -l 1 -f 8"));
        assert!(text.contains("warning"));
        assert!(text.contains("Avg inst retired per cycle: 1.500"));
    }

    #[test]
    fn test_nonzero_exit_keeps_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sim = write_stub_sim(dir.path(), "echo \"dying\"\nexit 3");
        let trace = dir.path().join("t.trace");
        fs::write(&trace, "").unwrap();
        let artifact = dir.path().join("t_j1_k1_l1_r1_f4.out");

        let params = ParameterPoint::new(1, 1, 1, 1, 4);
        let status = run_simulation(&sim, &trace, &params, &artifact).unwrap();
        assert_eq!(status, RunStatus::Failed);
        assert!(artifact.exists());
        assert!(fs::read_to_string(&artifact).unwrap().contains("dying"));
    }

    #[test]
    fn test_missing_executable_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let trace = dir.path().join("t.trace");
        fs::write(&trace, "").unwrap();
        let artifact = dir.path().join("t_j1_k1_l1_r1_f4.out");

        let params = ParameterPoint::new(1, 1, 1, 1, 4);
        let err = run_simulation(
            Path::new("/nonexistent/procsim"),
            &trace,
            &params,
            &artifact,
        )
        .unwrap_err();
        assert!(matches!(err, SweepError::Spawn { .. }));
    }

    #[test]
    fn test_rerun_overwrites_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sim = write_stub_sim(dir.path(), "echo \"fresh\"");
        let trace = dir.path().join("t.trace");
        fs::write(&trace, "").unwrap();
        let artifact = dir.path().join("t_j1_k1_l1_r1_f4.out");
        fs::write(&artifact, "stale content from a previous sweep").unwrap();

        let params = ParameterPoint::new(1, 1, 1, 1, 4);
        run_simulation(&sim, &trace, &params, &artifact).unwrap();
        let text = fs::read_to_string(&artifact).unwrap();
        assert!(text.contains("fresh"));
        assert!(!text.contains("stale"));
    }
}
