//! Sweep orchestrator
//!
//! Builds the (trace × parameter point) job list, fans it out to worker
//! threads, and joins them all before analysis runs: the outputs directory
//! is the barrier between the execute and parse stages.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::counters::SweepCounters;
use super::invocation::{run_simulation, RunStatus};
use crate::config::SweepConfig;
use crate::grid::{ParameterGrid, ParameterPoint};
use crate::results::artifact_file_name;
use crate::utils::{Result, SweepError};

/// One discovered trace input
#[derive(Debug, Clone)]
pub struct TraceFile {
    /// Trace identifier (file stem, used in artifact names)
    pub name: String,
    pub path: PathBuf,
}

/// One (trace, parameter point) unit of work
#[derive(Debug, Clone)]
struct Job {
    trace: TraceFile,
    params: ParameterPoint,
}

/// Summary of a completed sweep
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub jobs: u64,
    pub completed: u64,
    pub sim_failures: u64,
    pub elapsed: Duration,
}

/// Per-worker outcome, merged after join
struct WorkerReport {
    completed: u64,
    sim_failures: u64,
    error: Option<SweepError>,
}

/// Sweep orchestrator
pub struct SweepOrchestrator {
    config: Arc<SweepConfig>,
}

impl SweepOrchestrator {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Discover `.trace` inputs under the traces directory, sorted by name
    pub fn discover_traces(&self) -> Result<Vec<TraceFile>> {
        let dir = &self.config.traces_dir;
        if !dir.is_dir() {
            return Err(SweepError::Config(format!(
                "traces directory {} does not exist",
                dir.display()
            )));
        }

        let mut traces = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("trace") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            traces.push(TraceFile {
                name: stem.to_string(),
                path,
            });
        }
        traces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(traces)
    }

    /// Run the full sweep: every trace × every grid point, exactly once
    /// each. Returns once every dispatched invocation has completed or the
    /// first fatal error has been observed.
    pub fn run(&self) -> Result<SweepSummary> {
        let traces = self.discover_traces()?;
        if traces.is_empty() {
            return Err(SweepError::Config(format!(
                "no .trace files found in {}",
                self.config.traces_dir.display()
            )));
        }

        fs::create_dir_all(&self.config.outputs_dir)?;

        let grid = ParameterGrid::new(&self.config.domain);
        let mut jobs = Vec::with_capacity(traces.len() * grid.len());
        for trace in &traces {
            for params in grid.iter() {
                jobs.push(Job {
                    trace: trace.clone(),
                    params,
                });
            }
        }

        info!(
            "Sweeping {} configurations over {} traces ({} simulator runs)",
            grid.len(),
            traces.len(),
            jobs.len()
        );

        let jobs = Arc::new(jobs);
        let counters = Arc::new(SweepCounters::new(jobs.len() as u64));
        let threads = (self.config.threads as usize).min(jobs.len()).max(1);

        let start = Instant::now();
        let mut handles = Vec::with_capacity(threads);
        for worker_id in 0..threads {
            let config = Arc::clone(&self.config);
            let jobs = Arc::clone(&jobs);
            let counters = Arc::clone(&counters);
            let handle = thread::Builder::new()
                .name(format!("sweep-worker-{}", worker_id))
                .spawn(move || worker_loop(&config, &jobs, &counters))
                .map_err(SweepError::Io)?;
            handles.push(handle);
        }

        // Progress reporting (if not quiet)
        let progress = if self.config.quiet {
            None
        } else {
            let counters = Arc::clone(&counters);
            Some(thread::spawn(move || report_progress(&counters)))
        };

        let mut completed = 0u64;
        let mut sim_failures = 0u64;
        let mut first_error = None;
        for handle in handles {
            match handle.join() {
                Ok(report) => {
                    completed += report.completed;
                    sim_failures += report.sim_failures;
                    if first_error.is_none() {
                        first_error = report.error;
                    }
                }
                Err(_) => {
                    if first_error.is_none() {
                        first_error = Some(SweepError::Config("sweep worker panicked".into()));
                    }
                }
            }
        }

        counters.signal_shutdown();
        if let Some(handle) = progress {
            let _ = handle.join();
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        let summary = SweepSummary {
            jobs: jobs.len() as u64,
            completed,
            sim_failures,
            elapsed: start.elapsed(),
        };
        info!(
            "Sweep finished: {}/{} runs in {:.1}s ({} non-zero exits)",
            summary.completed,
            summary.jobs,
            summary.elapsed.as_secs_f64(),
            summary.sim_failures
        );
        Ok(summary)
    }
}

fn worker_loop(config: &SweepConfig, jobs: &[Job], counters: &SweepCounters) -> WorkerReport {
    let mut report = WorkerReport {
        completed: 0,
        sim_failures: 0,
        error: None,
    };

    while let Some(idx) = counters.claim_job() {
        let job = &jobs[idx as usize];
        let artifact = config
            .outputs_dir
            .join(artifact_file_name(&job.trace.name, &job.params));

        match run_simulation(&config.simulator, &job.trace.path, &job.params, &artifact) {
            Ok(RunStatus::Completed) => {
                debug!("Completed {} [{}]", job.trace.name, job.params);
            }
            Ok(RunStatus::Failed) => {
                counters.record_sim_failure();
                report.sim_failures += 1;
                warn!(
                    "Simulator exited non-zero for {} [{}]; artifact kept for inspection",
                    job.trace.name, job.params
                );
            }
            Err(err) => {
                // Cannot launch the simulator at all; stop claiming work
                report.error = Some(err);
                break;
            }
        }
        report.completed += 1;
        counters.record_finished();
    }

    report
}

fn report_progress(counters: &SweepCounters) {
    let pb = ProgressBar::new(counters.total());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let mut last_finished = 0u64;
    let mut last_time = start;

    while !counters.is_shutdown() {
        let finished = counters.finished();
        pb.set_position(finished);

        let now = Instant::now();
        let interval = now.duration_since(last_time).as_secs_f64();
        if interval >= 0.5 {
            let rate = (finished - last_finished) as f64 / interval;
            pb.set_message(format!("{:.1} runs/s", rate));
            last_finished = finished;
            last_time = now;
        }

        if finished >= counters.total() {
            break;
        }

        thread::sleep(Duration::from_millis(100));
    }

    pb.finish_with_message("done");
}
