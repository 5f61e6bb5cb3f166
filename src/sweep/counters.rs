//! Shared atomic counters for sweep worker threads
//!
//! The job counter is the only synchronization point between workers: each
//! worker claims the next job index until the list runs out. All other
//! state is thread-local.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Counters shared between all sweep workers and the progress thread
pub struct SweepCounters {
    /// Jobs claimed by workers
    jobs_claimed: AtomicU64,
    /// Jobs whose simulator invocation has finished (any exit status)
    jobs_finished: AtomicU64,
    /// Invocations that exited non-zero (artifact still retained)
    sim_failures: AtomicU64,
    /// Shutdown signal for the progress thread
    shutdown: AtomicBool,
    /// Total jobs in this sweep
    total_jobs: u64,
}

impl SweepCounters {
    pub fn new(total_jobs: u64) -> Self {
        Self {
            jobs_claimed: AtomicU64::new(0),
            jobs_finished: AtomicU64::new(0),
            sim_failures: AtomicU64::new(0),
            shutdown: AtomicBool::new(false),
            total_jobs,
        }
    }

    /// Claim the next job index, or None when the list is exhausted
    #[inline]
    pub fn claim_job(&self) -> Option<u64> {
        let idx = self.jobs_claimed.fetch_add(1, Ordering::Relaxed);
        if idx < self.total_jobs {
            Some(idx)
        } else {
            None
        }
    }

    #[inline]
    pub fn record_finished(&self) {
        self.jobs_finished.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_sim_failure(&self) {
        self.sim_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn finished(&self) -> u64 {
        self.jobs_finished.load(Ordering::Relaxed)
    }

    pub fn sim_failures(&self) -> u64 {
        self.sim_failures.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> u64 {
        self.total_jobs
    }

    /// Signal the progress thread to stop
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }
}
