//! Background execution of a forecast run.
//!
//! Training dominates pipeline latency, so a hosting UI submits a run
//! without blocking and polls a busy flag meanwhile. A run cannot be
//! cancelled once started; if a cancellation token is ever needed it
//! belongs here. At most one active run is assumed — concurrent
//! submissions are not arbitrated.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::error::{PipelineError, Result};
use crate::ingest::RawRow;
use crate::pipeline::{run_pipeline, ForecastRun, PipelineOptions};

/// Handle to an in-flight forecast run.
pub struct RunHandle {
    busy: Arc<AtomicBool>,
    thread: JoinHandle<Result<ForecastRun>>,
}

impl RunHandle {
    /// Whether the run is still executing.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Block until the run completes and return its outcome.
    pub fn wait(self) -> Result<ForecastRun> {
        self.thread
            .join()
            .map_err(|_| PipelineError::ComputationError("forecast run panicked".into()))?
    }
}

/// Submit a forecast run on a background thread.
///
/// The returned handle owns the only completion signal. The busy flag is
/// cleared when the pipeline finishes, whether it succeeded or failed.
pub fn spawn_run(rows: Vec<RawRow>, options: PipelineOptions) -> RunHandle {
    let busy = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&busy);
    let thread = thread::spawn(move || {
        let outcome = run_pipeline(&rows, &options);
        flag.store(false, Ordering::SeqCst);
        outcome
    });

    RunHandle { busy, thread }
}
