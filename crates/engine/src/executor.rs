//! Per-case execution: build participants, drive the lifecycle, isolate
//! failures
//!
//! One case runs in five steps: construct the use case, construct the
//! business object, `create`, `execute`, `remove`. Every step sits inside a
//! panic boundary, so defective domain code fails its own case and nothing
//! else. Only `execute` is non-fatal: its errors and panics become a
//! [`ThrowableResult`] that flows on to the comparator; failures in the
//! other steps abort the case before any result exists.
//!
//! A failed `create` skips `remove`: the hook owns cleanup of whatever
//! partial state it left behind.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crossgrid_core::error::{Error, Result};
use crossgrid_core::result::{panic_message, CaseResult, ThrowableResult};

use crate::combo::TestCase;

/// Stateless per-case executor.
///
/// Holds only its timeout configuration; all case state is built and
/// discarded inside [`run_case`](CaseExecutor::run_case), so one executor
/// serves an entire run.
#[derive(Debug, Clone, Default)]
pub struct CaseExecutor {
    case_timeout: Option<Duration>,
}

impl CaseExecutor {
    /// Executor with no deadline; every step runs on the calling thread
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor enforcing a per-case wall-clock deadline.
    ///
    /// The case body runs on a named worker thread. On expiry the case fails
    /// with [`Error::Timeout`] and the worker is detached to finish on its
    /// own: the lifecycle hooks are not interruptible, and a detached worker
    /// touches no shared state.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            case_timeout: Some(timeout),
        }
    }

    /// Run one case through its full lifecycle.
    ///
    /// Returns the executed result for comparison. Failures inside
    /// `execute` never surface here; they come back as an `Ok` carrying a
    /// [`ThrowableResult`].
    ///
    /// # Errors
    ///
    /// Returns an error when infrastructure around `execute` failed:
    /// construction, setup, teardown, or the deadline. Such cases produced
    /// no comparable result.
    pub fn run_case(&self, case: &TestCase) -> Result<Box<dyn CaseResult>> {
        debug!(target: "crossgrid::exec", case = %case.id, "Running case");
        match self.case_timeout {
            None => run_case_body(case),
            Some(limit) => run_case_with_deadline(case, limit),
        }
    }
}

fn run_case_with_deadline(case: &TestCase, limit: Duration) -> Result<Box<dyn CaseResult>> {
    let (tx, rx) = mpsc::channel();
    let worker_case = case.clone();
    // The worker only executes; validation and report writes stay on the
    // calling thread, so an abandoned worker cannot corrupt shared state.
    let spawned = thread::Builder::new()
        .name(format!("crossgrid-case-{}", case.id.ordinal))
        .spawn(move || {
            let _ = tx.send(run_case_body(&worker_case));
        });
    if spawned.is_err() {
        return Err(Error::Internal {
            reason: "failed to spawn case worker thread".to_string(),
        });
    }
    match rx.recv_timeout(limit) {
        Ok(outcome) => outcome,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(Error::Timeout {
            timeout_ms: limit.as_millis() as u64,
        }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(Error::Internal {
            reason: "case worker exited without a result".to_string(),
        }),
    }
}

/// One case, start to finish.
fn run_case_body(case: &TestCase) -> Result<Box<dyn CaseResult>> {
    let mut usecase = isolate(|| case.usecase.create_instance()).map_err(|cause| {
        Error::Construction {
            participant: case.id.usecase.clone(),
            reason: flatten(&cause),
        }
    })?;
    let mut business_object =
        isolate(|| case.business_object.create_instance()).map_err(|cause| {
            Error::Construction {
                participant: case.id.business_object.clone(),
                reason: flatten(&cause),
            }
        })?;

    // A failed create aborts the case without remove
    isolate(|| business_object.create()).map_err(|cause| Error::Setup {
        business_object: case.id.business_object.clone(),
        reason: flatten(&cause),
    })?;

    // The failure boundary: errors and panics raised here become a result
    let result: Box<dyn CaseResult> =
        match panic::catch_unwind(AssertUnwindSafe(|| usecase.execute(business_object.as_mut()))) {
            Ok(Ok(result)) => result,
            Ok(Err(error)) => Box::new(ThrowableResult::new(error)),
            Err(payload) => Box::new(ThrowableResult::from_panic(payload)),
        };

    // Unconditional teardown once execution ran, throwable or not
    isolate(|| business_object.remove()).map_err(|cause| Error::Teardown {
        business_object: case.id.business_object.clone(),
        reason: flatten(&cause),
    })?;

    Ok(result)
}

/// Run one step, converting a panic into an error like a returned `Err`.
///
/// `AssertUnwindSafe` is sound here: participants live for exactly one case,
/// so state poisoned by a caught panic never reaches another case.
fn isolate<T>(step: impl FnOnce() -> anyhow::Result<T>) -> anyhow::Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(anyhow::anyhow!(
            "panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

/// Flatten an error chain into one line for the structured failure classes.
fn flatten(error: &anyhow::Error) -> String {
    format!("{error:#}")
}
