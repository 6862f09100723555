//! Pass/fail classification of executed results against the grid
//!
//! Validation order is fixed:
//! 1. A result wrapping a failure fails unconditionally; its correctness
//!    predicate is never consulted
//! 2. Otherwise the expectation is resolved by type pair; a miss is handled
//!    by the configured [`GridMissPolicy`], never silently
//! 3. Otherwise the result's own `is_correct` decides against the recorded
//!    metadata
//!
//! Every validation writes exactly one report entry, pass or fail.

use std::sync::Arc;

use tracing::{debug, warn};

use crossgrid_core::error::{Error, Result};
use crossgrid_core::result::{CaseResult, MetaResult};
use crossgrid_core::types::{CaseId, Outcome};

use crate::grid::ResultGrid;
use crate::report::{Report, ReportEntry};

/// What to do when a case has no seeded expectation.
///
/// There is no default on purpose: hosts must choose, so a missing entry is
/// never absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMissPolicy {
    /// Fail the case with [`Error::GridMiss`]
    AutoFail,
    /// Record the actual result's metadata as the expectation, then pass.
    /// Useful for capturing a baseline on the first run of a new pairing.
    AutoSeed,
}

/// Comparator resolving expectations and classifying executed results.
///
/// The grid and report are injected at construction; the comparator owns no
/// storage of its own.
pub struct ResultComparator {
    grid: Arc<ResultGrid>,
    report: Arc<Report>,
    grid_miss: GridMissPolicy,
}

impl ResultComparator {
    /// Create a comparator over a grid and report with an explicit grid-miss
    /// policy
    pub fn new(grid: Arc<ResultGrid>, report: Arc<Report>, grid_miss: GridMissPolicy) -> Self {
        Self {
            grid,
            report,
            grid_miss,
        }
    }

    /// Validate an executed result against its recorded expectation.
    ///
    /// Writes exactly one report entry, then returns the verdict.
    ///
    /// # Errors
    ///
    /// Returns the failure cause on a failing verdict: [`Error::Execution`]
    /// for a wrapped failure, [`Error::GridMiss`] under the auto-fail
    /// policy, or [`Error::Validation`] on a metadata mismatch. This is the
    /// signal the runner surfaces to its observer.
    pub fn validate(&self, actual: &dyn CaseResult, case: &CaseId) -> Result<()> {
        let verdict = self.classify(actual, case);
        match &verdict {
            Ok(()) => {
                self.report
                    .accumulate(ReportEntry::new(case.clone(), Outcome::Pass, None));
                debug!(target: "crossgrid::validate", case = %case, "Case passed");
            }
            Err(cause) => {
                self.report.accumulate(ReportEntry::new(
                    case.clone(),
                    Outcome::Fail,
                    Some(cause.clone()),
                ));
                warn!(target: "crossgrid::validate", case = %case, cause = %cause, "Case failed");
            }
        }
        verdict
    }

    fn classify(&self, actual: &dyn CaseResult, case: &CaseId) -> Result<()> {
        // Wrapped failures fail unconditionally; the predicate is not consulted
        if let Some(failure) = actual.failure() {
            return Err(Error::Execution {
                reason: format!("{failure:#}"),
            });
        }

        let key = case.grid_key();
        match self.grid.lookup(&key) {
            Some(expected) => {
                let expected_metas = expected.metas();
                if actual.is_correct(&expected_metas) {
                    Ok(())
                } else {
                    Err(Error::Validation {
                        case: case.label(),
                        reason: format!(
                            "actual metas {:?} did not satisfy recorded metas {:?}",
                            actual.metas(),
                            expected_metas
                        ),
                    })
                }
            }
            None => match self.grid_miss {
                GridMissPolicy::AutoFail => Err(Error::GridMiss {
                    usecase: key.usecase,
                    business_object: key.business_object,
                }),
                GridMissPolicy::AutoSeed => {
                    // First sighting becomes the recorded expectation
                    debug!(target: "crossgrid::validate", case = %case, "Seeding expectation from first sighting");
                    self.grid
                        .seed(key, MetaResult::from_metas(actual.metas()))?;
                    Ok(())
                }
            },
        }
    }
}
