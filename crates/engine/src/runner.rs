//! Run orchestration: combine, execute, validate, accumulate
//!
//! The runner expands the declared factories into the ordered case sequence
//! and drives each case through the executor and comparator. Failures stay
//! case-scoped: the sequence always runs to the end.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crossgrid_core::traits::{BusinessObjectFactory, RunObserver, UseCaseFactory};
use crossgrid_core::types::{CaseId, Outcome};

use crate::combo::{cartesian, TestCase};
use crate::comparator::{GridMissPolicy, ResultComparator};
use crate::executor::CaseExecutor;
use crate::grid::ResultGrid;
use crate::report::Report;

/// Execution settings for a run.
///
/// There is no `Default`: the grid-miss policy must be chosen explicitly.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    grid_miss: GridMissPolicy,
    case_timeout: Option<Duration>,
}

impl RunnerConfig {
    /// Config with the mandatory grid-miss policy and no deadline
    pub fn new(grid_miss: GridMissPolicy) -> Self {
        Self {
            grid_miss,
            case_timeout: None,
        }
    }

    /// Enforce a per-case wall-clock deadline, builder style
    pub fn with_case_timeout(mut self, timeout: Duration) -> Self {
        self.case_timeout = Some(timeout);
        self
    }

    /// The configured grid-miss policy
    pub fn grid_miss(&self) -> GridMissPolicy {
        self.grid_miss
    }

    /// The configured per-case deadline, if any
    pub fn case_timeout(&self) -> Option<Duration> {
        self.case_timeout
    }
}

/// Suite orchestrator over declared factories and an injected grid/report.
///
/// All collaborators arrive through the constructor; the runner reaches for
/// no ambient state.
pub struct SuiteRunner {
    usecases: Vec<Arc<dyn UseCaseFactory>>,
    business_objects: Vec<Arc<dyn BusinessObjectFactory>>,
    executor: CaseExecutor,
    comparator: ResultComparator,
    report: Arc<Report>,
}

impl SuiteRunner {
    /// Build a runner for the declared participants
    pub fn new(
        usecases: Vec<Arc<dyn UseCaseFactory>>,
        business_objects: Vec<Arc<dyn BusinessObjectFactory>>,
        grid: Arc<ResultGrid>,
        report: Arc<Report>,
        config: RunnerConfig,
    ) -> Self {
        let executor = match config.case_timeout {
            Some(limit) => CaseExecutor::with_timeout(limit),
            None => CaseExecutor::new(),
        };
        let comparator = ResultComparator::new(grid, Arc::clone(&report), config.grid_miss);
        Self {
            usecases,
            business_objects,
            executor,
            comparator,
            report,
        }
    }

    /// The injected report
    pub fn report(&self) -> &Arc<Report> {
        &self.report
    }

    /// The generated case sequence, without running it.
    ///
    /// Host adapters use this to enumerate children up front and then run
    /// them one at a time with [`run_case`](SuiteRunner::run_case).
    pub fn cases(&self) -> Vec<TestCase> {
        cartesian(&self.usecases, &self.business_objects)
    }

    /// Run one case and return its verdict
    pub fn run_case(&self, case: &TestCase) -> Outcome {
        self.drive_case(case, &mut SilentObserver)
    }

    /// Run every generated case in order, returning identity and verdict
    /// pairs
    pub fn run_all(&self) -> Vec<(CaseId, Outcome)> {
        self.run_with_observer(&mut SilentObserver)
    }

    /// Run every generated case in order, notifying the observer as each
    /// case starts and settles
    pub fn run_with_observer(&self, observer: &mut dyn RunObserver) -> Vec<(CaseId, Outcome)> {
        let cases = self.cases();
        info!(target: "crossgrid::run", cases = cases.len(), "Run started");

        let mut outcomes = Vec::with_capacity(cases.len());
        for case in &cases {
            let outcome = self.drive_case(case, observer);
            outcomes.push((case.id.clone(), outcome));
        }

        let failed = outcomes.iter().filter(|(_, o)| o.is_fail()).count();
        info!(
            target: "crossgrid::run",
            cases = outcomes.len(),
            passed = outcomes.len() - failed,
            failed,
            "Run finished"
        );
        outcomes
    }

    fn drive_case(&self, case: &TestCase, observer: &mut dyn RunObserver) -> Outcome {
        observer.case_started(&case.id);
        match self.executor.run_case(case) {
            Ok(result) => match self.comparator.validate(result.as_ref(), &case.id) {
                Ok(()) => {
                    observer.case_passed(&case.id);
                    Outcome::Pass
                }
                Err(cause) => {
                    observer.case_failed(&case.id, &cause);
                    Outcome::Fail
                }
            },
            Err(infrastructure) => {
                // No result reached the comparator, so no report entry exists
                // for this case; the verdict and cause still surface here
                warn!(
                    target: "crossgrid::run",
                    case = %case.id,
                    cause = %infrastructure,
                    "Infrastructure failure"
                );
                observer.case_failed(&case.id, &infrastructure);
                Outcome::Fail
            }
        }
    }
}

/// Observer discarding every notification
struct SilentObserver;

impl RunObserver for SilentObserver {}
