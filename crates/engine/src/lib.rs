//! Combination, execution, and validation pipeline for crossgrid
//!
//! This crate orchestrates the core capability types into runnable suites:
//! - combo: Ordered cartesian expansion of the declared factories
//! - executor: Per-case lifecycle with failure isolation
//! - grid: Expected results, seeded before a run
//! - comparator: Pass/fail classification against the grid
//! - report: Append-only outcome log
//! - runner: run_all / run_with_observer orchestration
//!
//! The pipeline is strictly case-scoped: any failure, in any phase of any
//! case, fails that case alone and the run continues.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod combo;
pub mod comparator;
pub mod executor;
pub mod grid;
pub mod report;
pub mod runner;

// Re-export commonly used types
pub use combo::{cartesian, TestCase};
pub use comparator::{GridMissPolicy, ResultComparator};
pub use executor::CaseExecutor;
pub use grid::ResultGrid;
pub use report::{Report, ReportEntry};
pub use runner::{RunnerConfig, SuiteRunner};
