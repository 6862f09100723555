//! Crossgrid - combinatorial test-execution engine
//!
//! Crossgrid takes two declaration lists, use cases and business objects,
//! expands their cartesian product into test cases, runs every case through
//! a create/execute/remove lifecycle, and validates each executed result
//! against a pre-seeded grid of expected results. Failures of any kind stay
//! scoped to their own case; the run always finishes.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use crossgrid::{
//!     FnBusinessObjectFactory, FnUseCaseFactory, GridKey, GridMissPolicy,
//!     MetaResult, Report, ResultGrid, RunnerConfig, SuiteRunner,
//! };
//!
//! // Seed the expected result for one (use case, business object) pair
//! let grid = Arc::new(ResultGrid::new());
//! grid.seed(
//!     GridKey::new("CreateOrder", "Customer"),
//!     MetaResult::new().with("status", "OK"),
//! )?;
//!
//! // Declare participants and run every pairing
//! let runner = SuiteRunner::new(
//!     vec![Arc::new(FnUseCaseFactory::new("CreateOrder", make_create_order))],
//!     vec![Arc::new(FnBusinessObjectFactory::new("Customer", make_customer))],
//!     grid,
//!     Arc::new(Report::new()),
//!     RunnerConfig::new(GridMissPolicy::AutoFail),
//! );
//! let outcomes = runner.run_all();
//! ```
//!
//! # Architecture
//!
//! The [`crossgrid_core`] crate defines the capability types: participants,
//! factories, results, identities, and failure classes. The
//! [`crossgrid_engine`] crate supplies the pipeline built on them: the
//! cartesian [`combo`](crossgrid_engine::combo) expansion, the per-case
//! [`executor`](crossgrid_engine::executor), the expected-result
//! [`grid`](crossgrid_engine::grid), the [`comparator`](crossgrid_engine::comparator),
//! the append-only [`report`](crossgrid_engine::report), and the
//! [`runner`](crossgrid_engine::runner) that ties them together.

// Re-export the public API from the member crates
pub use crossgrid_core::*;
pub use crossgrid_engine::*;
