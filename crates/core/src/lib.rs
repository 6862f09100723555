//! Core types and traits for crossgrid
//!
//! This crate defines the foundational types used throughout the system:
//! - CaseId / GridKey: Identity of generated cases and of grid entries
//! - Outcome: Pass/fail verdict for one executed case
//! - CaseResult: Self-describing result capability, with the shipped
//!   MetaResult, ValueResult, and ThrowableResult implementations
//! - UseCase / BusinessObject: The participants of a test case
//! - UseCaseFactory / BusinessObjectFactory: Per-case construction handles
//! - RunObserver: Incremental notification toward the host adapter
//! - Error: Case-scoped failure classes

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use result::{panic_message, CaseResult, MetaMap, MetaResult, ThrowableResult, ValueResult};
pub use traits::{
    BusinessObject, BusinessObjectFactory, FnBusinessObjectFactory, FnUseCaseFactory, RunObserver,
    UseCase, UseCaseFactory,
};
pub use types::{CaseId, GridKey, Outcome};
