//! Error types for the crossgrid pipeline.
//!
//! All failures raised while combining, executing, and validating test cases
//! are represented by the [`Error`] enum. These errors are:
//! - **Case-scoped**: each one is attributable to a single test case and
//!   never aborts the remaining cases of a run
//! - **Structured**: each variant has typed fields for failure details
//! - **Serializable**: report entries carry them to the host as JSON
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.

use serde::{Deserialize, Serialize};

/// Result type alias for crossgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for the combine/execute/validate pipeline.
///
/// # Categories
///
/// | Category | Variants | Effect on the case |
/// |----------|----------|--------------------|
/// | Infrastructure | `Construction`, `Setup`, `Teardown`, `Timeout`, `Internal` | Fatal: the case aborts before comparison |
/// | Execution | `Execution` | Wrapped in a throwable result, validated as a fail |
/// | Validation | `Validation`, `GridMiss` | The fail verdicts themselves |
/// | Seeding | `DuplicateSeed` | Raised while seeding the grid, before any run |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Infrastructure ====================
    /// A factory failed to build a participant for a case
    #[error("construction failure for {participant}: {reason}")]
    Construction {
        /// Declared name of the participant that could not be built
        participant: String,
        /// Flattened cause reported by the factory
        reason: String,
    },

    /// `BusinessObject::create` failed while establishing preconditions.
    /// `remove` is not invoked in this path.
    #[error("setup failure for {business_object}: {reason}")]
    Setup {
        /// Declared name of the business object
        business_object: String,
        /// Flattened cause reported by `create`
        reason: String,
    },

    /// `BusinessObject::remove` failed while tearing down
    #[error("teardown failure for {business_object}: {reason}")]
    Teardown {
        /// Declared name of the business object
        business_object: String,
        /// Flattened cause reported by `remove`
        reason: String,
    },

    /// The per-case deadline expired before the case finished
    #[error("case timed out after {timeout_ms} ms")]
    Timeout {
        /// Configured deadline in milliseconds
        timeout_ms: u64,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong
        reason: String,
    },

    // ==================== Execution ====================
    /// `UseCase::execute` raised; the flattened cause of a throwable result
    #[error("execution failure: {reason}")]
    Execution {
        /// Flattened cause captured by the failure boundary
        reason: String,
    },

    // ==================== Validation ====================
    /// The executed result did not match the recorded expectation
    #[error("validation failure for {case}: {reason}")]
    Validation {
        /// Label of the failing case
        case: String,
        /// Why the result was rejected
        reason: String,
    },

    /// No expected result is seeded for the case's type pair
    #[error("no expected result for {usecase} : {business_object}")]
    GridMiss {
        /// Declared name of the use case
        usecase: String,
        /// Declared name of the business object
        business_object: String,
    },

    // ==================== Seeding ====================
    /// The same type pair was seeded into the grid twice
    #[error("duplicate grid entry for {usecase} : {business_object}")]
    DuplicateSeed {
        /// Declared name of the use case
        usecase: String,
        /// Declared name of the business object
        business_object: String,
    },
}

impl Error {
    /// Whether this failure aborts the case before the comparator runs.
    ///
    /// Infrastructure failures never produce a result, so no report entry is
    /// written for them; the run outcome and observer carry the verdict.
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Error::Construction { .. }
                | Error::Setup { .. }
                | Error::Teardown { .. }
                | Error::Timeout { .. }
                | Error::Internal { .. }
        )
    }
}
