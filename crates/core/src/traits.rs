//! Capability traits at the engine's seams
//!
//! This module defines the contracts a host implements to plug its domain
//! into the pipeline:
//! - UseCase / BusinessObject: the participants of one test case
//! - UseCaseFactory / BusinessObjectFactory: per-case construction handles
//! - RunObserver: incremental pass/fail notification toward the host
//!
//! Participants are trait objects built fresh for every test case. Hook
//! errors are `anyhow::Error` so domain code can fail with anything; the
//! engine flattens them into its structured failure classes at each step
//! boundary.

use std::any::Any;

use crate::error::Error;
use crate::result::CaseResult;
use crate::types::CaseId;

/// A testable operation, exercised once per generated test case.
///
/// A fresh instance is built for every case, so implementations may hold
/// per-case state freely; they are never reused.
pub trait UseCase: Send {
    /// Execute the operation against a business object.
    ///
    /// The engine runs this inside a failure boundary: an `Err` return or a
    /// panic never aborts the run, it becomes a throwable result that fails
    /// validation with the raised cause.
    ///
    /// # Errors
    ///
    /// Returns an error when the operation under test fails.
    fn execute(
        &mut self,
        business_object: &mut dyn BusinessObject,
    ) -> anyhow::Result<Box<dyn CaseResult>>;
}

/// A domain entity under test, with lifecycle hooks bracketing execution.
///
/// The hooks own their external side effects (seeding records, tearing them
/// down); the engine only sequences them around `UseCase::execute`.
pub trait BusinessObject: Send {
    /// Establish external preconditions for one test case.
    ///
    /// If this fails, the case aborts and `remove` is NOT invoked: cleanup
    /// of partially established state is this hook's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error when preconditions cannot be established.
    fn create(&mut self) -> anyhow::Result<()>;

    /// Tear down whatever `create` established.
    ///
    /// Invoked exactly once for every case whose `create` succeeded, whether
    /// execution produced a domain or a throwable result.
    ///
    /// # Errors
    ///
    /// Returns an error when teardown fails; the case then fails without
    /// reaching the comparator.
    fn remove(&mut self) -> anyhow::Result<()>;

    /// Concrete-type access for use cases that need a specific entity.
    ///
    /// Typical use inside `UseCase::execute`:
    ///
    /// ```ignore
    /// let customer = business_object
    ///     .as_any_mut()
    ///     .downcast_mut::<Customer>()
    ///     .ok_or_else(|| anyhow::anyhow!("expected a Customer"))?;
    /// ```
    fn as_any(&self) -> &dyn Any;

    /// Mutable concrete-type access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Construction handle for a declared use-case type.
///
/// Declaration lists carry these handles instead of type names resolved at
/// runtime; the executor builds one fresh instance per test case.
pub trait UseCaseFactory: Send + Sync {
    /// Declared name, used in case identities and grid keys
    fn type_name(&self) -> &str;

    /// Build a fresh instance for a single test case.
    ///
    /// # Errors
    ///
    /// Returns an error when the instance cannot be built; the case then
    /// fails as a construction failure and the run continues.
    fn create_instance(&self) -> anyhow::Result<Box<dyn UseCase>>;
}

/// Construction handle for a declared business-object type.
pub trait BusinessObjectFactory: Send + Sync {
    /// Declared name, used in case identities and grid keys
    fn type_name(&self) -> &str;

    /// Build a fresh instance for a single test case.
    ///
    /// # Errors
    ///
    /// Returns an error when the instance cannot be built.
    fn create_instance(&self) -> anyhow::Result<Box<dyn BusinessObject>>;
}

/// Use-case factory wrapping a plain closure.
///
/// # Example
///
/// ```ignore
/// let factory = FnUseCaseFactory::new("CreateOrder", || {
///     Ok(Box::new(CreateOrder::default()) as Box<dyn UseCase>)
/// });
/// ```
pub struct FnUseCaseFactory {
    name: String,
    build: Box<dyn Fn() -> anyhow::Result<Box<dyn UseCase>> + Send + Sync>,
}

impl FnUseCaseFactory {
    /// Wrap a closure as a named use-case factory
    pub fn new<F>(name: impl Into<String>, build: F) -> Self
    where
        F: Fn() -> anyhow::Result<Box<dyn UseCase>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Box::new(build),
        }
    }
}

impl UseCaseFactory for FnUseCaseFactory {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn create_instance(&self) -> anyhow::Result<Box<dyn UseCase>> {
        (self.build)()
    }
}

/// Business-object factory wrapping a plain closure.
pub struct FnBusinessObjectFactory {
    name: String,
    build: Box<dyn Fn() -> anyhow::Result<Box<dyn BusinessObject>> + Send + Sync>,
}

impl FnBusinessObjectFactory {
    /// Wrap a closure as a named business-object factory
    pub fn new<F>(name: impl Into<String>, build: F) -> Self
    where
        F: Fn() -> anyhow::Result<Box<dyn BusinessObject>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            build: Box::new(build),
        }
    }
}

impl BusinessObjectFactory for FnBusinessObjectFactory {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn create_instance(&self) -> anyhow::Result<Box<dyn BusinessObject>> {
        (self.build)()
    }
}

/// Incremental notification surface toward the host adapter.
///
/// Callbacks fire per test case, in generation order: `case_started`, then
/// exactly one of `case_passed` / `case_failed`. Default bodies are no-ops
/// so hosts override only what they consume.
pub trait RunObserver {
    /// A case is about to run
    fn case_started(&mut self, _case: &CaseId) {}

    /// The case's result matched its recorded expectation
    fn case_passed(&mut self, _case: &CaseId) {}

    /// The case failed; `cause` classifies the failure
    fn case_failed(&mut self, _case: &CaseId, _cause: &Error) {}
}
