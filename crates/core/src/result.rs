//! Result capability for executed test cases
//!
//! A result is self-describing: it exposes a string-to-string metadata map
//! and decides for itself whether it matches a previously recorded map. That
//! keeps correctness pluggable: one implementation compares every field,
//! another compares a subset, and the comparator never needs to know which.
//!
//! Three implementations ship with the engine:
//! - [`MetaResult`]: map-backed, correct iff the full map matches
//! - [`ValueResult`]: wraps one scalar, compares only the `"value"` meta
//! - [`ThrowableResult`]: wraps a captured failure, never correct

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata describing a test-case result.
///
/// A `BTreeMap` keeps iteration deterministic, which keeps failure messages
/// and serialized expectations stable across runs.
pub type MetaMap = BTreeMap<String, String>;

/// Meta key used by [`ValueResult`] for its wrapped scalar.
pub const VALUE_META: &str = "value";

/// Self-describing outcome of executing a use case against a business object.
///
/// Implementations own their comparison semantics: [`is_correct`] receives
/// the previously recorded metadata and may consult all of it, part of it,
/// or anything derivable from it.
///
/// [`is_correct`]: CaseResult::is_correct
pub trait CaseResult: fmt::Debug + Send + Sync {
    /// Metadata describing this result
    fn metas(&self) -> MetaMap;

    /// Whether this result matches a previously recorded metadata map
    fn is_correct(&self, previous: &MetaMap) -> bool;

    /// The captured failure, when this result wraps one instead of a domain
    /// outcome.
    ///
    /// The comparator fails such results unconditionally, without consulting
    /// [`is_correct`](CaseResult::is_correct). Domain results keep the
    /// default `None`.
    fn failure(&self) -> Option<&anyhow::Error> {
        None
    }
}

/// Map-backed result that is correct iff the full metadata map matches.
///
/// This is also the snapshot type the comparator seeds under the auto-seed
/// policy: whatever metas the first sighting produced become the recorded
/// expectation.
///
/// # Example
///
/// ```
/// use crossgrid_core::result::MetaResult;
///
/// let result = MetaResult::new()
///     .with("status", "OK")
///     .with("items", "3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaResult {
    metas: MetaMap,
}

impl MetaResult {
    /// Create a result with no metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a result from an existing metadata map
    pub fn from_metas(metas: MetaMap) -> Self {
        Self { metas }
    }

    /// Add one metadata entry, builder style
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metas.insert(key.into(), value.into());
        self
    }
}

impl CaseResult for MetaResult {
    fn metas(&self) -> MetaMap {
        self.metas.clone()
    }

    fn is_correct(&self, previous: &MetaMap) -> bool {
        self.metas == *previous
    }
}

/// Single-value result comparing only the [`VALUE_META`] entry.
///
/// Demonstrates subset comparison: extra keys in the recorded expectation
/// are ignored, only the scalar has to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueResult {
    value: String,
}

impl ValueResult {
    /// Wrap a single scalar value
    pub fn new(value: impl ToString) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// The wrapped value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl CaseResult for ValueResult {
    fn metas(&self) -> MetaMap {
        let mut metas = MetaMap::new();
        metas.insert(VALUE_META.to_string(), self.value.clone());
        metas
    }

    fn is_correct(&self, previous: &MetaMap) -> bool {
        previous.get(VALUE_META).map_or(false, |v| v == &self.value)
    }
}

/// Result wrapping a failure captured inside `UseCase::execute`.
///
/// Produced by the executor when `execute` returns an error or panics. It
/// carries no metadata and is never correct: validating a throwable result
/// is an unconditional fail with the wrapped cause.
#[derive(Debug)]
pub struct ThrowableResult {
    cause: anyhow::Error,
}

impl ThrowableResult {
    /// Wrap a captured error
    pub fn new(cause: anyhow::Error) -> Self {
        Self { cause }
    }

    /// Wrap a panic payload, extracting the message when it is a string
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Self {
            cause: anyhow::anyhow!("panicked: {}", panic_message(payload.as_ref())),
        }
    }

    /// The wrapped cause
    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

impl CaseResult for ThrowableResult {
    fn metas(&self) -> MetaMap {
        // A wrapped failure has no domain outcome to describe
        MetaMap::new()
    }

    fn is_correct(&self, _previous: &MetaMap) -> bool {
        false
    }

    fn failure(&self) -> Option<&anyhow::Error> {
        Some(&self.cause)
    }
}

/// Extract a printable message from a panic payload.
///
/// Panic payloads are usually `&str` or `String`; anything else gets a
/// placeholder so the caller still has something to log.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "(non-string panic)".to_string()
    }
}
