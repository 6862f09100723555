//! Expected-result grid: the recorded expectations a run validates against
//!
//! Entries are keyed by (use case, business object) type pair, not by
//! ordinal, so an expectation survives reruns and repeated declarations of
//! the same participant. The grid is seeded before a run and read-only while
//! one executes; the one sanctioned write during a run is the comparator's
//! auto-seed policy.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crossgrid_core::error::{Error, Result};
use crossgrid_core::result::CaseResult;
use crossgrid_core::types::GridKey;

/// In-memory store of expected results, keyed by type pair.
///
/// # Thread Safety
///
/// All methods are safe to call concurrently; entries live behind a
/// read/write lock and are shared through `Arc<ResultGrid>`.
#[derive(Default)]
pub struct ResultGrid {
    entries: RwLock<HashMap<GridKey, Arc<dyn CaseResult>>>,
}

impl ResultGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the expected result for a type pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSeed`] if the pair already has an entry.
    /// A collision while seeding indicates a host bug, never a legitimate
    /// overwrite, so the first entry stays authoritative.
    pub fn seed(&self, key: GridKey, expected: impl CaseResult + 'static) -> Result<()> {
        self.seed_shared(key, Arc::new(expected))
    }

    /// Record an already-shared expected result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSeed`] if the pair already has an entry.
    pub fn seed_shared(&self, key: GridKey, expected: Arc<dyn CaseResult>) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return Err(Error::DuplicateSeed {
                usecase: key.usecase,
                business_object: key.business_object,
            });
        }
        entries.insert(key, expected);
        Ok(())
    }

    /// Look up the expected result for a type pair.
    ///
    /// `None` means no entry exists for the pair. The sentinel is explicit
    /// so callers decide what a miss means; the grid never conflates it with
    /// a seeded result.
    pub fn lookup(&self, key: &GridKey) -> Option<Arc<dyn CaseResult>> {
        self.entries.read().get(key).cloned()
    }

    /// Whether a type pair has a seeded expectation
    pub fn contains(&self, key: &GridKey) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Number of seeded entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the grid has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
