//! Append-only accumulation of per-case outcomes
//!
//! The report records one entry per validated case, in execution order, with
//! the order index assigned at append time. Nothing is deduplicated and
//! nothing is dropped: reruns of the same identity stack up as separate
//! entries. Hosts consume the entries during or after a run.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crossgrid_core::error::Error;
use crossgrid_core::types::{CaseId, Outcome};

/// One accumulated outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Identity of the validated case
    pub case: CaseId,
    /// Pass/fail verdict
    pub outcome: Outcome,
    /// Failure cause, absent on pass
    pub cause: Option<Error>,
    /// Zero-based append index, assigned by the report
    pub index: u64,
    /// When the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl ReportEntry {
    /// Build an entry; the report assigns `index` on accumulation
    pub fn new(case: CaseId, outcome: Outcome, cause: Option<Error>) -> Self {
        Self {
            case,
            outcome,
            cause,
            index: 0,
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only, insertion-ordered outcome log.
///
/// # Thread Safety
///
/// All methods are safe to call concurrently; entries live behind a
/// read/write lock and are shared through `Arc<Report>`.
#[derive(Default)]
pub struct Report {
    entries: RwLock<Vec<ReportEntry>>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry, assigning its order index. Never deduplicates.
    pub fn accumulate(&self, mut entry: ReportEntry) {
        let mut entries = self.entries.write();
        entry.index = entries.len() as u64;
        entries.push(entry);
    }

    /// All entries in insertion order
    pub fn list_all(&self) -> Vec<ReportEntry> {
        self.entries.read().clone()
    }

    /// First entry recorded for an identity, if any.
    ///
    /// With reruns the same identity can appear more than once; this returns
    /// the earliest entry and [`list_all`](Report::list_all) exposes the rest.
    pub fn find(&self, case: &CaseId) -> Option<ReportEntry> {
        self.entries.read().iter().find(|e| &e.case == case).cloned()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the report is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of passing entries
    pub fn passed(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|e| e.outcome.is_pass())
            .count()
    }

    /// Number of failing entries
    pub fn failed(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|e| e.outcome.is_fail())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(ordinal: u32) -> CaseId {
        CaseId::new("CreateOrder", "Customer", ordinal)
    }

    fn pass_entry(ordinal: u32) -> ReportEntry {
        ReportEntry::new(case(ordinal), Outcome::Pass, None)
    }

    fn fail_entry(ordinal: u32) -> ReportEntry {
        ReportEntry::new(
            case(ordinal),
            Outcome::Fail,
            Some(Error::Validation {
                case: case(ordinal).label(),
                reason: "mismatch".to_string(),
            }),
        )
    }

    #[test]
    fn test_insertion_order_preserved() {
        let report = Report::new();
        report.accumulate(pass_entry(1));
        report.accumulate(fail_entry(2));
        report.accumulate(pass_entry(3));

        let entries = report.list_all();
        let ordinals: Vec<u32> = entries.iter().map(|e| e.case.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
    }

    #[test]
    fn test_index_assigned_at_append() {
        let report = Report::new();
        // Caller-supplied index is overwritten by append position
        let mut entry = pass_entry(1);
        entry.index = 99;
        report.accumulate(entry);
        report.accumulate(pass_entry(2));

        let entries = report.list_all();
        assert_eq!(entries[0].index, 0);
        assert_eq!(entries[1].index, 1);
    }

    #[test]
    fn test_duplicate_identities_stack_up() {
        let report = Report::new();
        report.accumulate(pass_entry(1));
        report.accumulate(fail_entry(1));

        assert_eq!(report.len(), 2);
        // find returns the earliest entry for the identity
        let found = report.find(&case(1)).unwrap();
        assert_eq!(found.outcome, Outcome::Pass);
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_find_missing_identity() {
        let report = Report::new();
        report.accumulate(pass_entry(1));
        assert!(report.find(&case(2)).is_none());
    }

    #[test]
    fn test_pass_fail_counts() {
        let report = Report::new();
        assert!(report.is_empty());

        report.accumulate(pass_entry(1));
        report.accumulate(fail_entry(2));
        report.accumulate(fail_entry(3));

        assert_eq!(report.len(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = fail_entry(4);
        let json = serde_json::to_string(&entry).unwrap();
        let back: ReportEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn test_report_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Report>();
    }
}
