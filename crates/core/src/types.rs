//! Identity types for crossgrid test cases
//!
//! This module defines the foundational types:
//! - CaseId: Identity of one generated test case (type pair + ordinal)
//! - GridKey: Ordinal-free type pair indexing expected results
//! - Outcome: Pass/fail verdict for one executed case

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a single test case
///
/// A CaseId names one (use case × business object) pairing together with the
/// 1-based ordinal assigned in generation order. Ordinals are unique and
/// dense across a run; the type pair alone is not unique when the same
/// participant is declared more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId {
    /// Declared name of the use case
    pub usecase: String,
    /// Declared name of the business object
    pub business_object: String,
    /// 1-based position in generation order
    pub ordinal: u32,
}

impl CaseId {
    /// Create a new case identity
    pub fn new(usecase: impl Into<String>, business_object: impl Into<String>, ordinal: u32) -> Self {
        Self {
            usecase: usecase.into(),
            business_object: business_object.into(),
            ordinal,
        }
    }

    /// Human-readable label in the form `"<usecase> : <businessObject> <ordinal>"`
    ///
    /// This is the display identity hosts show for the case; two cases over
    /// the same type pair differ only in the trailing ordinal.
    pub fn label(&self) -> String {
        format!("{} : {} {}", self.usecase, self.business_object, self.ordinal)
    }

    /// The ordinal-free type pair indexing this case's expected result
    pub fn grid_key(&self) -> GridKey {
        GridKey::new(self.usecase.clone(), self.business_object.clone())
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} {}",
            self.usecase, self.business_object, self.ordinal
        )
    }
}

/// Expected-result index: the (use case, business object) type pair
///
/// Expected results are keyed by type pair rather than by ordinal, so a
/// seeded expectation survives reruns and repeated declarations of the same
/// participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridKey {
    /// Declared name of the use case
    pub usecase: String,
    /// Declared name of the business object
    pub business_object: String,
}

impl GridKey {
    /// Create a new grid key
    pub fn new(usecase: impl Into<String>, business_object: impl Into<String>) -> Self {
        Self {
            usecase: usecase.into(),
            business_object: business_object.into(),
        }
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.usecase, self.business_object)
    }
}

/// Verdict for one executed test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The executed result matched its recorded expectation
    Pass,
    /// Validation failed, or the case wrapped an execution failure
    Fail,
}

impl Outcome {
    /// Whether this is a passing verdict
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    /// Whether this is a failing verdict
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "pass"),
            Outcome::Fail => write!(f, "fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_label_format() {
        let id = CaseId::new("CreateOrder", "Customer", 7);
        assert_eq!(id.label(), "CreateOrder : Customer 7");
        assert_eq!(id.to_string(), id.label());
    }

    #[test]
    fn test_grid_key_drops_ordinal() {
        let first = CaseId::new("CreateOrder", "Customer", 1);
        let third = CaseId::new("CreateOrder", "Customer", 3);
        assert_ne!(first, third);
        assert_eq!(first.grid_key(), third.grid_key());
    }

    #[test]
    fn test_grid_key_display() {
        let key = GridKey::new("CancelOrder", "GuestCustomer");
        assert_eq!(key.to_string(), "CancelOrder : GuestCustomer");
    }

    #[test]
    fn test_grid_key_ordering() {
        let mut keys = vec![
            GridKey::new("B", "Y"),
            GridKey::new("A", "Z"),
            GridKey::new("A", "X"),
        ];
        keys.sort();
        assert_eq!(keys[0], GridKey::new("A", "X"));
        assert_eq!(keys[1], GridKey::new("A", "Z"));
        assert_eq!(keys[2], GridKey::new("B", "Y"));
    }

    #[test]
    fn test_case_id_serde_round_trip() {
        let id = CaseId::new("CreateOrder", "Customer", 2);
        let json = serde_json::to_string(&id).unwrap();
        let back: CaseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(Outcome::Pass.is_pass());
        assert!(!Outcome::Pass.is_fail());
        assert!(Outcome::Fail.is_fail());
        assert_eq!(Outcome::Pass.to_string(), "pass");
        assert_eq!(Outcome::Fail.to_string(), "fail");
    }

    #[test]
    fn test_outcome_serde_round_trip() {
        let json = serde_json::to_string(&Outcome::Fail).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Fail);
    }
}
