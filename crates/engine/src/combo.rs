//! Cartesian combination of declared factories into test cases
//!
//! Ordering is row-major over the declaration lists: outer loop over use
//! cases, inner loop over business objects, ordinals assigned `1..=m*n` in
//! traversal order. Nothing is deduplicated: declaring the same factory
//! twice yields twice the cases.

use std::fmt;
use std::sync::Arc;

use crossgrid_core::traits::{BusinessObjectFactory, UseCaseFactory};
use crossgrid_core::types::CaseId;

/// One generated pairing: a stable identity plus the factory handles the
/// executor consumes.
///
/// The identity is what travels into grid keys, report entries, and observer
/// callbacks; the factory handles never leave the engine.
#[derive(Clone)]
pub struct TestCase {
    /// Stable identity: type names plus generation ordinal
    pub id: CaseId,
    /// Builds the use-case instance for this case
    pub usecase: Arc<dyn UseCaseFactory>,
    /// Builds the business-object instance for this case
    pub business_object: Arc<dyn BusinessObjectFactory>,
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Expand the declaration lists into the ordered case sequence.
///
/// An empty list on either side yields an empty sequence, not an error: a
/// suite with nothing to cross simply runs zero cases.
pub fn cartesian(
    usecases: &[Arc<dyn UseCaseFactory>],
    business_objects: &[Arc<dyn BusinessObjectFactory>],
) -> Vec<TestCase> {
    let mut cases = Vec::with_capacity(usecases.len() * business_objects.len());
    let mut ordinal: u32 = 0;
    for usecase in usecases {
        for business_object in business_objects {
            ordinal += 1;
            cases.push(TestCase {
                id: CaseId::new(usecase.type_name(), business_object.type_name(), ordinal),
                usecase: Arc::clone(usecase),
                business_object: Arc::clone(business_object),
            });
        }
    }
    cases
}
