//! Shared domain fixture for the integration test suites.
//!
//! Models a small order-management domain on top of an in-memory customer
//! directory: business objects seed and tear down directory records, use
//! cases read them through downcasts and produce metadata results.
//!
//! Import via `mod common;` from any test file.

#![allow(dead_code)]

use std::any::Any;
use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crossgrid::{
    BusinessObject, BusinessObjectFactory, CaseResult, FnBusinessObjectFactory, FnUseCaseFactory,
    GridKey, MetaResult, ResultGrid, UseCase, UseCaseFactory,
};

/// External system stand-in: the set of records currently present
pub type Directory = Arc<Mutex<HashSet<String>>>;

/// Fresh, empty directory
pub fn directory() -> Directory {
    Arc::new(Mutex::new(HashSet::new()))
}

// ============================================================================
// Business objects
// ============================================================================

/// A customer whose lifecycle hooks write through to the directory
pub struct Customer {
    pub name: String,
    directory: Directory,
}

impl Customer {
    /// Directory record key for this customer
    pub fn record(&self) -> String {
        format!("customer:{}", self.name)
    }
}

impl BusinessObject for Customer {
    fn create(&mut self) -> anyhow::Result<()> {
        self.directory.lock().insert(self.record());
        Ok(())
    }

    fn remove(&mut self) -> anyhow::Result<()> {
        self.directory.lock().remove(&self.record());
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Factory for customers carrying a fixed name, declared under `type_name`
pub fn customer_factory(
    type_name: &str,
    name: &'static str,
    directory: &Directory,
) -> Arc<dyn BusinessObjectFactory> {
    let directory = Arc::clone(directory);
    Arc::new(FnBusinessObjectFactory::new(type_name, move || {
        Ok(Box::new(Customer {
            name: name.to_string(),
            directory: Arc::clone(&directory),
        }) as Box<dyn BusinessObject>)
    }))
}

// ============================================================================
// Use cases
// ============================================================================

/// Places an order for the customer the case is bound to.
///
/// Checks that the customer's record is present, which proves `create` ran
/// before `execute`.
pub struct CreateOrder {
    directory: Directory,
}

impl UseCase for CreateOrder {
    fn execute(
        &mut self,
        business_object: &mut dyn BusinessObject,
    ) -> anyhow::Result<Box<dyn CaseResult>> {
        let customer = business_object
            .as_any_mut()
            .downcast_mut::<Customer>()
            .ok_or_else(|| anyhow::anyhow!("expected a Customer"))?;
        if !self.directory.lock().contains(&customer.record()) {
            anyhow::bail!("customer {} has no directory record", customer.name);
        }
        Ok(Box::new(
            MetaResult::new()
                .with("status", "OK")
                .with("customer", customer.name.clone()),
        ))
    }
}

/// Cancels an order for the bound customer
pub struct CancelOrder {
    directory: Directory,
}

impl UseCase for CancelOrder {
    fn execute(
        &mut self,
        business_object: &mut dyn BusinessObject,
    ) -> anyhow::Result<Box<dyn CaseResult>> {
        let customer = business_object
            .as_any_mut()
            .downcast_mut::<Customer>()
            .ok_or_else(|| anyhow::anyhow!("expected a Customer"))?;
        if !self.directory.lock().contains(&customer.record()) {
            anyhow::bail!("customer {} has no directory record", customer.name);
        }
        Ok(Box::new(
            MetaResult::new()
                .with("status", "CANCELLED")
                .with("customer", customer.name.clone()),
        ))
    }
}

/// Factory for [`CreateOrder`], declared as "CreateOrder"
pub fn create_order_factory(directory: &Directory) -> Arc<dyn UseCaseFactory> {
    let directory = Arc::clone(directory);
    Arc::new(FnUseCaseFactory::new("CreateOrder", move || {
        Ok(Box::new(CreateOrder {
            directory: Arc::clone(&directory),
        }) as Box<dyn UseCase>)
    }))
}

/// Factory for [`CancelOrder`], declared as "CancelOrder"
pub fn cancel_order_factory(directory: &Directory) -> Arc<dyn UseCaseFactory> {
    let directory = Arc::clone(directory);
    Arc::new(FnUseCaseFactory::new("CancelOrder", move || {
        Ok(Box::new(CancelOrder {
            directory: Arc::clone(&directory),
        }) as Box<dyn UseCase>)
    }))
}

// ============================================================================
// Grid seeding
// ============================================================================

/// Seed the expectation one (use case, customer) pairing produces
pub fn seed_expected(
    grid: &ResultGrid,
    usecase: &str,
    business_object: &str,
    status: &str,
    name: &str,
) {
    grid.seed(
        GridKey::new(usecase, business_object),
        MetaResult::new()
            .with("status", status)
            .with("customer", name),
    )
    .unwrap();
}
