//! Downstream store for finished plans.
//!
//! The wizard's last step hands a validated [`PlanDraft`](crate::models::PlanDraft)
//! to a [`PlanStore`]. Calls are async: the SQLite work runs on tokio's
//! blocking pool, so callers await it like any remote plan backend and a
//! failure leaves the wizard state untouched.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`PlanStore`] instances with configuration
//! - [`plan_ops`]: create, update, get and list operations

use std::path::PathBuf;

pub mod builder;
pub mod plan_ops;


pub use builder::PlanStoreBuilder;

/// Async access to saved plans.
#[derive(Debug, Clone)]
pub struct PlanStore {
    pub(crate) db_path: PathBuf,
}

impl PlanStore {
    /// Creates a plan store over an initialized database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
