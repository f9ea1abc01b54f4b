#![allow(dead_code)]

use std::path::Path;

use stride_core::{
    models::{Activity, WizardUpdate},
    PlanStore, PlanStoreBuilder, WizardBuilder, WizardSession,
};
use tempfile::TempDir;

/// Helper function to create a session over a fresh database file
pub fn create_test_session() -> (TempDir, WizardSession) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let session = open_session(&temp_dir.path().join("test.db"));
    (temp_dir, session)
}

/// Opens a session that records events, as the CLI does
pub fn open_session(db_path: &Path) -> WizardSession {
    WizardBuilder::new()
        .with_database_path(Some(db_path))
        .record_events(true)
        .build()
        .expect("Failed to create session")
}

/// Helper function to create a session and plan store sharing one database
pub async fn create_test_workspace() -> (TempDir, WizardSession, PlanStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let plans = PlanStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create plan store");
    let session = open_session(&db_path);
    (temp_dir, session, plans)
}

/// Fields that make the accumulated state a valid plan
pub fn minimal_plan(goal: &str) -> WizardUpdate {
    WizardUpdate {
        goal: Some(goal.to_string()),
        activities: Some(vec![Activity::new("Running", "km")]),
        ..Default::default()
    }
}
