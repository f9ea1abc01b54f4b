//! Builder for creating and configuring wizard sessions.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;

use super::WizardSession;
use crate::{
    db::Database,
    error::Result,
    events::{LogSink, SqliteEventSink},
    plan_wizard::{shared_plan_wizard_registry, PLAN_WIZARD_KEY},
    store::{MemoryStateStore, SqliteStateStore, StateStore},
    wizard::StepRegistry,
};

/// Builder for creating and configuring [`WizardSession`] instances.
///
/// Defaults: the plan wizard registry, the `create-plan-wizard` key, the XDG
/// database path and a logging event sink.
#[derive(Debug, Clone, Default)]
pub struct WizardBuilder {
    database_path: Option<PathBuf>,
    key: Option<String>,
    registry: Option<Arc<StepRegistry>>,
    in_memory: bool,
    record_events: bool,
}

impl WizardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the storage key; each key is an independent wizard run.
    pub fn with_key<S: Into<String>>(mut self, key: Option<S>) -> Self {
        if let Some(key) = key {
            self.key = Some(key.into());
        }
        self
    }

    /// Uses a custom step registry instead of the plan wizard.
    pub fn with_registry(mut self, registry: Arc<StepRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Keeps state in memory only.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Also appends events to the `wizard_events` table of the database.
    pub fn record_events(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database directory cannot be
    /// created, `WizardError::XdgDirectory` if no default path is available,
    /// and `WizardError::Database` if database initialization fails.
    pub fn build(self) -> Result<WizardSession> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => shared_plan_wizard_registry()?,
        };
        let key = self.key.unwrap_or_else(|| PLAN_WIZARD_KEY.to_string());

        let (store, event_db): (Box<dyn StateStore>, Option<Database>) = if self.in_memory {
            let event_db = if self.record_events {
                Some(Database::open_in_memory()?)
            } else {
                None
            };
            (Box::new(MemoryStateStore::new()), event_db)
        } else {
            let db_path = match self.database_path {
                Some(path) => path,
                None => Database::default_path()?,
            };
            Database::ensure_parent_dir(&db_path)?;
            debug!("Opening wizard state at {}", db_path.display());

            let event_db = if self.record_events {
                Some(Database::new(&db_path)?)
            } else {
                None
            };
            (Box::new(SqliteStateStore::open(&db_path)?), event_db)
        };

        let mut session = WizardSession::new(registry, store, key);
        session.subscribe(Box::new(LogSink));
        if let Some(db) = event_db {
            session.subscribe(Box::new(SqliteEventSink::from_database(db)));
        }
        Ok(session)
    }
}
