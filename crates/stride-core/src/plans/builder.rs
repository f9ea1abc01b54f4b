//! Builder for creating and configuring PlanStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::PlanStore;
use crate::{
    db::Database,
    error::{Result, WizardError},
};

/// Builder for creating and configuring PlanStore instances.
#[derive(Debug, Clone, Default)]
pub struct PlanStoreBuilder {
    database_path: Option<PathBuf>,
}

impl PlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
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

    /// Builds the configured plan store.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database path is invalid
    /// Returns `WizardError::Database` if database initialization fails
    pub async fn build(self) -> Result<PlanStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Database::default_path()?,
        };

        Database::ensure_parent_dir(&db_path)?;

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WizardError>(())
        })
        .await
        .map_err(WizardError::join)??;

        Ok(PlanStore::new(db_path))
    }
}
