//! Error types for the wizard library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible wizard, store and plan operation.
///
/// Navigation itself never produces these: an unknown step id or a missing
/// transition degrades to a no-op. Errors come from persistence, from
/// malformed configuration and from validating the accumulated state before
/// it is handed to the plan store.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Saved plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// The persisted state moved on since it was read
    #[error("Wizard state '{key}' was modified concurrently (expected version {expected}, found {found})")]
    StaleState {
        key: String,
        expected: u64,
        found: u64,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WizardError {
        WizardError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a tokio join failure from a blocking database task.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WizardError::database(message).with_source(e))
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WizardError::invalid_input("goal").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'goal': must not be empty"
        );
    }

    #[test]
    fn test_stale_state_message() {
        let err = WizardError::StaleState {
            key: "plan-wizard".to_string(),
            expected: 2,
            found: 3,
        };
        let message = err.to_string();
        assert!(message.contains("plan-wizard"));
        assert!(message.contains("expected version 2"));
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load state").unwrap_err();
        assert!(matches!(err, WizardError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to load state");
    }
}
