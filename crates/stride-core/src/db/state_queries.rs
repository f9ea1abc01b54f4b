//! Versioned wizard state rows.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result, WizardError};

const SELECT_STATE_SQL: &str = "SELECT state, version FROM wizard_states WHERE key = ?1";
const SELECT_VERSION_SQL: &str = "SELECT version FROM wizard_states WHERE key = ?1";
const INSERT_STATE_SQL: &str =
    "INSERT INTO wizard_states (key, state, version, updated_at) VALUES (?1, ?2, 1, ?3)";
const UPDATE_STATE_SQL: &str =
    "UPDATE wizard_states SET state = ?1, version = version + 1, updated_at = ?2 WHERE key = ?3 AND version = ?4";
const DELETE_STATE_SQL: &str = "DELETE FROM wizard_states WHERE key = ?1";

impl super::Database {
    /// Loads the serialized state and its version for `key`.
    pub fn load_state(&self, key: &str) -> Result<Option<(String, u64)>> {
        self.connection
            .query_row(SELECT_STATE_SQL, params![key], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
            })
            .optional()
            .db_context("Failed to load wizard state")
    }

    /// Writes `state` for `key` if the stored version still equals
    /// `expected_version` (0 meaning "no row yet"). Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::StaleState` when another writer got there first.
    pub fn save_state(&mut self, key: &str, state: &str, expected_version: u64) -> Result<u64> {
        // Take the write lock before reading so the check and the write agree
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let found: u64 = tx
            .query_row(SELECT_VERSION_SQL, params![key], |row| row.get::<_, i64>(0))
            .optional()
            .db_context("Failed to read wizard state version")?
            .map_or(0, |v| v as u64);

        if found != expected_version {
            return Err(WizardError::StaleState {
                key: key.to_string(),
                expected: expected_version,
                found,
            });
        }

        let now = Timestamp::now().to_string();
        if found == 0 {
            tx.execute(INSERT_STATE_SQL, params![key, state, &now])
                .db_context("Failed to insert wizard state")?;
        } else {
            tx.execute(
                UPDATE_STATE_SQL,
                params![state, &now, key, expected_version as i64],
            )
            .db_context("Failed to update wizard state")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(found + 1)
    }

    /// Removes the row for `key`. Returns whether a row existed.
    pub fn delete_state(&mut self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_STATE_SQL, params![key])
            .db_context("Failed to delete wizard state")?;
        Ok(deleted > 0)
    }
}
