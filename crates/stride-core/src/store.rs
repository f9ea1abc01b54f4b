//! Durable key-value persistence of [`WizardState`].
//!
//! A store maps a fixed string key to one serialized state plus a version
//! counter. Writes carry the version they were based on; a store refuses a
//! write whose base version is no longer current, so two writers sharing a key
//! cannot silently overwrite each other.

use std::{collections::HashMap, path::Path};

use log::debug;

use crate::{
    db::Database,
    error::{Result, WizardError},
    models::WizardState,
};

/// A state together with the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned {
    pub state: WizardState,
    pub version: u64,
}

/// Storage backend for wizard state.
pub trait StateStore: Send {
    /// Reads the state for `key`, if one was saved.
    fn load(&self, key: &str) -> Result<Option<Versioned>>;

    /// Writes `state` if the stored version equals `expected_version`
    /// (0 when nothing is stored yet). Returns the new version.
    fn save(&mut self, key: &str, state: &WizardState, expected_version: u64) -> Result<u64>;

    /// Forgets the state for `key`.
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// SQLite-backed store sharing the application database.
pub struct SqliteStateStore {
    db: Database,
}

impl SqliteStateStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            db: Database::new(path)?,
        })
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }
}

impl StateStore for SqliteStateStore {
    fn load(&self, key: &str) -> Result<Option<Versioned>> {
        match self.db.load_state(key)? {
            Some((json, version)) => Ok(Some(Versioned {
                state: serde_json::from_str(&json)?,
                version,
            })),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, state: &WizardState, expected_version: u64) -> Result<u64> {
        let json = serde_json::to_string(state)?;
        let version = self.db.save_state(key, &json, expected_version)?;
        debug!("Saved wizard state '{key}' at version {version}");
        Ok(version)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.db.delete_state(key)?;
        Ok(())
    }
}

/// In-process store holding serialized states, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: HashMap<String, (String, u64)>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> Result<Option<Versioned>> {
        match self.entries.get(key) {
            Some((json, version)) => Ok(Some(Versioned {
                state: serde_json::from_str(json)?,
                version: *version,
            })),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, state: &WizardState, expected_version: u64) -> Result<u64> {
        let found = self.entries.get(key).map_or(0, |(_, v)| *v);
        if found != expected_version {
            return Err(WizardError::StaleState {
                key: key.to_string(),
                expected: expected_version,
                found,
            });
        }
        let json = serde_json::to_string(state)?;
        self.entries.insert(key.to_string(), (json, found + 1));
        Ok(found + 1)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStateStore::new();
        assert!(store.load("k").unwrap().is_none());

        let mut state = WizardState::new("goal");
        state.goal = "Read 12 books".to_string();
        assert_eq!(store.save("k", &state, 0).unwrap(), 1);

        let loaded = store.load("k").unwrap().unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.state, state);
    }

    #[test]
    fn test_memory_store_rejects_stale_write() {
        let mut store = MemoryStateStore::new();
        let state = WizardState::new("goal");
        store.save("k", &state, 0).unwrap();
        assert!(matches!(
            store.save("k", &state, 0),
            Err(WizardError::StaleState { found: 1, .. })
        ));
    }

    #[test]
    fn test_sqlite_store_round_trip() {
        let mut store = SqliteStateStore::from_database(Database::open_in_memory().unwrap());
        let mut state = WizardState::new("emoji");
        state.emoji = "📚".to_string();
        store.save("k", &state, 0).unwrap();

        let loaded = store.load("k").unwrap().unwrap();
        assert_eq!(loaded.state.emoji, "📚");

        store.clear("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }
}
