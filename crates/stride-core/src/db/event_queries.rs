//! Wizard event log.

use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    events::WizardEvent,
};

const INSERT_EVENT_SQL: &str =
    "INSERT INTO wizard_events (name, payload, occurred_at) VALUES (?1, ?2, ?3)";
const SELECT_RECENT_EVENTS_SQL: &str =
    "SELECT payload FROM (SELECT id, payload FROM wizard_events ORDER BY id DESC LIMIT ?1) ORDER BY id ASC";

impl super::Database {
    pub fn insert_event(&self, event: &WizardEvent) -> Result<()> {
        let payload = serde_json::to_string(event)?;
        self.connection
            .execute(
                INSERT_EVENT_SQL,
                params![event.name(), &payload, event.at().to_string()],
            )
            .db_context("Failed to insert wizard event")?;
        Ok(())
    }

    /// The `limit` most recent events, oldest first.
    pub fn recent_events(&self, limit: u32) -> Result<Vec<WizardEvent>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECENT_EVENTS_SQL)
            .db_context("Failed to prepare query")?;

        let events = stmt
            .query_map(params![limit], |row| {
                let payload: String = row.get(0)?;
                serde_json::from_str::<WizardEvent>(&payload).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e))
                })
            })
            .db_context("Failed to query wizard events")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read wizard event row")?;

        Ok(events)
    }
}
