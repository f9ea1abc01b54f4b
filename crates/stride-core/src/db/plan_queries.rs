//! Saved plan CRUD.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WizardError},
    models::{PlanDraft, SavedPlan},
};

const INSERT_PLAN_SQL: &str = "INSERT INTO plans (goal, emoji, visibility, outline_type, payload, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_PLAN_SQL: &str = "UPDATE plans SET goal = ?1, emoji = ?2, visibility = ?3, outline_type = ?4, payload = ?5, updated_at = ?6 WHERE id = ?7";
const SELECT_PLAN_SQL: &str = "SELECT id, payload, created_at, updated_at FROM plans WHERE id = ?1";
const SELECT_PLANS_SQL: &str =
    "SELECT id, payload, created_at, updated_at FROM plans ORDER BY updated_at DESC, id DESC";

fn plan_from_row(row: &Row<'_>) -> rusqlite::Result<SavedPlan> {
    let payload: String = row.get(1)?;
    let draft: PlanDraft = serde_json::from_str(&payload)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;

    Ok(SavedPlan {
        id: row.get::<_, i64>(0)? as u64,
        draft,
        created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Stores a new plan.
    pub fn insert_plan(&mut self, draft: &PlanDraft) -> Result<SavedPlan> {
        let payload = serde_json::to_string(draft)?;
        let now = Timestamp::now();
        let now_str = now.to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_PLAN_SQL,
            params![
                &draft.goal,
                &draft.emoji,
                draft.visibility.as_str(),
                draft.outline_type.as_str(),
                &payload,
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plan")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(SavedPlan {
            id,
            draft: draft.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the contents of plan `id`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::PlanNotFound` if no such plan exists.
    pub fn update_plan(&mut self, id: u64, draft: &PlanDraft) -> Result<SavedPlan> {
        let payload = serde_json::to_string(draft)?;
        let now = Timestamp::now();

        let updated = self
            .connection
            .execute(
                UPDATE_PLAN_SQL,
                params![
                    &draft.goal,
                    &draft.emoji,
                    draft.visibility.as_str(),
                    draft.outline_type.as_str(),
                    &payload,
                    now.to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to update plan")?;

        if updated == 0 {
            return Err(WizardError::PlanNotFound { id });
        }

        self.get_plan(id)?.ok_or(WizardError::PlanNotFound { id })
    }

    /// Retrieves a plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<SavedPlan>> {
        self.connection
            .query_row(SELECT_PLAN_SQL, params![id as i64], plan_from_row)
            .optional()
            .db_context("Failed to query plan")
    }

    /// Lists plans, most recently updated first.
    pub fn list_plans(&self) -> Result<Vec<SavedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let plans = stmt
            .query_map([], plan_from_row)
            .db_context("Failed to query plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan row")?;

        Ok(plans)
    }
}
