//! Plan operations for the PlanStore.

use tokio::task;

use super::PlanStore;
use crate::{
    db::Database,
    error::{Result, WizardError},
    models::{PlanDraft, PlanSummary, SavedPlan},
    params::Id,
};

impl PlanStore {
    /// Stores a new plan built from `draft`.
    pub async fn create_plan(&self, draft: &PlanDraft) -> Result<SavedPlan> {
        let db_path = self.db_path.clone();
        let draft = draft.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_plan(&draft)
        })
        .await
        .map_err(WizardError::join)?
    }

    /// Replaces the contents of an existing plan.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::PlanNotFound` if the plan does not exist.
    pub async fn update_plan(&self, params: &Id, draft: &PlanDraft) -> Result<SavedPlan> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;
        let draft = draft.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_plan(plan_id, &draft)
        })
        .await
        .map_err(WizardError::join)?
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<SavedPlan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(WizardError::join)?
    }

    /// Lists saved plans as summaries, most recently updated first.
    pub async fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let db_path = self.db_path.clone();

        let plans = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(WizardError::join)??;

        Ok(plans.iter().map(Into::into).collect())
    }
}
