//! Workflows spanning the wizard session and the plan store.
//!
//! ```text
//! Interface → Handler → WizardSession + PlanStore → Models
//! ```
//!
//! Both handlers keep the wizard state intact when the plan store call
//! fails, so the user stays on the same step and can retry.

use log::{info, warn};

use crate::{
    error::{Result, WizardError},
    models::{PlanDraft, SavedPlan, WizardUpdate},
    params::Id,
    plans::PlanStore,
    session::WizardSession,
    wizard::CompleteOptions,
};

/// Outcome of [`handle_save_plan`].
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Created(SavedPlan),
    Updated(SavedPlan),
}

impl SaveOutcome {
    pub fn plan(&self) -> &SavedPlan {
        match self {
            SaveOutcome::Created(plan) | SaveOutcome::Updated(plan) => plan,
        }
    }
}

/// Validates the accumulated state, creates or updates the plan, then resets
/// the wizard.
///
/// # Errors
///
/// Returns `WizardError::InvalidInput` if the state does not form a valid
/// plan, or any plan store error. In both cases the wizard state is kept.
/// If the plan was created but the reset could not be written, the wizard is
/// switched to editing the new plan before the error is returned.
pub async fn handle_save_plan(
    session: &mut WizardSession,
    plans: &PlanStore,
) -> Result<SaveOutcome> {
    let wizard = session.load()?;
    let draft = PlanDraft::from_state(wizard.state())?;

    let outcome = match wizard.state().editing_plan_id {
        Some(id) => SaveOutcome::Updated(plans.update_plan(&Id { id }, &draft).await?),
        None => SaveOutcome::Created(plans.create_plan(&draft).await?),
    };

    let reset = session.apply(|wizard| {
        let last = wizard.current_step().clone();
        wizard.complete_step(last.as_str(), None, CompleteOptions::finish());
        wizard.reset_state();
    });
    if let Err(err) = reset {
        if let SaveOutcome::Created(plan) = &outcome {
            // The plan exists now; a retry must update it, not create another
            warn!("Created plan {} but could not reset the wizard: {err}", plan.id);
            if let Err(retarget) =
                session.initialize_for_edit(plan.id, WizardUpdate::from(&plan.draft))
            {
                warn!("Could not point the wizard at plan {}: {retarget}", plan.id);
            }
        }
        return Err(err);
    }

    info!("Saved plan {} ('{}')", outcome.plan().id, outcome.plan().draft.goal);
    Ok(outcome)
}

/// Loads plan `id` and opens it in the wizard for editing.
///
/// # Errors
///
/// Returns `WizardError::PlanNotFound` if the plan does not exist.
pub async fn handle_edit_plan(
    session: &mut WizardSession,
    plans: &PlanStore,
    params: &Id,
) -> Result<SavedPlan> {
    let plan = plans
        .get_plan(params)
        .await?
        .ok_or(WizardError::PlanNotFound { id: params.id })?;

    session.initialize_for_edit(plan.id, WizardUpdate::from(&plan.draft))?;
    Ok(plan)
}
