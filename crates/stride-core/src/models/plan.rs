//! Plan payload handed to the plan store, and the stored record.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Activity, Coach, Milestone, OutlineType, Session, Visibility, WizardState, WizardUpdate};
use crate::error::{Result, WizardError};

/// Validated plan contents translated from a finished [`WizardState`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanDraft {
    pub goal: String,
    pub emoji: String,
    pub background_image_url: Option<String>,
    pub is_coached: bool,
    pub coach: Option<Coach>,
    pub coach_id: Option<String>,
    pub visibility: Visibility,
    pub finishing_date: Option<Timestamp>,
    pub activities: Vec<Activity>,
    pub outline_type: OutlineType,
    /// Set only for times-per-week outlines
    pub times_per_week: Option<u8>,
    /// Non-empty only for fixed-schedule outlines
    pub sessions: Vec<Session>,
    pub milestones: Vec<Milestone>,
    pub description: String,
}

impl PlanDraft {
    /// Translates the accumulated state, enforcing the save-time invariants.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` when the goal is blank, no activity
    /// was chosen or two activities share an id, a coached plan lacks a
    /// coach, or the outline fields do not match the outline type.
    pub fn from_state(state: &WizardState) -> Result<Self> {
        let goal = state.goal.trim();
        if goal.is_empty() {
            return Err(WizardError::invalid_input("goal").with_reason("Goal cannot be empty"));
        }

        if state.activities.is_empty() {
            return Err(WizardError::invalid_input("activities")
                .with_reason("At least one activity is required"));
        }

        let mut ids = BTreeSet::new();
        if let Some(duplicate) = state.activities.iter().find(|a| !ids.insert(a.id.as_str())) {
            return Err(WizardError::invalid_input("activities").with_reason(format!(
                "Activity '{}' clashes with another activity (id '{}')",
                duplicate.title, duplicate.id
            )));
        }

        if state.is_coached && state.selected_coach_id.is_none() {
            return Err(WizardError::invalid_input("selected_coach_id")
                .with_reason("A coached plan needs a selected coach"));
        }

        let (times_per_week, sessions) = match state.outline_type {
            OutlineType::TimesPerWeek => {
                if !(1..=7).contains(&state.times_per_week) {
                    return Err(WizardError::invalid_input("times_per_week")
                        .with_reason("Must be between 1 and 7"));
                }
                (Some(state.times_per_week), Vec::new())
            }
            OutlineType::Specific => {
                if state.generated_sessions.is_empty() {
                    return Err(WizardError::invalid_input("generated_sessions")
                        .with_reason("A fixed schedule needs at least one session"));
                }
                if let Some(orphan) = state
                    .generated_sessions
                    .iter()
                    .find(|s| !state.activities.iter().any(|a| a.id == s.activity_id))
                {
                    return Err(WizardError::invalid_input("generated_sessions").with_reason(
                        format!("Session references unknown activity '{}'", orphan.activity_id),
                    ));
                }
                (None, state.generated_sessions.clone())
            }
        };

        Ok(Self {
            goal: goal.to_string(),
            emoji: state.emoji.clone(),
            background_image_url: state.background_image_url.clone(),
            is_coached: state.is_coached,
            coach: state.selected_coach.clone(),
            coach_id: state.selected_coach_id.clone(),
            visibility: state.visibility,
            finishing_date: state.finishing_date,
            activities: state.activities.clone(),
            outline_type: state.outline_type,
            times_per_week,
            sessions,
            milestones: state.milestones.clone(),
            description: state.description.clone(),
        })
    }
}

impl From<&PlanDraft> for WizardUpdate {
    /// Overlay used when a stored plan is opened for editing.
    fn from(draft: &PlanDraft) -> Self {
        WizardUpdate {
            goal: Some(draft.goal.clone()),
            emoji: Some(draft.emoji.clone()),
            background_image_url: Some(draft.background_image_url.clone()),
            background_image_file: None,
            is_coached: Some(draft.is_coached),
            selected_coach_id: Some(draft.coach_id.clone()),
            selected_coach: Some(draft.coach.clone()),
            visibility: Some(draft.visibility),
            finishing_date: Some(draft.finishing_date),
            activities: Some(draft.activities.clone()),
            outline_type: Some(draft.outline_type),
            times_per_week: draft.times_per_week,
            generated_sessions: Some(draft.sessions.clone()),
            milestones: Some(draft.milestones.clone()),
            description: Some(draft.description.clone()),
        }
    }
}

/// A plan as persisted by the plan store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Plan contents
    pub draft: PlanDraft,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,
}
