//! The "create a habit plan" wizard.
//!
//! ```text
//! goal → emoji → background → coaching ─┬─▶ coach ─┐
//!                                       └──────────┴─▶ visibility → finishing-date
//!   → activities → outline ─┬─▶ times-per-week ─┐
//!                           └─▶ sessions ───────┴─▶ milestones → overview
//! ```
//!
//! In edit mode every step's `next` leads straight back to the overview,
//! except that a branch step the edited plan still lacks (a coach for a newly
//! coached plan, sessions for a newly fixed schedule) is visited first.

use std::sync::Arc;

use crate::{
    error::Result,
    models::{OutlineType, StepId, WizardState},
    wizard::{StepDescriptor, StepRegistry, Transition, OVERVIEW_STEP},
};

/// Wizard name; prefix of every analytics event.
pub const PLAN_WIZARD_NAME: &str = "create-plan";

/// Storage key of the persisted wizard state.
pub const PLAN_WIZARD_KEY: &str = "create-plan-wizard";

pub const GOAL: &str = "goal";
pub const EMOJI: &str = "emoji";
pub const BACKGROUND: &str = "background";
pub const COACHING: &str = "coaching";
pub const COACH: &str = "coach";
pub const VISIBILITY: &str = "visibility";
pub const FINISHING_DATE: &str = "finishing-date";
pub const ACTIVITIES: &str = "activities";
pub const OUTLINE: &str = "outline";
pub const TIMES_PER_WEEK: &str = "times-per-week";
pub const SESSIONS: &str = "sessions";
pub const MILESTONES: &str = "milestones";
pub const OVERVIEW: &str = OVERVIEW_STEP;

/// Forward transition that returns to the overview while editing.
fn edit_aware<F>(otherwise: F) -> Transition
where
    F: Fn(&WizardState) -> Option<StepId> + Send + Sync + 'static,
{
    Transition::resolver(move |state| {
        if state.is_editing() {
            Some(StepId::new(OVERVIEW))
        } else {
            otherwise(state)
        }
    })
}

/// Positional default unless editing.
fn edit_aware_default() -> Transition {
    edit_aware(|_| None)
}

/// Like [`edit_aware`], but `pending` wins even while editing.
fn edit_aware_branch<P, F>(pending: P, otherwise: F) -> Transition
where
    P: Fn(&WizardState) -> Option<StepId> + Send + Sync + 'static,
    F: Fn(&WizardState) -> Option<StepId> + Send + Sync + 'static,
{
    Transition::resolver(move |state| {
        pending(state).or_else(|| {
            if state.is_editing() {
                Some(StepId::new(OVERVIEW))
            } else {
                otherwise(state)
            }
        })
    })
}

/// A coached plan without a coach still has to pass the coach step.
fn missing_coach(state: &WizardState) -> Option<StepId> {
    if state.is_coached && state.selected_coach_id.is_none() {
        to(COACH)
    } else {
        None
    }
}

/// A fixed schedule without sessions still has to pass the sessions step.
fn missing_sessions(state: &WizardState) -> Option<StepId> {
    if state.outline_type == OutlineType::Specific && state.generated_sessions.is_empty() {
        to(SESSIONS)
    } else {
        None
    }
}

fn to(step: &'static str) -> Option<StepId> {
    Some(StepId::new(step))
}

/// Builds the plan wizard registry.
pub fn plan_wizard_registry() -> Result<StepRegistry> {
    StepRegistry::new(
        PLAN_WIZARD_NAME,
        vec![
            StepDescriptor::new(GOAL, "Goal")
                .with_summary("What do you want to achieve?")
                .with_next(edit_aware_default()),
            StepDescriptor::new(EMOJI, "Emoji")
                .with_summary("Pick an emoji for the plan")
                .with_next(edit_aware_default()),
            StepDescriptor::new(BACKGROUND, "Background")
                .with_summary("Optional background image")
                .with_next(edit_aware_default()),
            StepDescriptor::new(COACHING, "Coaching")
                .with_summary("Work with a coach or on your own")
                .with_next(edit_aware_branch(missing_coach, |state| {
                    if state.is_coached {
                        to(COACH)
                    } else {
                        to(VISIBILITY)
                    }
                })),
            StepDescriptor::new(COACH, "Coach")
                .with_summary("Choose your coach")
                .with_next(edit_aware_default())
                .with_previous(Transition::to(COACHING)),
            StepDescriptor::new(VISIBILITY, "Visibility")
                .with_summary("Who can see this plan")
                .with_next(edit_aware_default())
                .with_previous(Transition::resolver(|state| {
                    if state.is_coached {
                        to(COACH)
                    } else {
                        to(COACHING)
                    }
                })),
            StepDescriptor::new(FINISHING_DATE, "Finishing date")
                .with_summary("When should the plan end")
                .with_next(edit_aware_default()),
            StepDescriptor::new(ACTIVITIES, "Activities")
                .with_summary("What you will track")
                .with_next(edit_aware_default()),
            StepDescriptor::new(OUTLINE, "Outline")
                .with_summary("Fixed schedule or times per week")
                .with_next(edit_aware_branch(missing_sessions, |state| match state.outline_type {
                    OutlineType::TimesPerWeek => to(TIMES_PER_WEEK),
                    OutlineType::Specific => to(SESSIONS),
                })),
            StepDescriptor::new(TIMES_PER_WEEK, "Times per week")
                .with_summary("How often per week")
                .with_next(edit_aware(|_| to(MILESTONES))),
            StepDescriptor::new(SESSIONS, "Sessions")
                .with_summary("Review the generated schedule")
                .with_next(edit_aware_default())
                .with_previous(Transition::to(OUTLINE)),
            StepDescriptor::new(MILESTONES, "Milestones")
                .with_summary("Checkpoints along the way")
                .with_next(edit_aware_default())
                .with_previous(Transition::resolver(|state| match state.outline_type {
                    OutlineType::TimesPerWeek => to(TIMES_PER_WEEK),
                    OutlineType::Specific => to(SESSIONS),
                })),
            StepDescriptor::new(OVERVIEW, "Overview").with_summary("Review and save"),
        ],
    )
}

/// Shared handle to the plan wizard registry.
pub fn shared_plan_wizard_registry() -> Result<Arc<StepRegistry>> {
    plan_wizard_registry().map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::WizardUpdate,
        wizard::{CompleteOptions, Completion, Wizard},
    };

    fn wizard_at(step: &str) -> Wizard {
        Wizard::with_initial_step(shared_plan_wizard_registry().unwrap(), step)
    }

    #[test]
    fn test_registry_shape() {
        let registry = plan_wizard_registry().unwrap();
        assert_eq!(registry.name(), "create-plan");
        assert_eq!(registry.first().id, GOAL);
        assert_eq!(registry.len(), 13);
        assert!(registry.contains(OVERVIEW));
    }

    #[test]
    fn test_uncoached_plan_skips_coach_step() {
        let mut wizard = wizard_at(COACHING);
        assert!(wizard.next_step());
        assert_eq!(wizard.current_step(), VISIBILITY);

        assert!(wizard.prev_step());
        assert_eq!(wizard.current_step(), COACHING);
    }

    #[test]
    fn test_coached_plan_visits_coach_step() {
        let mut wizard = wizard_at(COACHING);
        let outcome = wizard.complete_step(
            COACHING,
            Some(WizardUpdate {
                is_coached: Some(true),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(outcome, Completion::Advanced(StepId::new(COACH)));

        assert!(wizard.next_step());
        assert_eq!(wizard.current_step(), VISIBILITY);
        assert!(wizard.prev_step());
        assert_eq!(wizard.current_step(), COACH);
    }

    #[test]
    fn test_outline_branches() {
        let mut wizard = wizard_at(OUTLINE);
        wizard.next_step();
        assert_eq!(wizard.current_step(), TIMES_PER_WEEK);
        wizard.next_step();
        assert_eq!(wizard.current_step(), MILESTONES);
        wizard.prev_step();
        assert_eq!(wizard.current_step(), TIMES_PER_WEEK);

        let mut wizard = wizard_at(OUTLINE);
        wizard.set_outline_type(OutlineType::Specific);
        wizard.next_step();
        assert_eq!(wizard.current_step(), SESSIONS);
        wizard.next_step();
        assert_eq!(wizard.current_step(), MILESTONES);
        wizard.prev_step();
        assert_eq!(wizard.current_step(), SESSIONS);
        wizard.prev_step();
        assert_eq!(wizard.current_step(), OUTLINE);
    }

    #[test]
    fn test_edit_mode_returns_to_overview() {
        let mut wizard = wizard_at(GOAL);
        wizard.initialize_for_edit(9, WizardUpdate::goal("Old goal"));
        assert_eq!(wizard.current_step(), OVERVIEW);

        assert!(wizard.edit_section(EMOJI));
        assert_eq!(wizard.current_step(), EMOJI);
        assert_eq!(wizard.state().editing_section, Some(StepId::new(EMOJI)));

        wizard.complete_step(
            EMOJI,
            Some(WizardUpdate {
                emoji: Some("🎯".to_string()),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(wizard.current_step(), OVERVIEW);
        assert!(wizard.state().editing_section.is_none());
    }

    #[test]
    fn test_edit_mode_visits_missing_coach() {
        let mut wizard = wizard_at(GOAL);
        wizard.initialize_for_edit(3, WizardUpdate::goal("Solo plan"));
        assert!(wizard.edit_section(COACHING));

        let outcome = wizard.complete_step(
            COACHING,
            Some(WizardUpdate {
                is_coached: Some(true),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(outcome, Completion::Advanced(StepId::new(COACH)));

        let outcome = wizard.complete_step(
            COACH,
            Some(WizardUpdate {
                selected_coach_id: Some(Some("coach-7".to_string())),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(outcome, Completion::Advanced(StepId::new(OVERVIEW)));

        // Already has a coach: straight back
        assert!(wizard.edit_section(COACHING));
        wizard.complete_step(COACHING, None, CompleteOptions::default());
        assert_eq!(wizard.current_step(), OVERVIEW);
    }

    #[test]
    fn test_edit_mode_visits_missing_sessions() {
        let mut wizard = wizard_at(GOAL);
        wizard.initialize_for_edit(3, WizardUpdate::goal("Weekly plan"));
        assert!(wizard.edit_section(OUTLINE));

        let outcome = wizard.complete_step(
            OUTLINE,
            Some(WizardUpdate {
                outline_type: Some(OutlineType::Specific),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(outcome, Completion::Advanced(StepId::new(SESSIONS)));

        // Back to times per week needs no extra step
        assert!(wizard.edit_section(OUTLINE));
        let outcome = wizard.complete_step(
            OUTLINE,
            Some(WizardUpdate {
                outline_type: Some(OutlineType::TimesPerWeek),
                ..Default::default()
            }),
            CompleteOptions::default(),
        );
        assert_eq!(outcome, Completion::Advanced(StepId::new(OVERVIEW)));
    }

    #[test]
    fn test_overview_is_terminal() {
        let mut wizard = wizard_at(OVERVIEW);
        assert!(wizard.is_last_step());
        assert!(!wizard.has_next_step());
        assert!(!wizard.next_step());
        assert_eq!(wizard.progress(), 100.0);
    }
}
