//! Edit-mode change listing.

use std::fmt;

use super::{datetime::LocalDate, wizard::activity_list};
use crate::{
    models::{Field, Milestone, OriginalValues, WizardState},
    wizard::Wizard,
};

/// Fields of the plan being edited, marking those that differ from the values
/// the plan was loaded with.
pub struct ChangeSet<'a>(pub &'a Wizard);

impl<'a> fmt::Display for ChangeSet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.state();
        let (Some(id), Some(original)) = (state.editing_plan_id, &state.original_values) else {
            return writeln!(f, "Not editing a plan.");
        };

        let changed = original.changed_fields(state);
        writeln!(f, "## Changes to plan {id}")?;
        writeln!(f)?;
        if changed.is_empty() {
            return writeln!(f, "No changes.");
        }

        for field in changed {
            writeln!(
                f,
                "- **{}**: {} → {}",
                field,
                original_value(field, original),
                current_value(field, state)
            )?;
        }
        Ok(())
    }
}

fn milestones(milestones: &[Milestone]) -> String {
    format!("{} milestones", milestones.len())
}

fn text(value: &str) -> String {
    if value.is_empty() {
        "(empty)".to_string()
    } else {
        format!("\"{value}\"")
    }
}

fn optional_date(date: Option<jiff::Timestamp>) -> String {
    date.map_or_else(|| "(none)".to_string(), |d| LocalDate(&d).to_string())
}

fn coaching(is_coached: bool, coach_id: Option<&str>) -> String {
    match (is_coached, coach_id) {
        (false, _) => "self-guided".to_string(),
        (true, Some(id)) => format!("coached by {id}"),
        (true, None) => "coached".to_string(),
    }
}

fn original_value(field: Field, original: &OriginalValues) -> String {
    match field {
        Field::Goal => text(&original.goal),
        Field::Emoji => text(&original.emoji),
        Field::BackgroundImage => text(original.background_image_url.as_deref().unwrap_or("")),
        Field::Coaching => coaching(original.is_coached, original.selected_coach_id.as_deref()),
        Field::Visibility => original.visibility.to_string(),
        Field::FinishingDate => optional_date(original.finishing_date),
        Field::Activities => activity_list(&original.activities),
        Field::TimesPerWeek => original.times_per_week.to_string(),
        Field::Milestones => milestones(&original.milestones),
    }
}

fn current_value(field: Field, state: &WizardState) -> String {
    match field {
        Field::Goal => text(&state.goal),
        Field::Emoji => text(&state.emoji),
        Field::BackgroundImage => text(state.background_image_url.as_deref().unwrap_or("")),
        Field::Coaching => coaching(state.is_coached, state.selected_coach_id.as_deref()),
        Field::Visibility => state.visibility.to_string(),
        Field::FinishingDate => optional_date(state.finishing_date),
        Field::Activities => activity_list(&state.activities),
        Field::TimesPerWeek => state.times_per_week.to_string(),
        Field::Milestones => milestones(&state.milestones),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::WizardUpdate, plan_wizard::shared_plan_wizard_registry};

    #[test]
    fn test_not_editing() {
        let wizard = Wizard::new(shared_plan_wizard_registry().unwrap());
        assert_eq!(ChangeSet(&wizard).to_string(), "Not editing a plan.\n");
    }

    #[test]
    fn test_lists_changed_fields_only() {
        let mut wizard = Wizard::new(shared_plan_wizard_registry().unwrap());
        wizard.initialize_for_edit(
            12,
            WizardUpdate {
                goal: Some("Old goal".to_string()),
                times_per_week: Some(3),
                ..Default::default()
            },
        );
        assert!(ChangeSet(&wizard).to_string().contains("No changes."));

        wizard.set_goal("New goal");
        let output = ChangeSet(&wizard).to_string();
        assert!(output.contains("## Changes to plan 12"));
        assert!(output.contains("- **goal**: \"Old goal\" → \"New goal\""));
        assert!(!output.contains("times_per_week"));
    }
}
