//! Wizard progress and collected-state formatting.

use std::fmt;

use super::datetime::LocalDate;
use crate::{
    models::{Activity, WizardState},
    wizard::Wizard,
};

/// Current step, progress and a summary of the collected fields.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::WizardStatus, plan_wizard::shared_plan_wizard_registry, Wizard};
///
/// let wizard = Wizard::new(shared_plan_wizard_registry().unwrap());
/// let output = WizardStatus(&wizard).to_string();
/// assert!(output.contains("step 1 of 13"));
/// ```
pub struct WizardStatus<'a>(pub &'a Wizard);

impl<'a> fmt::Display for WizardStatus<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        let state = wizard.state();
        let position = wizard.current_step_index().map_or(0, |i| i + 1);

        writeln!(
            f,
            "# {}: step {} of {} ({:.0}%)",
            wizard.registry().name(),
            position,
            wizard.total_steps(),
            wizard.progress()
        )?;
        writeln!(f)?;

        match wizard.registry().get(wizard.current_step().as_str()) {
            Some(step) => {
                writeln!(f, "## {}", step.title)?;
                if let Some(summary) = &step.summary {
                    writeln!(f)?;
                    writeln!(f, "{summary}")?;
                }
            }
            None => writeln!(f, "## Unknown step `{}`", wizard.current_step())?,
        }
        writeln!(f)?;

        if let Some(id) = state.editing_plan_id {
            writeln!(f, "- Editing plan: {id}")?;
        }
        if let Some(section) = &state.editing_section {
            writeln!(f, "- Editing section: {section}")?;
        }
        if !state.completed_steps.is_empty() {
            let completed: Vec<&str> = state.completed_steps.iter().map(|s| s.as_str()).collect();
            writeln!(f, "- Completed: {}", completed.join(", "))?;
        }

        writeln!(f)?;
        write!(f, "{}", StateSummary(state))
    }
}

/// Collected plan fields as a markdown list.
pub struct StateSummary<'a>(pub &'a WizardState);

impl<'a> fmt::Display for StateSummary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "## Plan so far")?;
        writeln!(f)?;

        if state.goal.is_empty() {
            writeln!(f, "- Goal: (not set)")?;
        } else {
            writeln!(f, "- Goal: {}", state.goal)?;
        }
        if !state.emoji.is_empty() {
            writeln!(f, "- Emoji: {}", state.emoji)?;
        }
        if let Some(url) = &state.background_image_url {
            writeln!(f, "- Background: {url}")?;
        }
        if state.is_coached {
            let coach = state
                .selected_coach
                .as_ref()
                .map(|c| c.name.as_str())
                .or(state.selected_coach_id.as_deref())
                .unwrap_or("(not chosen)");
            writeln!(f, "- Coach: {coach}")?;
        }
        writeln!(f, "- Visibility: {}", state.visibility)?;
        if let Some(date) = &state.finishing_date {
            writeln!(f, "- Finishing date: {}", LocalDate(date))?;
        }
        if !state.activities.is_empty() {
            writeln!(f, "- Activities: {}", activity_list(&state.activities))?;
        }
        match state.outline_type {
            crate::models::OutlineType::TimesPerWeek => writeln!(
                f,
                "- Outline: {} ({})",
                state.outline_type.label(),
                state.times_per_week
            )?,
            crate::models::OutlineType::Specific => writeln!(
                f,
                "- Outline: {} ({} sessions)",
                state.outline_type.label(),
                state.generated_sessions.len()
            )?,
        }
        if !state.milestones.is_empty() {
            writeln!(f, "- Milestones:")?;
            for milestone in &state.milestones {
                match &milestone.date {
                    Some(date) => writeln!(f, "  - {} ({})", milestone.description, LocalDate(date))?,
                    None => writeln!(f, "  - {}", milestone.description)?,
                }
            }
        }
        if !state.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", state.description)?;
        }
        Ok(())
    }
}

pub(crate) fn activity_list(activities: &[Activity]) -> String {
    activities
        .iter()
        .map(|a| {
            if a.emoji.is_empty() {
                format!("{} ({})", a.title, a.measure)
            } else {
                format!("{} {} ({})", a.emoji, a.title, a.measure)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every registered step with its completion marker.
///
/// - `✓` completed at least once
/// - `➤` current step
/// - `○` not yet visited
pub struct StepList<'a>(pub &'a Wizard);

impl<'a> fmt::Display for StepList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wizard = self.0;
        writeln!(f, "## Steps")?;
        writeln!(f)?;
        for (index, step) in wizard.registry().iter().enumerate() {
            let marker = if step.id == *wizard.current_step() {
                "➤"
            } else if wizard.state().completed_steps.contains(&step.id) {
                "✓"
            } else {
                "○"
            };
            writeln!(f, "{}. {marker} {} (`{}`)", index + 1, step.title, step.id)?;
        }
        Ok(())
    }
}
