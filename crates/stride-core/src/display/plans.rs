//! Display implementations for saved plans and their summaries.

use std::fmt;

use super::{
    datetime::{LocalDate, LocalDateTime},
    wizard::activity_list,
};
use crate::{
    handlers::SaveOutcome,
    models::{OutlineType, PlanSummary, SavedPlan, Visibility},
};

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for OutlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = &self.draft;
        if draft.emoji.is_empty() {
            writeln!(f, "# {}. {}", self.id, draft.goal)?;
        } else {
            writeln!(f, "# {}. {} {}", self.id, draft.emoji, draft.goal)?;
        }
        writeln!(f)?;

        writeln!(f, "- Visibility: {}", draft.visibility)?;
        if let Some(coach) = &draft.coach {
            writeln!(f, "- Coach: {}", coach.name)?;
        } else if let Some(id) = &draft.coach_id {
            writeln!(f, "- Coach: {id}")?;
        }
        if let Some(date) = &draft.finishing_date {
            writeln!(f, "- Finishing date: {}", LocalDate(date))?;
        }
        writeln!(f, "- Activities: {}", activity_list(&draft.activities))?;
        match (draft.outline_type, draft.times_per_week) {
            (OutlineType::TimesPerWeek, Some(times)) => {
                writeln!(f, "- Outline: {} ({times})", draft.outline_type.label())?
            }
            _ => writeln!(
                f,
                "- Outline: {} ({} sessions)",
                draft.outline_type.label(),
                draft.sessions.len()
            )?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !draft.milestones.is_empty() {
            writeln!(f, "\n## Milestones")?;
            writeln!(f)?;
            for milestone in &draft.milestones {
                match &milestone.date {
                    Some(date) => writeln!(f, "- {} ({})", milestone.description, LocalDate(date))?,
                    None => writeln!(f, "- {}", milestone.description)?,
                }
            }
        }

        if !draft.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", draft.description)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            writeln!(f, "## {} (ID: {})", self.goal, self.id)?;
        } else {
            writeln!(f, "## {} {} (ID: {})", self.emoji, self.goal, self.id)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "- **Outline**: {}, {} activities, {} milestones",
            self.outline_type.label(),
            self.activity_count,
            self.milestone_count
        )?;
        writeln!(f, "- **Visibility**: {}", self.visibility)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Created(plan) => writeln!(f, "Created plan with ID: {}", plan.id)?,
            SaveOutcome::Updated(plan) => writeln!(f, "Updated plan with ID: {}", plan.id)?,
        }
        writeln!(f)?;
        write!(f, "{}", self.plan())
    }
}

/// Newtype wrapper for displaying a list of plan summaries.
///
/// # Examples
///
/// ```rust
/// use stride_core::display::PlanSummaries;
///
/// let output = PlanSummaries(vec![]).to_string();
/// assert_eq!(output, "No plans found.\n");
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
