//! The accumulated wizard state and its partial-update record.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Activity, Coach, Milestone, OriginalValues, OutlineType, Session, StepId, Visibility};

/// Default weekly target for times-per-week plans.
pub const DEFAULT_TIMES_PER_WEEK: u8 = 3;

fn default_times_per_week() -> u8 {
    DEFAULT_TIMES_PER_WEEK
}

/// Every field collected across the wizard, plus navigation bookkeeping.
///
/// Persisted as a single JSON document. Mutated only through
/// [`crate::wizard::Wizard`]; constructing one directly is for hydration and
/// tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub current_step: StepId,
    #[serde(default)]
    pub completed_steps: BTreeSet<StepId>,

    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub background_image_url: Option<String>,
    /// Local file picked for upload; never part of change detection
    #[serde(default)]
    pub background_image_file: Option<String>,
    #[serde(default)]
    pub is_coached: bool,
    #[serde(default)]
    pub selected_coach_id: Option<String>,
    #[serde(default)]
    pub selected_coach: Option<Coach>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub finishing_date: Option<Timestamp>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub outline_type: OutlineType,
    #[serde(default = "default_times_per_week")]
    pub times_per_week: u8,
    #[serde(default)]
    pub generated_sessions: Vec<Session>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub editing_plan_id: Option<u64>,
    #[serde(default)]
    pub editing_section: Option<StepId>,
    #[serde(default)]
    pub original_values: Option<OriginalValues>,
}

impl WizardState {
    /// Creates a state with documented defaults, positioned on `initial_step`.
    pub fn new(initial_step: impl Into<StepId>) -> Self {
        Self {
            current_step: initial_step.into(),
            completed_steps: BTreeSet::new(),
            goal: String::new(),
            emoji: String::new(),
            background_image_url: None,
            background_image_file: None,
            is_coached: false,
            selected_coach_id: None,
            selected_coach: None,
            visibility: Visibility::default(),
            finishing_date: None,
            activities: Vec::new(),
            outline_type: OutlineType::default(),
            times_per_week: DEFAULT_TIMES_PER_WEEK,
            generated_sessions: Vec::new(),
            milestones: Vec::new(),
            description: String::new(),
            editing_plan_id: None,
            editing_section: None,
            original_values: None,
        }
    }

    /// Whether the wizard is modifying an existing plan.
    pub fn is_editing(&self) -> bool {
        self.editing_plan_id.is_some()
    }

    /// Whether `step` has been completed at least once.
    pub fn is_completed(&self, step: &str) -> bool {
        self.completed_steps.iter().any(|s| s == step)
    }

    /// Merges a partial update. Fields left as `None` are untouched.
    pub fn apply(&mut self, update: WizardUpdate) {
        let WizardUpdate {
            goal,
            emoji,
            background_image_url,
            background_image_file,
            is_coached,
            selected_coach_id,
            selected_coach,
            visibility,
            finishing_date,
            activities,
            outline_type,
            times_per_week,
            generated_sessions,
            milestones,
            description,
        } = update;

        if let Some(goal) = goal {
            self.goal = goal;
        }
        if let Some(emoji) = emoji {
            self.emoji = emoji;
        }
        if let Some(url) = background_image_url {
            self.background_image_url = url;
        }
        if let Some(file) = background_image_file {
            self.background_image_file = file;
        }
        if let Some(is_coached) = is_coached {
            self.is_coached = is_coached;
        }
        if let Some(coach_id) = selected_coach_id {
            self.selected_coach_id = coach_id;
        }
        if let Some(coach) = selected_coach {
            self.selected_coach = coach;
        }
        if let Some(visibility) = visibility {
            self.visibility = visibility;
        }
        if let Some(date) = finishing_date {
            self.finishing_date = date;
        }
        if let Some(activities) = activities {
            self.activities = activities;
        }
        if let Some(outline_type) = outline_type {
            self.outline_type = outline_type;
        }
        if let Some(times) = times_per_week {
            self.times_per_week = times;
        }
        if let Some(sessions) = generated_sessions {
            self.generated_sessions = sessions;
        }
        if let Some(milestones) = milestones {
            self.milestones = milestones;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}

/// Partial update of the domain fields of [`WizardState`].
///
/// Nullable fields use `Option<Option<_>>`: the outer `None` leaves the field
/// alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardUpdate {
    pub goal: Option<String>,
    pub emoji: Option<String>,
    pub background_image_url: Option<Option<String>>,
    pub background_image_file: Option<Option<String>>,
    pub is_coached: Option<bool>,
    pub selected_coach_id: Option<Option<String>>,
    pub selected_coach: Option<Option<Coach>>,
    pub visibility: Option<Visibility>,
    pub finishing_date: Option<Option<Timestamp>>,
    pub activities: Option<Vec<Activity>>,
    pub outline_type: Option<OutlineType>,
    pub times_per_week: Option<u8>,
    pub generated_sessions: Option<Vec<Session>>,
    pub milestones: Option<Vec<Milestone>>,
    pub description: Option<String>,
}

impl WizardUpdate {
    /// Update that only sets the goal.
    pub fn goal(goal: impl Into<String>) -> Self {
        Self {
            goal: Some(goal.into()),
            ..Default::default()
        }
    }

    /// True when applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
