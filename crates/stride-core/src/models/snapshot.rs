//! Frozen edit-mode baseline and per-field change detection.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Activity, Milestone, Visibility, WizardState};

/// Values of an edited plan as they were loaded, captured once on edit entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OriginalValues {
    pub goal: String,
    pub emoji: String,
    pub background_image_url: Option<String>,
    pub is_coached: bool,
    pub selected_coach_id: Option<String>,
    pub visibility: Visibility,
    pub finishing_date: Option<Timestamp>,
    pub activities: Vec<Activity>,
    pub times_per_week: u8,
    pub milestones: Vec<Milestone>,
}

/// Fields tracked for "changed" indicators in the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Goal,
    Emoji,
    BackgroundImage,
    Coaching,
    Visibility,
    FinishingDate,
    Activities,
    TimesPerWeek,
    Milestones,
}

impl Field {
    /// Every tracked field in overview order.
    pub const ALL: [Field; 9] = [
        Field::Goal,
        Field::Emoji,
        Field::BackgroundImage,
        Field::Coaching,
        Field::Visibility,
        Field::FinishingDate,
        Field::Activities,
        Field::TimesPerWeek,
        Field::Milestones,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Goal => "goal",
            Field::Emoji => "emoji",
            Field::BackgroundImage => "background_image",
            Field::Coaching => "coaching",
            Field::Visibility => "visibility",
            Field::FinishingDate => "finishing_date",
            Field::Activities => "activities",
            Field::TimesPerWeek => "times_per_week",
            Field::Milestones => "milestones",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OriginalValues {
    /// Copies the change-detection subset out of `state`.
    pub fn capture(state: &WizardState) -> Self {
        Self {
            goal: state.goal.clone(),
            emoji: state.emoji.clone(),
            background_image_url: state.background_image_url.clone(),
            is_coached: state.is_coached,
            selected_coach_id: state.selected_coach_id.clone(),
            visibility: state.visibility,
            finishing_date: state.finishing_date,
            activities: state.activities.clone(),
            times_per_week: state.times_per_week,
            milestones: state.milestones.clone(),
        }
    }

    /// Whether `field` in `current` differs from this baseline.
    pub fn is_changed(&self, field: Field, current: &WizardState) -> bool {
        match field {
            Field::Goal => self.goal != current.goal,
            Field::Emoji => self.emoji != current.emoji,
            Field::BackgroundImage => self.background_image_url != current.background_image_url,
            Field::Coaching => {
                self.is_coached != current.is_coached
                    || self.selected_coach_id != current.selected_coach_id
            }
            Field::Visibility => self.visibility != current.visibility,
            Field::FinishingDate => date_changed(self.finishing_date, current.finishing_date),
            Field::Activities => collection_changed(
                &self.activities,
                &current.activities,
                Some(|a: &Activity| a.id.clone()),
            ),
            Field::TimesPerWeek => self.times_per_week != current.times_per_week,
            Field::Milestones => collection_changed(
                &self.milestones,
                &current.milestones,
                None::<fn(&Milestone) -> String>,
            ),
        }
    }

    /// All fields of `current` that differ from this baseline.
    pub fn changed_fields(&self, current: &WizardState) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.is_changed(*field, current))
            .collect()
    }
}

/// Both unset is unchanged, one unset is changed, otherwise compares epoch
/// milliseconds.
pub fn date_changed(original: Option<Timestamp>, current: Option<Timestamp>) -> bool {
    match (original, current) {
        (None, None) => false,
        (Some(a), Some(b)) => a.as_millisecond() != b.as_millisecond(),
        _ => true,
    }
}

/// Length first, then the sorted identity keys when `identity` is given,
/// otherwise a structural comparison of the serialized values.
pub fn collection_changed<T, K, F>(original: &[T], current: &[T], identity: Option<F>) -> bool
where
    T: Serialize,
    K: Ord,
    F: Fn(&T) -> K,
{
    if original.len() != current.len() {
        return true;
    }

    match identity {
        Some(key) => {
            let mut before: Vec<K> = original.iter().map(&key).collect();
            let mut after: Vec<K> = current.iter().map(&key).collect();
            before.sort();
            after.sort();
            before != after
        }
        None => match (serde_json::to_value(original), serde_json::to_value(current)) {
            (Ok(before), Ok(after)) => before != after,
            _ => true,
        },
    }
}
