//! Compact plan listing entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{OutlineType, SavedPlan, Visibility};

/// Summary information about a saved plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Goal of the plan
    pub goal: String,
    /// Emoji shown next to the goal
    pub emoji: String,
    /// Who can see the plan
    pub visibility: Visibility,
    /// Schedule layout
    pub outline_type: OutlineType,
    /// Number of activities
    pub activity_count: u32,
    /// Number of milestones
    pub milestone_count: u32,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Last update timestamp
    pub updated_at: Timestamp,
}

impl From<&SavedPlan> for PlanSummary {
    fn from(plan: &SavedPlan) -> Self {
        Self {
            id: plan.id,
            goal: plan.draft.goal.clone(),
            emoji: plan.draft.emoji.clone(),
            visibility: plan.draft.visibility,
            outline_type: plan.draft.outline_type,
            activity_count: plan.draft.activities.len() as u32,
            milestone_count: plan.draft.milestones.len() as u32,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}
