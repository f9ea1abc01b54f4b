//! Data models for the plan wizard.
//!
//! - [`WizardState`]: everything the wizard has collected so far, plus the
//!   current step and the set of completed steps.
//! - [`WizardUpdate`]: a partial merge applied by setters and step completion.
//! - [`OriginalValues`]: the frozen edit-mode baseline used for "changed"
//!   indicators.
//! - [`PlanDraft`] / [`SavedPlan`]: the validated payload handed to the plan
//!   store and the stored record.
//!
//! Display implementations live in [`crate::display`].

mod habit;
mod plan;
mod snapshot;
mod state;
mod status;
mod step;
mod summary;

#[cfg(test)]
mod tests;

pub use habit::{Activity, Coach, Milestone, Session};
pub use plan::{PlanDraft, SavedPlan};
pub use snapshot::{collection_changed, date_changed, Field, OriginalValues};
pub use state::{WizardState, WizardUpdate, DEFAULT_TIMES_PER_WEEK};
pub use status::{OutlineType, Visibility};
pub use step::StepId;
pub use summary::PlanSummary;
