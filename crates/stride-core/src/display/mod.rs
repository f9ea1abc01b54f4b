//! Markdown formatting for terminal output.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`plans`]);
//! views that need more context than one value are newtype wrappers:
//!
//! - [`WizardStatus`]: current step, progress and the collected fields
//! - [`StepList`]: every step with completion markers
//! - [`ChangeSet`]: fields changed since an edit started
//! - [`PlanSummaries`]: saved plan listing
//! - [`EventLog`]: recorded analytics events
//! - [`Notice`]: one-line success, info and error messages

pub mod changes;
pub mod datetime;
pub mod events;
pub mod plans;
pub mod status;
pub mod wizard;

pub use changes::ChangeSet;
pub use datetime::{LocalDate, LocalDateTime};
pub use events::EventLog;
pub use plans::PlanSummaries;
pub use status::{Notice, NoticeKind};
pub use wizard::{StateSummary, StepList, WizardStatus};
