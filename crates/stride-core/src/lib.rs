//! Core library for the Stride habit plan creation wizard.
//!
//! The wizard walks a user through a fixed graph of steps (goal, emoji,
//! coaching, activities, outline, milestones, overview), collecting one
//! [`WizardState`] along the way. This crate provides:
//!
//! - the step graph and navigation engine ([`wizard`], [`plan_wizard`])
//! - durable, versioned state persistence ([`store`], [`session`])
//! - edit mode with per-field change detection
//! - analytics events delivered after every committed transition ([`events`])
//! - an async store for finished plans ([`plans`], [`handlers`])
//! - markdown views for terminal output ([`display`])
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{
//!     models::WizardUpdate,
//!     params::CompleteStep,
//!     plan_wizard::{EMOJI, GOAL},
//!     WizardBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = WizardBuilder::new().in_memory().build()?;
//!
//! session.complete_step(
//!     CompleteStep::new(GOAL).with_updates(WizardUpdate::goal("Run a 10k")),
//! )?;
//!
//! let wizard = session.load()?;
//! assert_eq!(wizard.state().goal, "Run a 10k");
//! assert_eq!(wizard.current_step(), EMOJI);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod params;
pub mod plan_wizard;
pub mod plans;
pub mod session;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use db::Database;
pub use display::{ChangeSet, Notice, PlanSummaries, StepList, WizardStatus};
pub use error::{Result, WizardError};
pub use events::{EventBus, EventSink, WizardEvent};
pub use handlers::{handle_edit_plan, handle_save_plan, SaveOutcome};
pub use models::{Field, PlanDraft, PlanSummary, SavedPlan, StepId, WizardState, WizardUpdate};
pub use params::{CompleteStep, EditSection, GoToStep, Id};
pub use plans::{PlanStore, PlanStoreBuilder};
pub use session::{WizardBuilder, WizardSession};
pub use store::{MemoryStateStore, SqliteStateStore, StateStore};
pub use wizard::{CompleteOptions, Completion, StepDescriptor, StepRegistry, Transition, Wizard};
