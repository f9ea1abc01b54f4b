//! Step navigation engine for the plan wizard.
//!
//! A [`Wizard`] pairs a static [`StepRegistry`] with one [`WizardState`]. All
//! operations are synchronous and infallible: unknown step ids and missing
//! transitions degrade to no-ops, logged at `warn`. Persistence and event
//! delivery happen one layer up, in [`crate::session::WizardSession`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  StepRegistry   │    │     Wizard      │    │  WizardSession  │
//! │ (descriptors,   │───▶│ (navigation,    │───▶│ (store, version │
//! │  transitions)   │    │  completion)    │    │  check, events) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`registry`]: step descriptors, [`Transition`] and
//!   [`resolve_step_navigation`]
//! - [`navigation`]: index, progress, next/previous/go-to
//! - [`completion`]: `complete_step` and its destination rules
//! - [`edit`]: edit-mode entry and change detection
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use stride_core::{
//!     models::WizardUpdate,
//!     wizard::{CompleteOptions, StepDescriptor, StepRegistry, Wizard},
//! };
//!
//! let registry = StepRegistry::new(
//!     "create-plan",
//!     vec![
//!         StepDescriptor::new("goal", "Goal"),
//!         StepDescriptor::new("activities", "Activities"),
//!         StepDescriptor::new("overview", "Overview"),
//!     ],
//! )
//! .unwrap();
//!
//! let mut wizard = Wizard::new(Arc::new(registry));
//! wizard.complete_step("goal", Some(WizardUpdate::goal("Run 5k")), CompleteOptions::default());
//!
//! assert_eq!(wizard.current_step(), "activities");
//! assert_eq!(wizard.state().goal, "Run 5k");
//! ```

use std::sync::Arc;

use jiff::Timestamp;
use log::warn;

use crate::{
    events::WizardEvent,
    models::{Activity, Coach, Milestone, OutlineType, StepId, Visibility, WizardState, WizardUpdate},
};

pub mod completion;
pub mod edit;
pub mod navigation;
pub mod registry;


pub use completion::{CompleteOptions, Completion};
pub use edit::OVERVIEW_STEP;
pub use registry::{resolve_step_navigation, Resolver, StepDescriptor, StepRegistry, Transition};

/// One wizard run: a registry and the state being collected.
#[derive(Debug, Clone)]
pub struct Wizard {
    registry: Arc<StepRegistry>,
    state: WizardState,
    events: Vec<WizardEvent>,
}

impl Wizard {
    /// Starts a fresh wizard on the registry's first step.
    pub fn new(registry: Arc<StepRegistry>) -> Self {
        let state = WizardState::new(registry.first().id.clone());
        Self {
            registry,
            state,
            events: Vec::new(),
        }
    }

    /// Starts a fresh wizard on `initial_step`, or on the first step when the
    /// id is not registered.
    pub fn with_initial_step(registry: Arc<StepRegistry>, initial_step: &str) -> Self {
        let mut wizard = Self::new(registry);
        if wizard.registry.contains(initial_step) {
            wizard.state.current_step = StepId::new(initial_step);
        } else {
            warn!("Unknown initial step '{initial_step}', starting at the first step");
        }
        wizard
    }

    /// Resumes from hydrated state.
    ///
    /// A persisted `current_step` that the registry no longer knows is moved
    /// back to the first step.
    pub fn from_state(registry: Arc<StepRegistry>, mut state: WizardState) -> Self {
        if !registry.contains(state.current_step.as_str()) {
            warn!(
                "Persisted step '{}' is not part of wizard '{}', restarting at '{}'",
                state.current_step,
                registry.name(),
                registry.first().id
            );
            state.current_step = registry.first().id.clone();
        }
        Self {
            registry,
            state,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn into_state(self) -> WizardState {
        self.state
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Drains the events queued by operations since the last call.
    pub fn take_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: WizardEvent) {
        self.events.push(event);
    }

    /// Merges `update` without navigating.
    pub fn update(&mut self, update: WizardUpdate) {
        self.state.apply(update);
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.state.goal = goal.into();
    }

    pub fn set_emoji(&mut self, emoji: impl Into<String>) {
        self.state.emoji = emoji.into();
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.state.visibility = visibility;
    }

    pub fn set_finishing_date(&mut self, date: Option<Timestamp>) {
        self.state.finishing_date = date;
    }

    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.state.activities = activities;
    }

    pub fn set_milestones(&mut self, milestones: Vec<Milestone>) {
        self.state.milestones = milestones;
    }

    pub fn set_outline_type(&mut self, outline_type: OutlineType) {
        self.state.outline_type = outline_type;
    }

    pub fn set_times_per_week(&mut self, times: u8) {
        self.state.times_per_week = times;
    }

    /// Selects a coach and marks the plan as coached; `None` removes coaching.
    pub fn set_coach(&mut self, coach: Option<Coach>) {
        self.state.is_coached = coach.is_some();
        self.state.selected_coach_id = coach.as_ref().map(|c| c.id.clone());
        self.state.selected_coach = coach;
    }

    /// Restores every field to its default and clears completed steps.
    pub fn reset_state(&mut self) {
        self.state = WizardState::new(self.registry.first().id.clone());
        self.emit(WizardEvent::reset(self.registry.name()));
    }
}
