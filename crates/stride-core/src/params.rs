//! Parameter structures for wizard operations.
//!
//! Interface layers (the CLI today) build these from their own argument types
//! and hand them to [`crate::session::WizardSession`] and the handlers, so the
//! core stays free of argument-parsing concerns:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  WizardSession  │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   / handlers    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use crate::{
    models::{StepId, WizardUpdate},
    wizard::CompleteOptions,
};

/// Parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for completing a step.
#[derive(Debug, Clone, Default)]
pub struct CompleteStep {
    /// Step being completed
    pub step: String,
    /// Data produced by the step, merged before navigation
    pub updates: Option<WizardUpdate>,
    /// Caller overrides for the destination
    pub options: CompleteOptions,
}

impl CompleteStep {
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            ..Default::default()
        }
    }

    /// Attaches updates; an empty update is dropped.
    pub fn with_updates(mut self, updates: WizardUpdate) -> Self {
        self.updates = (!updates.is_empty()).then_some(updates);
        self
    }

    pub fn with_options(mut self, options: CompleteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_next_step(mut self, step: impl Into<StepId>) -> Self {
        self.options.next_step = Some(step.into());
        self
    }
}

/// Parameters for jumping to a step.
#[derive(Debug, Clone, Default)]
pub struct GoToStep {
    /// Destination step
    pub step: String,
    /// Data merged before the jump
    pub updates: Option<WizardUpdate>,
}

impl GoToStep {
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            updates: None,
        }
    }

    /// Attaches updates; an empty update is dropped.
    pub fn with_updates(mut self, updates: WizardUpdate) -> Self {
        self.updates = (!updates.is_empty()).then_some(updates);
        self
    }
}

/// Parameters for editing one section of a plan from the overview.
#[derive(Debug, Clone, Default)]
pub struct EditSection {
    /// Step that owns the section
    pub step: String,
}
