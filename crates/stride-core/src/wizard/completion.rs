//! Marking steps done and choosing where to go next.

use log::warn;

use super::Wizard;
use crate::{
    events::WizardEvent,
    models::{StepId, WizardUpdate},
};

/// Caller overrides for [`Wizard::complete_step`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompleteOptions {
    /// Go here instead of the step's own transition.
    pub next_step: Option<StepId>,
    /// The flow is over; stay where we are and let the caller move on.
    pub complete: bool,
}

impl CompleteOptions {
    pub fn jump_to(step: impl Into<StepId>) -> Self {
        Self {
            next_step: Some(step.into()),
            complete: false,
        }
    }

    pub fn finish() -> Self {
        Self {
            next_step: None,
            complete: true,
        }
    }
}

/// What `complete_step` did after recording the completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Moved to this step
    Advanced(StepId),
    /// Caller declared the flow finished; no navigation
    Finished,
    /// No destination; stayed on the current step
    Stayed,
    /// The step id is not registered; nothing changed
    Ignored,
}

impl Wizard {
    /// Records `step` as completed, merges `updates`, then navigates.
    ///
    /// Destination priority: `options.next_step`, then `options.complete`
    /// (stay), then the step's `next` transition evaluated against the
    /// merged state, then the following step in registry order.
    pub fn complete_step(
        &mut self,
        step: &str,
        updates: Option<WizardUpdate>,
        options: CompleteOptions,
    ) -> Completion {
        if !self.registry.contains(step) {
            warn!("Ignoring completion of unknown step '{step}'");
            return Completion::Ignored;
        }

        let step_id = StepId::new(step);
        self.state.completed_steps.insert(step_id.clone());

        if let Some(updates) = updates {
            self.state.apply(updates);
        }

        let outcome = if let Some(target) = options.next_step {
            if self.registry.contains(target.as_str()) {
                self.land_on(target.clone());
                Completion::Advanced(target)
            } else {
                warn!("Ignoring explicit next step '{target}' after '{step}': not registered");
                Completion::Stayed
            }
        } else if options.complete {
            Completion::Finished
        } else {
            match self.next_destination(step) {
                Some(target) => {
                    self.land_on(target.clone());
                    Completion::Advanced(target)
                }
                None => Completion::Stayed,
            }
        };

        let wizard = self.registry.name().to_string();
        self.emit(WizardEvent::step_completed(&wizard, step_id));
        if outcome == Completion::Finished {
            self.emit(WizardEvent::finished(&wizard));
        }

        outcome
    }
}
