//! Position, progress and movement between steps.

use log::{debug, warn};

use super::{registry::resolve_step_navigation, Wizard, OVERVIEW_STEP};
use crate::models::{StepId, WizardUpdate};

/// Direction of a resolved move.
#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

impl Wizard {
    pub fn current_step(&self) -> &StepId {
        &self.state.current_step
    }

    /// Position of the current step, `None` if it is not registered.
    pub fn current_step_index(&self) -> Option<usize> {
        self.registry.position(self.state.current_step.as_str())
    }

    pub fn total_steps(&self) -> usize {
        self.registry.len()
    }

    /// Percentage through the registry, counting the current step as done.
    pub fn progress(&self) -> f64 {
        let total = self.total_steps();
        match self.current_step_index() {
            Some(index) if total > 0 => (index + 1) as f64 / total as f64 * 100.0,
            _ => 0.0,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step_index() == Some(0)
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step_index() == Some(self.total_steps().saturating_sub(1))
    }

    pub fn has_next_step(&self) -> bool {
        self.destination_from(self.state.current_step.as_str(), Direction::Forward)
            .is_some()
    }

    pub fn has_previous_step(&self) -> bool {
        self.destination_from(self.state.current_step.as_str(), Direction::Backward)
            .is_some()
    }

    /// Moves forward. Returns whether the current step changed.
    pub fn next_step(&mut self) -> bool {
        let from = self.state.current_step.clone();
        match self.destination_from(from.as_str(), Direction::Forward) {
            Some(to) => {
                self.land_on(to);
                true
            }
            None => false,
        }
    }

    /// Moves backward. Returns whether the current step changed.
    pub fn prev_step(&mut self) -> bool {
        let from = self.state.current_step.clone();
        match self.destination_from(from.as_str(), Direction::Backward) {
            Some(to) => {
                self.land_on(to);
                true
            }
            None => false,
        }
    }

    /// Jumps to `step`, merging `updates` first. Unknown ids are ignored.
    pub fn go_to_step(&mut self, step: &str, updates: Option<WizardUpdate>) -> bool {
        if !self.registry.contains(step) {
            warn!("Ignoring jump to unknown step '{step}'");
            return false;
        }
        if let Some(updates) = updates {
            self.state.apply(updates);
        }
        self.land_on(StepId::new(step));
        true
    }

    /// Forward destination of `from`: its own `next` transition first, then
    /// the following step in registry order.
    pub(crate) fn next_destination(&self, from: &str) -> Option<StepId> {
        self.destination_from(from, Direction::Forward)
    }

    fn destination_from(&self, from: &str, direction: Direction) -> Option<StepId> {
        let index = self.registry.position(from)?;
        let descriptor = self.registry.step_at(index)?;

        let transition = match direction {
            Direction::Forward => descriptor.next.as_ref(),
            Direction::Backward => descriptor.previous.as_ref(),
        };

        if let Some(resolved) = resolve_step_navigation(transition, &self.state) {
            if self.registry.contains(resolved.as_str()) {
                return Some(resolved);
            }
            warn!("Step '{from}' resolved to unknown step '{resolved}', using registry order");
        }

        let target = match direction {
            Direction::Forward => index.checked_add(1)?,
            Direction::Backward => index.checked_sub(1)?,
        };
        self.registry.step_at(target).map(|step| step.id.clone())
    }

    /// Sets the current step. Arriving at the overview ends a section edit.
    pub(crate) fn land_on(&mut self, step: StepId) {
        debug!("{}: {} -> {}", self.registry.name(), self.state.current_step, step);
        if step == OVERVIEW_STEP {
            self.state.editing_section = None;
        }
        self.state.current_step = step;
    }
}
