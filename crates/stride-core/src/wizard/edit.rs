//! Edit mode: opening an existing plan and tracking what changed.

use log::warn;

use super::Wizard;
use crate::{
    events::WizardEvent,
    models::{Field, OriginalValues, StepId, WizardState, WizardUpdate},
};

/// Step shown when an existing plan is opened for editing.
pub const OVERVIEW_STEP: &str = "overview";

impl Wizard {
    /// Resets the wizard, overlays `data` and captures the change baseline.
    ///
    /// Lands on the overview step (or the last step if the registry has no
    /// overview). The captured [`OriginalValues`] stay untouched until the
    /// next reset.
    pub fn initialize_for_edit(&mut self, plan_id: u64, data: WizardUpdate) {
        let mut state = WizardState::new(self.registry.first().id.clone());
        state.apply(data);
        state.editing_plan_id = Some(plan_id);
        state.original_values = Some(OriginalValues::capture(&state));
        state.current_step = if self.registry.contains(OVERVIEW_STEP) {
            StepId::new(OVERVIEW_STEP)
        } else {
            let last = self.registry.len() - 1;
            self.registry
                .step_at(last)
                .unwrap_or(self.registry.first())
                .id
                .clone()
        };
        self.state = state;

        let wizard = self.registry.name().to_string();
        self.emit(WizardEvent::edit_started(&wizard, plan_id));
    }

    /// Opens one section of the plan from the overview.
    pub fn edit_section(&mut self, step: &str) -> bool {
        if !self.state.is_editing() {
            warn!("Ignoring section edit of '{step}' outside edit mode");
            return false;
        }
        if !self.registry.contains(step) {
            warn!("Ignoring section edit of unknown step '{step}'");
            return false;
        }
        let step = StepId::new(step);
        self.state.editing_section = Some(step.clone());
        self.state.current_step = step;
        true
    }

    /// Returns to the overview after editing a section.
    pub fn finish_section_edit(&mut self) -> bool {
        if self.state.editing_section.is_none() || !self.registry.contains(OVERVIEW_STEP) {
            return false;
        }
        self.land_on(StepId::new(OVERVIEW_STEP));
        true
    }

    pub fn original_values(&self) -> Option<&OriginalValues> {
        self.state.original_values.as_ref()
    }

    /// Whether `field` differs from the edit baseline; always `false` when not
    /// editing.
    pub fn is_field_changed(&self, field: Field) -> bool {
        self.original_values()
            .is_some_and(|original| original.is_changed(field, &self.state))
    }

    /// Every field that differs from the edit baseline.
    pub fn changed_fields(&self) -> Vec<Field> {
        self.original_values()
            .map(|original| original.changed_fields(&self.state))
            .unwrap_or_default()
    }
}
