//! Persistent wizard sessions.
//!
//! A [`WizardSession`] binds a step registry to one key of a [`StateStore`].
//! Every operation is a read-modify-write:
//!
//! 1. load the latest `(state, version)` for the key (defaults if absent)
//! 2. run the engine operation on a [`Wizard`] built from it
//! 3. save with the version read in step 1, failing with
//!    [`WizardError::StaleState`](crate::WizardError::StaleState) if another
//!    writer saved in between
//! 4. hand queued events to the [`EventBus`]
//!
//! Events are delivered only after step 3 succeeded.

use std::sync::Arc;

use log::debug;

use crate::{
    error::Result,
    events::{EventBus, EventSink},
    models::{Field, WizardUpdate},
    params::{CompleteStep, EditSection, GoToStep},
    store::StateStore,
    wizard::{Completion, StepRegistry, Wizard},
};

pub mod builder;

pub use builder::WizardBuilder;

/// One wizard run persisted under a fixed key.
pub struct WizardSession {
    registry: Arc<StepRegistry>,
    store: Box<dyn StateStore>,
    key: String,
    bus: EventBus,
}

impl WizardSession {
    pub fn new(
        registry: Arc<StepRegistry>,
        store: Box<dyn StateStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            store,
            key: key.into(),
            bus: EventBus::new(),
        }
    }

    /// Adds an event subscriber.
    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.bus.subscribe(sink);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn registry(&self) -> &Arc<StepRegistry> {
        &self.registry
    }

    /// The wizard as currently persisted (defaults if nothing is stored).
    pub fn load(&self) -> Result<Wizard> {
        Ok(self.load_versioned()?.0)
    }

    fn load_versioned(&self) -> Result<(Wizard, u64)> {
        Ok(match self.store.load(&self.key)? {
            Some(stored) => (
                Wizard::from_state(Arc::clone(&self.registry), stored.state),
                stored.version,
            ),
            None => (Wizard::new(Arc::clone(&self.registry)), 0),
        })
    }

    /// Runs `op` against the latest persisted state and writes the result back.
    pub fn apply<T, F>(&mut self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Wizard) -> T,
    {
        let (mut wizard, version) = self.load_versioned()?;
        let output = op(&mut wizard);

        let events = wizard.take_events();
        let state = wizard.into_state();
        let new_version = self.store.save(&self.key, &state, version)?;
        debug!(
            "Committed '{}' v{} at step '{}'",
            self.key, new_version, state.current_step
        );

        self.bus.dispatch(&events);
        Ok(output)
    }

    pub fn next_step(&mut self) -> Result<bool> {
        self.apply(Wizard::next_step)
    }

    pub fn prev_step(&mut self) -> Result<bool> {
        self.apply(Wizard::prev_step)
    }

    pub fn go_to_step(&mut self, params: GoToStep) -> Result<bool> {
        self.apply(|wizard| wizard.go_to_step(&params.step, params.updates))
    }

    pub fn update(&mut self, update: WizardUpdate) -> Result<()> {
        self.apply(|wizard| wizard.update(update))
    }

    pub fn complete_step(&mut self, params: CompleteStep) -> Result<Completion> {
        let CompleteStep {
            step,
            updates,
            options,
        } = params;
        self.apply(|wizard| wizard.complete_step(&step, updates, options))
    }

    pub fn initialize_for_edit(&mut self, plan_id: u64, data: WizardUpdate) -> Result<()> {
        self.apply(|wizard| wizard.initialize_for_edit(plan_id, data))
    }

    pub fn edit_section(&mut self, params: EditSection) -> Result<bool> {
        self.apply(|wizard| wizard.edit_section(&params.step))
    }

    pub fn finish_section_edit(&mut self) -> Result<bool> {
        self.apply(Wizard::finish_section_edit)
    }

    pub fn changed_fields(&self) -> Result<Vec<Field>> {
        Ok(self.load()?.changed_fields())
    }

    pub fn reset_state(&mut self) -> Result<()> {
        self.apply(Wizard::reset_state)
    }

    /// Drops the persisted state entirely.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear(&self.key)
    }
}
