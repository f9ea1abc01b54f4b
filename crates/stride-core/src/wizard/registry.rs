//! Static step graph: ordered descriptors with optional transitions.

use std::{collections::HashSet, fmt, sync::Arc};

use crate::{
    error::{Result, WizardError},
    models::{StepId, WizardState},
};

/// Function from the current state to a step id, `None` meaning "use the
/// positional default".
pub type Resolver = Arc<dyn Fn(&WizardState) -> Option<StepId> + Send + Sync>;

/// Where a step leads: a fixed step id or a state-dependent choice.
#[derive(Clone)]
pub enum Transition {
    Literal(StepId),
    Resolver(Resolver),
}

impl Transition {
    /// Always go to `step`.
    pub fn to(step: impl Into<StepId>) -> Self {
        Transition::Literal(step.into())
    }

    /// Choose the step from the current state.
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&WizardState) -> Option<StepId> + Send + Sync + 'static,
    {
        Transition::Resolver(Arc::new(f))
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Literal(id) => f.debug_tuple("Literal").field(id).finish(),
            Transition::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Resolves an optional transition against `state`.
///
/// A resolver is invoked and its answer returned as is; a literal is returned
/// unchanged; an absent transition yields `None`.
pub fn resolve_step_navigation(nav: Option<&Transition>, state: &WizardState) -> Option<StepId> {
    match nav? {
        Transition::Literal(id) => Some(id.clone()),
        Transition::Resolver(resolve) => resolve(state),
    }
}

/// One step of the wizard.
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    pub id: StepId,
    pub title: String,
    pub summary: Option<String>,
    pub next: Option<Transition>,
    pub previous: Option<Transition>,
}

impl StepDescriptor {
    pub fn new(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: None,
            next: None,
            previous: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_next(mut self, next: Transition) -> Self {
        self.next = Some(next);
        self
    }

    pub fn with_previous(mut self, previous: Transition) -> Self {
        self.previous = Some(previous);
        self
    }
}

/// Ordered, named list of steps.
#[derive(Debug, Clone)]
pub struct StepRegistry {
    name: String,
    steps: Vec<StepDescriptor>,
}

impl StepRegistry {
    /// Builds a registry.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for an empty step list or a
    /// duplicated step id.
    pub fn new(name: impl Into<String>, steps: Vec<StepDescriptor>) -> Result<Self> {
        if steps.is_empty() {
            return Err(WizardError::invalid_input("steps")
                .with_reason("A wizard needs at least one step"));
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id.as_str()) {
                return Err(WizardError::invalid_input("steps")
                    .with_reason(format!("Duplicate step id '{}'", step.id)));
            }
        }

        Ok(Self {
            name: name.into(),
            steps,
        })
    }

    /// Wizard name, used as the analytics event prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn first(&self) -> &StepDescriptor {
        &self.steps[0]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&StepDescriptor> {
        self.steps.iter().find(|step| step.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn step_at(&self, index: usize) -> Option<&StepDescriptor> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.steps.iter()
    }
}
