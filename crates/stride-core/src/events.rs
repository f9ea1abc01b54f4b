//! Wizard events and their subscribers.
//!
//! The engine only queues [`WizardEvent`]s. A [`crate::session::WizardSession`]
//! hands them to an [`EventBus`] after the new state has been written, so a
//! failing or slow subscriber can never undo or hold back a transition.

use std::path::Path;

use jiff::Timestamp;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{db::Database, error::Result, models::StepId};

/// Something that happened in a wizard run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardEvent {
    StepCompleted {
        wizard: String,
        step: StepId,
        at: Timestamp,
    },
    Finished {
        wizard: String,
        at: Timestamp,
    },
    EditStarted {
        wizard: String,
        plan_id: u64,
        at: Timestamp,
    },
    Reset {
        wizard: String,
        at: Timestamp,
    },
}

impl WizardEvent {
    pub fn step_completed(wizard: &str, step: StepId) -> Self {
        WizardEvent::StepCompleted {
            wizard: wizard.to_string(),
            step,
            at: Timestamp::now(),
        }
    }

    pub fn finished(wizard: &str) -> Self {
        WizardEvent::Finished {
            wizard: wizard.to_string(),
            at: Timestamp::now(),
        }
    }

    pub fn edit_started(wizard: &str, plan_id: u64) -> Self {
        WizardEvent::EditStarted {
            wizard: wizard.to_string(),
            plan_id,
            at: Timestamp::now(),
        }
    }

    pub fn reset(wizard: &str) -> Self {
        WizardEvent::Reset {
            wizard: wizard.to_string(),
            at: Timestamp::now(),
        }
    }

    /// Analytics name, e.g. `create-plan-goal-completed`.
    pub fn name(&self) -> String {
        match self {
            WizardEvent::StepCompleted { wizard, step, .. } => format!("{wizard}-{step}-completed"),
            WizardEvent::Finished { wizard, .. } => format!("{wizard}-completed"),
            WizardEvent::EditStarted { wizard, .. } => format!("{wizard}-edit-started"),
            WizardEvent::Reset { wizard, .. } => format!("{wizard}-reset"),
        }
    }

    pub fn at(&self) -> Timestamp {
        match self {
            WizardEvent::StepCompleted { at, .. }
            | WizardEvent::Finished { at, .. }
            | WizardEvent::EditStarted { at, .. }
            | WizardEvent::Reset { at, .. } => *at,
        }
    }
}

/// Receiver of wizard events, e.g. an analytics client.
pub trait EventSink: Send {
    fn emit(&self, event: &WizardEvent) -> Result<()>;
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &WizardEvent) -> Result<()> {
        info!("event: {}", event.name());
        Ok(())
    }
}

/// Appends events to the `wizard_events` table.
pub struct SqliteEventSink {
    db: Database,
}

impl SqliteEventSink {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            db: Database::new(path)?,
        })
    }

    pub fn from_database(db: Database) -> Self {
        Self { db }
    }
}

impl EventSink for SqliteEventSink {
    fn emit(&self, event: &WizardEvent) -> Result<()> {
        self.db.insert_event(event)
    }
}

/// Fan-out to any number of sinks. Sink failures are logged and dropped.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn dispatch(&self, events: &[WizardEvent]) {
        for event in events {
            for sink in &self.sinks {
                if let Err(e) = sink.emit(event) {
                    warn!("Dropping event '{}': {e}", event.name());
                }
            }
        }
    }
}
