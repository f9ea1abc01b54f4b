//! Recorded event listing.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::events::WizardEvent;

/// Events oldest first, one per line.
pub struct EventLog(pub Vec<WizardEvent>);

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events recorded.");
        }
        writeln!(f, "## Events")?;
        writeln!(f)?;
        for event in &self.0 {
            writeln!(f, "- {} `{}`", LocalDateTime(&event.at()), event.name())?;
        }
        Ok(())
    }
}
