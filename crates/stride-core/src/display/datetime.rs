//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and shown in the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a timestamp as a calendar date (`YYYY-MM-DD`) in the system
/// timezone. Used for finishing dates and milestones, where the time of day
/// carries no meaning.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
        )
    }
}
