//! Building blocks of a habit plan: activities, sessions, milestones, coaches.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A trackable activity attached to a plan (e.g. "Running", measured in km).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Identity used for change detection
    pub id: String,

    /// Display title
    pub title: String,

    /// Optional emoji shown next to the title
    #[serde(default)]
    pub emoji: String,

    /// Unit the activity is measured in ("km", "minutes", ...)
    pub measure: String,
}

impl Activity {
    /// Creates an activity whose id is derived from its title.
    ///
    /// Titles without any alphanumeric character (emoji only, say) keep the
    /// trimmed title itself as id.
    pub fn new(title: impl Into<String>, measure: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: slug(&title),
            title,
            emoji: String::new(),
            measure: measure.into(),
        }
    }

    /// Parses the `title:measure[:emoji]` shorthand.
    pub fn parse(shorthand: &str) -> Option<Self> {
        let mut parts = shorthand.splitn(3, ':').map(str::trim);
        let title = parts.next().filter(|t| !t.is_empty())?;
        let measure = parts.next().filter(|m| !m.is_empty()).unwrap_or("times");
        let mut activity = Self::new(title, measure);
        if let Some(emoji) = parts.next() {
            activity.emoji = emoji.to_string();
        }
        Some(activity)
    }
}

fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        return title.trim().to_string();
    }
    slug
}

/// One scheduled occurrence of an activity in a fixed-schedule plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub date: Timestamp,
    pub activity_id: String,
    pub quantity: f64,
    #[serde(default)]
    pub descriptive_guide: String,
}

/// A checkpoint on the way to the plan's goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub description: String,
    #[serde(default)]
    pub date: Option<Timestamp>,
    /// Manual progress in percent
    #[serde(default)]
    pub progress: Option<u8>,
}

impl Milestone {
    /// Creates a milestone with just a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            date: None,
            progress: None,
        }
    }
}

/// The coach selected for a coached plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coach {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}
