//! Enumerations for plan visibility and outline type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who can see a plan once it is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone
    #[default]
    Public,

    /// Visible to friends only
    Friends,

    /// Visible to the owner only
    Private,
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "friends" => Ok(Visibility::Friends),
            "private" => Ok(Visibility::Private),
            _ => Err(format!("Invalid visibility: {s}")),
        }
    }
}

impl Visibility {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Friends => "friends",
            Visibility::Private => "private",
        }
    }
}

/// How the plan's sessions are laid out over the week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutlineType {
    /// A fixed schedule of dated sessions
    Specific,

    /// A weekly target count without fixed dates
    #[default]
    TimesPerWeek,
}

impl FromStr for OutlineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "specific" | "fixed" | "fixed_schedule" | "fixed-schedule" => Ok(OutlineType::Specific),
            "times_per_week" | "times-per-week" | "weekly" => Ok(OutlineType::TimesPerWeek),
            _ => Err(format!("Invalid outline type: {s}")),
        }
    }
}

impl OutlineType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OutlineType::Specific => "specific",
            OutlineType::TimesPerWeek => "times_per_week",
        }
    }

    /// Human readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            OutlineType::Specific => "Fixed schedule",
            OutlineType::TimesPerWeek => "Times per week",
        }
    }
}
