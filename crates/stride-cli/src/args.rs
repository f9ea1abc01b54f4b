use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CompleteArgs, EditArgs, EventsArgs, GoToArgs, SectionArgs, ShowPlanArgs, WizardUpdateArgs,
};

/// Build a habit plan one wizard step at a time
///
/// Stride keeps the state of the plan creation wizard in a local SQLite
/// database, so every command picks up where the previous one left off. Run
/// without a command to see the current step.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Storage key of the wizard run. Defaults to create-plan-wizard
    #[arg(long, global = true)]
    pub key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// Navigation commands (`next`, `prev`, `goto`, `complete`) move through the
/// wizard; `set` only records data; `edit`, `section` and `changes` work on an
/// existing plan; `save` hands the collected plan to the plan store.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current step and the plan collected so far
    #[command(alias = "st")]
    Status,
    /// List every wizard step with its progress marker
    Steps,
    /// Move to the next step
    #[command(alias = "n")]
    Next,
    /// Move to the previous step
    #[command(alias = "p")]
    Prev,
    /// Jump to a step by id
    #[command(alias = "g")]
    Goto(GoToArgs),
    /// Record plan data without moving
    Set(WizardUpdateArgs),
    /// Complete a step and move on
    #[command(alias = "c")]
    Complete(CompleteArgs),
    /// Open a saved plan for editing
    Edit(EditArgs),
    /// Edit one section of the plan from the overview
    Section(SectionArgs),
    /// Show fields changed since the plan was opened for editing
    Changes,
    /// Save the collected plan and start over
    Save,
    /// Discard the collected data and start over
    Reset,
    /// List saved plans
    Plans,
    /// Show a saved plan
    Show(ShowPlanArgs),
    /// Show recorded wizard events
    Events(EventsArgs),
}
