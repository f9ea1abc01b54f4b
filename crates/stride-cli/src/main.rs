//! Stride CLI Application
//!
//! Drives the habit plan creation wizard from the terminal. Wizard state and
//! saved plans share one SQLite database.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stride_core::{PlanStoreBuilder, WizardBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        key,
        command,
    } = Args::parse();

    let plans = PlanStoreBuilder::new()
        .with_database_path(database_file.as_ref())
        .build()
        .await
        .context("Failed to initialize plan store")?;

    let session = WizardBuilder::new()
        .with_database_path(Some(plans.database_path()))
        .with_key(key)
        .record_events(true)
        .build()
        .context("Failed to open wizard state")?;

    info!("Stride started with key '{}'", session.key());

    let mut cli = Cli::new(session, plans, TerminalRenderer::new(!no_color));

    match command {
        None | Some(Status) => cli.status(),
        Some(Steps) => cli.steps(),
        Some(Next) => cli.next(),
        Some(Prev) => cli.prev(),
        Some(Goto(args)) => cli.goto(args),
        Some(Set(args)) => cli.set(args),
        Some(Complete(args)) => cli.complete(args),
        Some(Edit(args)) => cli.edit(args).await,
        Some(Section(args)) => cli.section(args),
        Some(Changes) => cli.changes(),
        Some(Save) => cli.save().await,
        Some(Reset) => cli.reset(),
        Some(Plans) => cli.plans().await,
        Some(Show(args)) => cli.show(args).await,
        Some(Events(args)) => cli.events(args),
    }
}
