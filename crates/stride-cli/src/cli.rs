//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry the clap attributes and convert into core parameter
//! types, so `stride-core` never sees a clap derive:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → WizardSession / handlers
//! ```
//!
//! [`Cli`] owns the session, the plan store and the renderer, and turns each
//! command into one core call followed by one rendered view.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use stride_core::{
    display::{ChangeSet, EventLog, Notice, PlanSummaries, StateSummary, StepList, WizardStatus},
    handle_edit_plan, handle_save_plan,
    models::{Activity, Coach, Milestone, OutlineType, Session, StepId, Visibility, WizardUpdate},
    params::{CompleteStep, EditSection, GoToStep, Id},
    wizard::{CompleteOptions, Completion},
    Database, PlanStore, WizardError, WizardSession,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Plan fields accepted by `set`, `goto` and `complete`.
#[derive(Args, Default)]
pub struct WizardUpdateArgs {
    #[arg(long, help = "What the plan should achieve")]
    pub goal: Option<String>,
    #[arg(long, help = "Emoji shown next to the plan")]
    pub emoji: Option<String>,
    #[arg(long, help = "URL of the background image")]
    pub background_url: Option<String>,
    #[arg(long, conflicts_with = "background_url", help = "Remove the background image")]
    pub no_background: bool,
    #[arg(long, conflicts_with = "no_coach", help = "Work with a coach")]
    pub coached: bool,
    #[arg(long, requires = "coach_name", help = "Identifier of the selected coach")]
    pub coach_id: Option<String>,
    #[arg(long, requires = "coach_id", help = "Display name of the selected coach")]
    pub coach_name: Option<String>,
    #[arg(long, conflicts_with = "coach_id", help = "Work without a coach")]
    pub no_coach: bool,
    #[arg(long, value_enum, help = "Who can see the plan")]
    pub visibility: Option<VisibilityArg>,
    #[arg(long, value_parser = parse_date, help = "Last day of the plan (YYYY-MM-DD)")]
    pub finishing_date: Option<Timestamp>,
    #[arg(long, conflicts_with = "finishing_date", help = "Remove the finishing date")]
    pub no_finishing_date: bool,
    #[arg(
        long = "activity",
        value_parser = parse_activity,
        help = "Activity as title:measure[:emoji]; repeat for several"
    )]
    pub activities: Vec<Activity>,
    #[arg(long, value_enum, help = "Fixed schedule or a weekly target")]
    pub outline: Option<OutlineArg>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(1..=7),
        help = "Weekly target for times-per-week plans (1-7)"
    )]
    pub times_per_week: Option<u8>,
    #[arg(
        long = "session",
        value_parser = parse_session,
        help = "Scheduled session as YYYY-MM-DD:activity-id:quantity[:guide]; repeat for several"
    )]
    pub sessions: Vec<Session>,
    #[arg(
        long = "milestone",
        value_parser = parse_milestone,
        help = "Milestone as description[@YYYY-MM-DD]; repeat for several"
    )]
    pub milestones: Vec<Milestone>,
    #[arg(long, help = "Free-form plan description")]
    pub description: Option<String>,
}

impl From<WizardUpdateArgs> for WizardUpdate {
    fn from(val: WizardUpdateArgs) -> Self {
        let mut update = WizardUpdate {
            goal: val.goal,
            emoji: val.emoji,
            visibility: val.visibility.map(Visibility::from),
            outline_type: val.outline.map(OutlineType::from),
            times_per_week: val.times_per_week,
            description: val.description,
            ..Default::default()
        };

        if val.no_background {
            update.background_image_url = Some(None);
        } else if let Some(url) = val.background_url {
            update.background_image_url = Some(Some(url));
        }

        if val.no_coach {
            update.is_coached = Some(false);
            update.selected_coach_id = Some(None);
            update.selected_coach = Some(None);
        } else if let (Some(id), Some(name)) = (val.coach_id, val.coach_name) {
            update.is_coached = Some(true);
            update.selected_coach_id = Some(Some(id.clone()));
            update.selected_coach = Some(Some(Coach {
                id,
                name,
                title: None,
            }));
        } else if val.coached {
            update.is_coached = Some(true);
        }

        if val.no_finishing_date {
            update.finishing_date = Some(None);
        } else if let Some(date) = val.finishing_date {
            update.finishing_date = Some(Some(date));
        }

        if !val.activities.is_empty() {
            update.activities = Some(val.activities);
        }
        if !val.sessions.is_empty() {
            update.generated_sessions = Some(val.sessions);
        }
        if !val.milestones.is_empty() {
            update.milestones = Some(val.milestones);
        }
        update
    }
}

/// Jump to a step by id
#[derive(Args)]
pub struct GoToArgs {
    #[arg(help = "Id of the step to jump to")]
    pub step: String,
    #[command(flatten)]
    pub updates: WizardUpdateArgs,
}

impl From<GoToArgs> for GoToStep {
    fn from(val: GoToArgs) -> Self {
        GoToStep::new(val.step).with_updates(val.updates.into())
    }
}

/// Complete a step and move on
///
/// Records the step as completed, merges any plan fields given, then moves to
/// `--next-step`, stays put with `--finish`, or follows the wizard's own
/// branching.
#[derive(Args)]
pub struct CompleteArgs {
    #[arg(help = "Id of the step to complete; defaults to the current step")]
    pub step: Option<String>,
    #[arg(long, conflicts_with = "finish", help = "Go to this step afterwards")]
    pub next_step: Option<String>,
    #[arg(long, help = "Mark the whole wizard as finished")]
    pub finish: bool,
    #[command(flatten)]
    pub updates: WizardUpdateArgs,
}

impl CompleteArgs {
    /// Converts to core parameters, completing `current` when no step is given.
    pub fn into_params(self, current: &StepId) -> CompleteStep {
        let options = match (self.next_step, self.finish) {
            (Some(step), _) => CompleteOptions::jump_to(step),
            (None, true) => CompleteOptions::finish(),
            (None, false) => CompleteOptions::default(),
        };
        CompleteStep::new(self.step.unwrap_or_else(|| current.to_string()))
            .with_updates(self.updates.into())
            .with_options(options)
    }
}

/// Open a saved plan for editing
#[derive(Args)]
pub struct EditArgs {
    #[arg(help = "Unique identifier of the plan to edit")]
    pub id: u64,
}

impl From<EditArgs> for Id {
    fn from(val: EditArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit one section of the plan from the overview
#[derive(Args)]
pub struct SectionArgs {
    #[arg(help = "Step owning the section; omit to return to the overview")]
    pub step: Option<String>,
}

/// Show a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show recorded wizard events
#[derive(Args)]
pub struct EventsArgs {
    #[arg(short, long, default_value_t = 20, help = "Number of most recent events")]
    pub limit: u32,
}

/// Command-line representation of plan visibility
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum VisibilityArg {
    /// Visible to everyone
    Public,
    /// Visible to friends only
    Friends,
    /// Visible to you only
    Private,
}

impl From<VisibilityArg> for Visibility {
    fn from(val: VisibilityArg) -> Self {
        match val {
            VisibilityArg::Public => Visibility::Public,
            VisibilityArg::Friends => Visibility::Friends,
            VisibilityArg::Private => Visibility::Private,
        }
    }
}

/// Command-line representation of the outline type
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutlineArg {
    /// A fixed schedule of dated sessions
    Specific,
    /// A weekly target count
    TimesPerWeek,
}

impl From<OutlineArg> for OutlineType {
    fn from(val: OutlineArg) -> Self {
        match val {
            OutlineArg::Specific => OutlineType::Specific,
            OutlineArg::TimesPerWeek => OutlineType::TimesPerWeek,
        }
    }
}

/// Midnight of a calendar date in the system timezone.
fn parse_date(s: &str) -> Result<Timestamp, String> {
    let date: Date = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))?;
    date.to_zoned(TimeZone::system())
        .map(|zoned| zoned.timestamp())
        .map_err(|e| format!("invalid date '{s}': {e}"))
}

fn parse_activity(s: &str) -> Result<Activity, String> {
    Activity::parse(s).ok_or_else(|| format!("invalid activity '{s}' (expected title:measure)"))
}

fn parse_session(s: &str) -> Result<Session, String> {
    let mut parts = s.splitn(4, ':').map(str::trim);
    let (Some(date), Some(activity_id), Some(quantity)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!(
            "invalid session '{s}' (expected YYYY-MM-DD:activity-id:quantity)"
        ));
    };
    let quantity: f64 = quantity
        .parse()
        .map_err(|_| format!("invalid session quantity '{quantity}'"))?;
    Ok(Session {
        date: parse_date(date)?,
        activity_id: activity_id.to_string(),
        quantity,
        descriptive_guide: parts.next().unwrap_or_default().to_string(),
    })
}

fn parse_milestone(s: &str) -> Result<Milestone, String> {
    match s.rsplit_once('@') {
        Some((description, date)) => {
            let mut milestone = Milestone::new(description.trim());
            milestone.date = Some(parse_date(date)?);
            Ok(milestone)
        }
        None => Ok(Milestone::new(s.trim())),
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs one command against the wizard session and plan store.
pub struct Cli {
    session: WizardSession,
    plans: PlanStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: WizardSession, plans: PlanStore, renderer: TerminalRenderer) -> Self {
        Self {
            session,
            plans,
            renderer,
        }
    }

    fn render_status(&self) -> Result<()> {
        let wizard = self.session.load().context("Failed to load wizard state")?;
        self.renderer.render(&WizardStatus(&wizard).to_string())
    }

    pub fn status(&self) -> Result<()> {
        self.render_status()
    }

    pub fn steps(&self) -> Result<()> {
        let wizard = self.session.load().context("Failed to load wizard state")?;
        self.renderer.render(&StepList(&wizard).to_string())
    }

    pub fn next(&mut self) -> Result<()> {
        if self.session.next_step().context("Failed to move forward")? {
            self.render_status()
        } else {
            self.renderer.notice(&Notice::info("Already at the last step."))
        }
    }

    pub fn prev(&mut self) -> Result<()> {
        if self.session.prev_step().context("Failed to move back")? {
            self.render_status()
        } else {
            self.renderer.notice(&Notice::info("Already at the first step."))
        }
    }

    pub fn goto(&mut self, args: GoToArgs) -> Result<()> {
        let params = GoToStep::from(args);
        if !self
            .session
            .go_to_step(params.clone())
            .context("Failed to change step")?
        {
            bail!("Unknown step '{}'", params.step);
        }
        self.render_status()
    }

    pub fn set(&mut self, args: WizardUpdateArgs) -> Result<()> {
        let update = WizardUpdate::from(args);
        if update.is_empty() {
            return self.renderer.notice(&Notice::info("Nothing to update."));
        }
        self.session.update(update).context("Failed to update wizard state")?;

        let wizard = self.session.load().context("Failed to load wizard state")?;
        self.renderer.notice(&Notice::success("Updated."))?;
        self.renderer.render(&StateSummary(wizard.state()).to_string())
    }

    pub fn complete(&mut self, args: CompleteArgs) -> Result<()> {
        let current = self
            .session
            .load()
            .context("Failed to load wizard state")?
            .current_step()
            .clone();
        let params = args.into_params(&current);
        let step = params.step.clone();

        match self
            .session
            .complete_step(params)
            .context("Failed to complete step")?
        {
            Completion::Advanced(_) => {
                self.renderer
                    .notice(&Notice::success(format!("Completed '{step}'.")))?;
                self.render_status()
            }
            Completion::Finished => self.renderer.notice(&Notice::success(
                "Wizard finished. Run `stride save` to store the plan.",
            )),
            Completion::Stayed => self.renderer.notice(&Notice::info(format!(
                "Completed '{step}'; no further step."
            ))),
            Completion::Ignored => bail!("Unknown step '{step}'"),
        }
    }

    pub async fn edit(&mut self, args: EditArgs) -> Result<()> {
        let plan = handle_edit_plan(&mut self.session, &self.plans, &args.into())
            .await
            .context("Failed to open plan for editing")?;
        self.renderer
            .notice(&Notice::success(format!("Editing plan {}.", plan.id)))?;
        self.render_status()
    }

    pub fn section(&mut self, args: SectionArgs) -> Result<()> {
        match args.step {
            Some(step) => {
                let params = EditSection { step: step.clone() };
                if !self
                    .session
                    .edit_section(params)
                    .context("Failed to open section")?
                {
                    bail!("Cannot edit section '{step}': not editing a plan or unknown step");
                }
                self.render_status()
            }
            None => {
                if self
                    .session
                    .finish_section_edit()
                    .context("Failed to close section")?
                {
                    self.render_status()
                } else {
                    self.renderer.notice(&Notice::info("Not editing a section."))
                }
            }
        }
    }

    pub fn changes(&self) -> Result<()> {
        let wizard = self.session.load().context("Failed to load wizard state")?;
        self.renderer.render(&ChangeSet(&wizard).to_string())
    }

    pub async fn save(&mut self) -> Result<()> {
        let outcome = handle_save_plan(&mut self.session, &self.plans)
            .await
            .context("Failed to save plan; the wizard state was kept")?;
        self.renderer.render(&outcome.to_string())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.session.reset_state().context("Failed to reset wizard")?;
        self.renderer.notice(&Notice::success("Wizard reset."))
    }

    pub async fn plans(&self) -> Result<()> {
        let plans = self.plans.list_plans().await.context("Failed to list plans")?;
        self.renderer.render(&PlanSummaries(plans).to_string())
    }

    pub async fn show(&self, args: ShowPlanArgs) -> Result<()> {
        let params = Id::from(args);
        let plan = self
            .plans
            .get_plan(&params)
            .await
            .context("Failed to load plan")?
            .ok_or(WizardError::PlanNotFound { id: params.id })?;
        self.renderer.render(&plan.to_string())
    }

    pub fn events(&self, args: EventsArgs) -> Result<()> {
        let db = Database::new(self.plans.database_path()).context("Failed to open database")?;
        let events = db.recent_events(args.limit).context("Failed to read events")?;
        self.renderer.render(&EventLog(events).to_string())
    }
}
