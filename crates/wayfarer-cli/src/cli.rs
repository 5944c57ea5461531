//! Command-line argument wrappers and the command handler.
//!
//! Each clap `Args` struct converts into the matching core parameter type, so
//! clap attributes never leak into `wayfarer_core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → PlanStore
//! ```
//!
//! [`Cli`] owns the store and the session state and renders every result,
//! either as markdown through the [`TerminalRenderer`] or as JSON.

use std::fmt;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use wayfarer_core::{
    display::{Footprints, Itinerary, MapView, Plans, Profile},
    overlay::{footprints_for, itinerary_for},
    params::{CreatePlan, EditPlan, EditProfile, Id, ListPlans, Login, TransitionPlan},
    AuthSession, ChatSession, CreateResult, DeleteResult, OperationStatus, PlanStatus, PlanStore,
    UpdateResult, WayfarerError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Create a new plan
///
/// New plans always start as not started.
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Title of the trip (at most 50 characters)
    pub title: String,
    #[arg(short, long, help = "Where the trip goes")]
    pub destination: String,
    #[arg(long, help = "First day of the trip (YYYY-MM-DD)")]
    pub start: String,
    #[arg(long, help = "Last day of the trip (YYYY-MM-DD)")]
    pub end: String,
    #[arg(short, long, default_value_t = 1, help = "Party size, 1 to 20")]
    pub participants: u32,
    #[arg(short, long, default_value_t = 0.0, help = "Budget for the whole trip")]
    pub budget: f64,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            title: val.title,
            destination: val.destination,
            start_date: val.start,
            end_date: val.end,
            participants: val.participants,
            budget: val.budget,
        }
    }
}

/// List plans, optionally narrowed to one status
#[derive(Args)]
pub struct ListPlansArgs {
    #[arg(short, long, help = "Only show plans with this status")]
    pub status: Option<StatusArg>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Select a plan by ID
#[derive(Args)]
pub struct PlanIdArgs {
    #[arg(help = "Identifier of the plan")]
    pub id: String,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a plan's details
///
/// Only the given fields change. `--status` assigns any status directly; use
/// `advance` for lifecycle-checked moves.
#[derive(Args)]
pub struct UpdatePlanArgs {
    #[arg(help = "Identifier of the plan to update")]
    pub id: String,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New destination")]
    pub destination: Option<String>,
    #[arg(long, help = "New first day (YYYY-MM-DD)")]
    pub start: Option<String>,
    #[arg(long, help = "New last day (YYYY-MM-DD)")]
    pub end: Option<String>,
    #[arg(short, long, help = "New party size")]
    pub participants: Option<u32>,
    #[arg(short, long, help = "New budget")]
    pub budget: Option<f64>,
    #[arg(short, long, help = "New status, assigned without lifecycle checks")]
    pub status: Option<StatusArg>,
}

impl From<UpdatePlanArgs> for EditPlan {
    fn from(val: UpdatePlanArgs) -> Self {
        EditPlan {
            id: val.id,
            title: val.title,
            destination: val.destination,
            start_date: val.start,
            end_date: val.end,
            participants: val.participants,
            budget: val.budget,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Move a plan along its lifecycle
///
/// Without `--to`, the plan moves to its next stage. Backward and skipping
/// moves are rejected.
#[derive(Args)]
pub struct AdvancePlanArgs {
    #[arg(help = "Identifier of the plan to advance")]
    pub id: String,
    #[arg(long, help = "Target status instead of the next stage")]
    pub to: Option<StatusArg>,
}

impl From<AdvancePlanArgs> for TransitionPlan {
    fn from(val: AdvancePlanArgs) -> Self {
        TransitionPlan {
            id: val.id,
            status: val.to.map(|s| s.to_string()),
        }
    }
}

/// Generate a simulated trip log
#[derive(Args)]
pub struct FootprintsArgs {
    #[arg(help = "Identifier of the plan")]
    pub id: String,
    #[arg(long, help = "Random seed for a reproducible log")]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show details of a specific plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Change a plan's details
    #[command(alias = "u")]
    Update(UpdatePlanArgs),
    /// Delete a plan
    #[command(aliases = ["d", "rm"])]
    Delete(PlanIdArgs),
    /// Move a plan to its next stage
    #[command(alias = "a")]
    Advance(AdvancePlanArgs),
    /// Show the day-by-day itinerary of a plan
    #[command(alias = "i")]
    Itinerary(PlanIdArgs),
    /// Show the destination and points of interest of a plan
    #[command(alias = "m")]
    Map(PlanIdArgs),
    /// Generate a simulated trip log around the destination
    #[command(alias = "f")]
    Footprints(FootprintsArgs),
}

impl PlanCommands {
    /// True for commands that change the collection.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            PlanCommands::Create(_)
                | PlanCommands::Update(_)
                | PlanCommands::Delete(_)
                | PlanCommands::Advance(_)
        )
    }
}

/// Talk to the travel assistant
#[derive(Args)]
pub struct ChatArgs {
    /// Message to send
    #[arg(required_unless_present = "clear", num_args = 1..)]
    pub message: Vec<String>,
    /// Forget the conversation so far
    #[arg(long, conflicts_with = "message")]
    pub clear: bool,
}

/// Sign in with any non-empty credentials
#[derive(Args)]
pub struct LoginArgs {
    pub username: String,
    pub password: String,
}

impl From<LoginArgs> for Login {
    fn from(val: LoginArgs) -> Self {
        Login {
            username: val.username,
            password: val.password,
        }
    }
}

/// Show the signed-in profile, or edit it when any option is given
#[derive(Args)]
pub struct ProfileArgs {
    /// New display name
    #[arg(short, long)]
    pub username: Option<String>,
    /// Avatar image URL; an empty value removes it
    #[arg(short, long)]
    pub avatar: Option<String>,
}

impl From<ProfileArgs> for EditProfile {
    fn from(val: ProfileArgs) -> Self {
        EditProfile {
            username: val.username,
            avatar: val.avatar,
        }
    }
}

/// Command-line representation of plan statuses.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Not started yet
    #[value(alias = "not_started")]
    NotStarted,
    /// Underway
    #[value(alias = "in_progress")]
    InProgress,
    /// Finished
    #[value(alias = "done")]
    Completed,
}

impl From<StatusArg> for PlanStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::NotStarted => PlanStatus::NotStarted,
            StatusArg::InProgress => PlanStatus::InProgress,
            StatusArg::Completed => PlanStatus::Completed,
        }
    }
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PlanStatus::from(*self).as_str())
    }
}

// ============================================================================
// Command Handler
// ============================================================================

/// Executes commands against one plan store and session.
pub struct Cli {
    store: PlanStore,
    renderer: TerminalRenderer,
    session: AuthSession,
    chat: ChatSession,
    json: bool,
}

impl Cli {
    pub fn new(store: PlanStore, renderer: TerminalRenderer, chat: ChatSession) -> Self {
        Self {
            store,
            renderer,
            session: AuthSession::new(),
            chat,
            json: false,
        }
    }

    /// Print results as JSON instead of markdown.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn store_mut(&mut self) -> &mut PlanStore {
        &mut self.store
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    pub fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .store
                    .create_plan(&args.into())
                    .context("Failed to create plan")?;
                self.emit(&plan, &CreateResult::new(plan.clone()))
            }
            PlanCommands::List(args) => self.list_plans(&args.into()),
            PlanCommands::Show(args) => {
                let plan = self.store.show_plan(&args.into())?;
                self.emit(plan, plan)
            }
            PlanCommands::Update(args) => {
                let (plan, changes) = self
                    .store
                    .edit_plan(&args.into())
                    .context("Failed to update plan")?;
                let changes = changes.iter().map(ToString::to_string).collect();
                self.emit(&plan, &UpdateResult::with_changes(plan.clone(), changes))
            }
            PlanCommands::Delete(args) => {
                let plan = self.store.delete_plan(&args.into())?;
                self.emit(&plan, &DeleteResult::new(plan.clone()))
            }
            PlanCommands::Advance(args) => {
                let plan = self
                    .store
                    .transition_plan(&args.into())
                    .context("Failed to change plan status")?;
                let status = OperationStatus::success(format!(
                    "Plan {} is now {}",
                    plan.id,
                    plan.status.with_icon()
                ));
                self.emit(&plan, &status)
            }
            PlanCommands::Itinerary(args) => {
                let plan = self.store.show_plan(&args.into())?;
                let days = itinerary_for(plan);
                let markdown = format!("# Itinerary: {}\n\n{}", plan.title, Itinerary(days.clone()));
                self.emit(&days, &markdown)
            }
            PlanCommands::Map(args) => {
                let view = MapView::for_plan(self.store.show_plan(&args.into())?);
                self.emit(&view, &view)
            }
            PlanCommands::Footprints(FootprintsArgs { id, seed }) => {
                let plan = self.store.show_plan(&Id { id })?;
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                let footprints = footprints_for(plan, &mut rng);
                self.emit(&footprints, &Footprints(footprints.clone()))
            }
        }
    }

    pub fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self.store.list_plans(params)?;
        let title = match params.status_filter()? {
            Some(status) => format!("{} Plans", status.with_icon()),
            None => "All Plans".to_string(),
        };
        let markdown = format!("# {title}\n\n{}", Plans::from(plans.clone()));
        self.emit(&plans, &markdown)
    }

    /// Per-status counts followed by every plan not yet completed.
    pub fn dashboard(&self) -> Result<()> {
        let stats = self.store.stats();
        let mut ahead = self.store.in_progress();
        ahead.extend(self.store.not_started());

        let markdown = format!(
            "# Dashboard\n\n{stats}## Upcoming and active\n\n{}",
            Plans::from(ahead.clone())
        );
        self.emit(&json!({ "stats": stats, "plans": ahead }), &markdown)
    }

    pub async fn chat(&mut self, args: ChatArgs) -> Result<()> {
        if args.clear {
            self.chat.clear();
            return self.emit(
                &json!({ "cleared": true }),
                &OperationStatus::success("Chat history cleared"),
            );
        }

        let text = args.message.join(" ");
        if self.chat.send(&text).await.is_none() {
            bail!("Message must not be empty");
        }
        let transcript = self.chat.transcript();
        let exchange = &transcript[transcript.len().saturating_sub(2)..];
        let markdown: String = exchange.iter().map(ToString::to_string).collect();
        self.emit(exchange, &markdown)
    }

    pub fn login(&mut self, args: LoginArgs) -> Result<()> {
        let user = self.session.login(&args.into())?;
        self.emit(
            &user,
            &OperationStatus::success(format!("Signed in as {}", user.username)),
        )
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.logout();
        let status = OperationStatus::success("Signed out");
        self.emit(&status, &status)
    }

    pub fn whoami(&self) -> Result<()> {
        match self.session.current_user() {
            Some(user) => self.emit(user, &format!("Signed in as {user}\n")),
            None => self.emit(&json!(null), &"Not signed in.\n"),
        }
    }

    pub fn profile(&mut self, args: ProfileArgs) -> Result<()> {
        let params = EditProfile::from(args);
        if params.is_empty() {
            let user = self
                .session
                .current_user()
                .ok_or(WayfarerError::NotSignedIn)?;
            return self.emit(user, &Profile(user));
        }

        let user = self.session.update_profile(&params)?;
        let markdown = format!(
            "{}\n{}",
            OperationStatus::success("Profile updated"),
            Profile(&user)
        );
        self.emit(&user, &markdown)
    }

    /// Render `markdown`, or `data` as JSON when JSON output is on.
    fn emit<T>(&self, data: &T, markdown: &dyn fmt::Display) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        if self.json {
            let encoded =
                serde_json::to_string_pretty(data).context("Failed to encode JSON output")?;
            println!("{encoded}");
        } else {
            debug!("Rendering markdown output");
            self.renderer.render(&markdown.to_string());
        }
        Ok(())
    }
}
