//! Clap derive structures for the `leadwire` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use leadwire_core::{LeadTag, MaintenanceAction};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// leadwire -- operator console for a WhatsApp lead-engagement pipeline
#[derive(Debug, Parser)]
#[command(
    name = "leadwire",
    version,
    about = "Drive a WhatsApp lead-engagement pipeline from the command line",
    long_about = "Operator console for a WhatsApp lead-engagement backend.\n\n\
        Inspect connected numbers, leads and reply agents, chat with a lead,\n\
        and drive the automation engine: toggles, bulk campaigns, smart-reply\n\
        tests, and one-shot maintenance triggers.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Gateway profile to use
    #[arg(long, short = 'p', env = "LEADWIRE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend API root (overrides profile), e.g. http://127.0.0.1:5000/api
    #[arg(long, short = 'g', env = "LEADWIRE_GATEWAY", global = true)]
    pub gateway: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LEADWIRE_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "LEADWIRE_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dashboard overview: stats, recent leads, agent health
    #[command(alias = "st")]
    Status(StatusArgs),

    /// Manage connected WhatsApp numbers
    #[command(alias = "num")]
    Numbers(NumbersArgs),

    /// Manage tracked leads ("doctors")
    #[command(alias = "l")]
    Leads(LeadsArgs),

    /// View a conversation and send messages
    Chat(ChatArgs),

    /// Manage automated-reply agents
    #[command(alias = "ag")]
    Agents(AgentsArgs),

    /// Control the automation engine
    #[command(alias = "auto")]
    Automation(AutomationArgs),

    /// Send a bulk campaign to leads matching a tag set
    Bulk(BulkArgs),

    /// Test the smart-reply generator
    SmartReply(SmartReplyArgs),

    /// Fire a one-shot maintenance trigger
    Trigger(TriggerArgs),

    /// Query analytics snapshots
    Analytics(AnalyticsArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Status ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatusArgs {}

// ── Numbers ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NumbersArgs {
    #[command(subcommand)]
    pub command: NumbersCommand,
}

#[derive(Debug, Subcommand)]
pub enum NumbersCommand {
    /// List connected numbers
    #[command(alias = "ls")]
    List,

    /// Register a new number (starts in standby until paired)
    Add {
        /// Phone number in E.164 form, e.g. +1234567890
        number: String,

        /// Connection type
        #[arg(long, default_value = "API")]
        connection_type: String,
    },

    /// Restart the connection behind one number
    Restart {
        /// Number id
        id: i64,
    },
}

// ── Leads ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LeadsArgs {
    #[command(subcommand)]
    pub command: LeadsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LeadsCommand {
    /// List tracked leads
    #[command(alias = "ls")]
    List,

    /// Capture a new lead
    Add {
        /// Display name
        name: String,

        /// Phone number in E.164 form
        phone: String,

        #[arg(long)]
        city: Option<String>,

        /// Initial classification tag
        #[arg(long, value_enum)]
        tag: Option<TagArg>,

        /// Initial score
        #[arg(long)]
        score: Option<f64>,
    },
}

// ── Chat ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ChatArgs {
    #[command(subcommand)]
    pub command: ChatCommand,
}

#[derive(Debug, Subcommand)]
pub enum ChatCommand {
    /// Show the full conversation for one lead
    History {
        /// Lead id
        lead: i64,
    },

    /// Send a message to one lead
    Send {
        /// Lead id
        lead: i64,

        /// Message text
        message: String,
    },
}

// ── Agents ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AgentsArgs {
    #[command(subcommand)]
    pub command: AgentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AgentsCommand {
    /// List agents with status and performance
    #[command(alias = "ls")]
    List,

    /// Restart one agent
    Restart {
        /// Agent id
        id: i64,
    },
}

// ── Automation ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AutomationArgs {
    #[command(subcommand)]
    pub command: AutomationCommand,
}

#[derive(Debug, Subcommand)]
pub enum AutomationCommand {
    /// Show the engine's confirmed status
    Status,

    /// Start the engine
    Start,

    /// Stop the engine
    Stop,

    /// Toggle feature flags (only the given flags are sent)
    Set {
        /// Enable/disable auto-reply
        #[arg(long)]
        auto_reply: Option<bool>,

        /// Enable/disable follow-up messages
        #[arg(long)]
        follow_up: Option<bool>,

        /// Enable/disable lead scoring
        #[arg(long)]
        lead_scoring: Option<bool>,
    },
}

// ── Bulk / SmartReply / Trigger ──────────────────────────────────────

#[derive(Debug, Args)]
pub struct BulkArgs {
    /// Message text to broadcast
    pub message: String,

    /// Target tag (repeatable). Defaults to hot and warm leads.
    #[arg(long = "tag", value_enum, default_values_t = vec![TagArg::HotLead, TagArg::WarmLead])]
    pub tags: Vec<TagArg>,
}

#[derive(Debug, Args)]
pub struct SmartReplyArgs {
    /// Sample inbound message to test against
    pub message: String,
}

#[derive(Debug, Args)]
pub struct TriggerArgs {
    /// Maintenance action to fire
    #[arg(value_enum)]
    pub action: TriggerAction,
}

// ── Analytics ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: AnalyticsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCommand {
    /// Automation analytics snapshot
    Automation,

    /// Per-agent AI performance
    AiPerformance,

    /// Daily message volume (last week)
    Messages,

    /// Lead distribution by tag
    Leads,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a gateway profile
    Init {
        /// Backend API root, e.g. http://127.0.0.1:5000/api
        gateway: String,

        /// Profile name to create or update
        #[arg(long, default_value = "default")]
        name: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Bulk campaign recipient ceiling
        #[arg(long)]
        bulk_limit: Option<u32>,
    },

    /// Show the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

// ── Shared value enums ───────────────────────────────────────────────

/// Classification tag as a CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TagArg {
    HotLead,
    WarmLead,
    ColdLead,
    Registered,
}

impl TagArg {
    pub fn to_tag(self) -> LeadTag {
        match self {
            Self::HotLead => LeadTag::HotLead,
            Self::WarmLead => LeadTag::WarmLead,
            Self::ColdLead => LeadTag::ColdLead,
            Self::Registered => LeadTag::Registered,
        }
    }
}

impl std::fmt::Display for TagArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // clap's kebab-case value form, so default_values_t renders
        // the same string the parser accepts.
        let value = match self {
            Self::HotLead => "hot-lead",
            Self::WarmLead => "warm-lead",
            Self::ColdLead => "cold-lead",
            Self::Registered => "registered",
        };
        f.write_str(value)
    }
}

/// Maintenance trigger as a CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerAction {
    ProcessAutoReplies,
    UpdateLeadScores,
    SendFollowUps,
    HealthCheck,
}

impl TriggerAction {
    pub fn to_action(self) -> MaintenanceAction {
        match self {
            Self::ProcessAutoReplies => MaintenanceAction::ProcessAutoReplies,
            Self::UpdateLeadScores => MaintenanceAction::RecomputeScores,
            Self::SendFollowUps => MaintenanceAction::SweepFollowUps,
            Self::HealthCheck => MaintenanceAction::HealthCheck,
        }
    }
}
