//! Automation engine command handlers.
//!
//! Every mutation goes through the coordinator, so what gets printed is
//! always the re-fetched, backend-confirmed status -- never the request.

use leadwire_core::{AutomationStatus, Console, SettingsPatch};

use crate::cli::{AutomationArgs, AutomationCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn flag(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn detail(status: &AutomationStatus) -> String {
    let analytics = &status.analytics;
    let distribution = &analytics.lead_distribution;
    [
        format!(
            "Engine:         {}",
            if status.is_running { "running" } else { "stopped" }
        ),
        format!("Auto-reply:     {}", flag(status.auto_reply_enabled)),
        format!("Follow-ups:     {}", flag(status.follow_up_enabled)),
        format!("Lead scoring:   {}", flag(status.lead_scoring_enabled)),
        String::new(),
        format!(
            "Messages today: {} ({} by AI, {:.1}% automated)",
            analytics.messages_today, analytics.ai_messages_today, analytics.automation_rate
        ),
        format!(
            "Leads:          {} hot / {} warm / {} cold / {} registered",
            distribution.hot_lead,
            distribution.warm_lead,
            distribution.cold_lead,
            distribution.registered
        ),
    ]
    .join("\n")
}

fn render_status(console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(status) = console.automation().status() else {
        return Err(CliError::GatewayError {
            message: "no confirmed automation status available".into(),
            status: None,
        });
    };

    let out = output::render_single(&global.output, &*status, detail, |s| {
        if s.is_running { "running".into() } else { "stopped".into() }
    });
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle(
    console: &Console,
    args: AutomationArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let automation = console.automation();

    match args.command {
        AutomationCommand::Status => {
            automation.refresh_status().await?;
            render_status(console, global)
        }

        AutomationCommand::Start => {
            automation.start().await?;
            if !global.quiet {
                eprintln!("Engine start confirmed");
            }
            render_status(console, global)
        }

        AutomationCommand::Stop => {
            automation.stop().await?;
            if !global.quiet {
                eprintln!("Engine stop confirmed");
            }
            render_status(console, global)
        }

        AutomationCommand::Set {
            auto_reply,
            follow_up,
            lead_scoring,
        } => {
            let patch = SettingsPatch {
                auto_reply_enabled: auto_reply,
                follow_up_enabled: follow_up,
                lead_scoring_enabled: lead_scoring,
            };
            if patch.is_empty() {
                return Err(CliError::Validation {
                    field: "flags".into(),
                    reason: "pass at least one of --auto-reply, --follow-up, --lead-scoring"
                        .into(),
                });
            }

            automation.update_settings(patch).await?;
            render_status(console, global)
        }
    }
}
