//! Agent command handlers.

use std::sync::Arc;

use tabled::Tabled;

use leadwire_core::{Agent, Console};

use crate::cli::{AgentsArgs, AgentsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AgentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Performance")]
    performance: String,
    #[tabled(rename = "Last crash")]
    last_crash: String,
}

impl From<&Arc<Agent>> for AgentRow {
    fn from(a: &Arc<Agent>) -> Self {
        Self {
            id: a.id.map(|id| id.to_string()).unwrap_or_default(),
            name: a.name.clone(),
            status: a.status.to_string(),
            // Performance is only meaningful while the agent is active.
            performance: a
                .effective_performance()
                .map_or_else(|| "-".into(), |p| format!("{p}%")),
            last_crash: a
                .last_crash
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".into()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: AgentsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let dashboard = console.dashboard();

    match args.command {
        AgentsCommand::List => {
            dashboard.load_all().await;
            let snap = dashboard.agents_snapshot();
            let out = output::render_list(&global.output, &snap, |a| AgentRow::from(a), |a| {
                a.name.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AgentsCommand::Restart { id } => {
            let message = dashboard.restart_agent(id).await?;
            if !global.quiet {
                if message.is_empty() {
                    eprintln!("Agent restarted");
                } else {
                    eprintln!("{message}");
                }
            }
            Ok(())
        }
    }
}
