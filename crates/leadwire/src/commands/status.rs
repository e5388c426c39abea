//! Dashboard overview handler.

use serde::Serialize;

use leadwire_core::{Agent, Console, DashboardStats, Lead};

use crate::cli::{GlobalOpts, StatusArgs};
use crate::error::CliError;
use crate::output;

/// Serializable overview combining the four dashboard slices.
#[derive(Serialize)]
struct Overview {
    stats: Option<DashboardStats>,
    leads: Vec<Lead>,
    agents: Vec<Agent>,
}

fn detail(overview: &Overview, color: bool) -> String {
    let mut lines = Vec::new();

    match &overview.stats {
        Some(stats) => {
            lines.push(format!("Active numbers:  {}", stats.active_numbers));
            lines.push(format!("Total doctors:   {}", stats.total_doctors));
            lines.push(format!("Messages today:  {}", stats.messages_today));
            lines.push(format!("AI performance:  {}", stats.ai_performance));
        }
        None => lines.push("Stats unavailable (fetch failed)".into()),
    }

    if !overview.leads.is_empty() {
        lines.push(String::new());
        lines.push("Recent leads:".into());
        for lead in &overview.leads {
            lines.push(format!(
                "  {:<24} {:<12} score {:>4}  {}",
                lead.name,
                lead.city,
                lead.score,
                output::paint_tag(lead.tag, color)
            ));
        }
    }

    if !overview.agents.is_empty() {
        lines.push(String::new());
        lines.push("Agents:".into());
        for agent in &overview.agents {
            let performance = agent
                .effective_performance()
                .map_or_else(|| "standby".into(), |p| format!("{p}%"));
            lines.push(format!("  {:<24} {}", agent.name, performance));
        }
    }

    lines.join("\n")
}

pub async fn handle(
    console: &Console,
    _args: &StatusArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let dashboard = console.dashboard();
    dashboard.load_all().await;

    const RECENT_LEADS: usize = 5;

    let overview = Overview {
        stats: dashboard.stats().map(|s| (*s).clone()),
        leads: dashboard
            .leads_snapshot()
            .iter()
            .take(RECENT_LEADS)
            .map(|l| (**l).clone())
            .collect(),
        agents: dashboard
            .agents_snapshot()
            .iter()
            .map(|a| (**a).clone())
            .collect(),
    };

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &overview,
        |o| detail(o, color),
        |o| {
            o.stats
                .as_ref()
                .map_or_else(String::new, |s| s.active_numbers.clone())
        },
    );
    output::print_output(&out, global.quiet);
    Ok(())
}
