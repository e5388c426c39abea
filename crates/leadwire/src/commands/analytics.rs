//! Analytics command handlers.

use tabled::Tabled;

use leadwire_core::{
    AgentPerformancePayload, AutomationAnalytics, Console, LeadTag, LeadTagCount,
    MessageVolumePoint,
};

use crate::cli::{AnalyticsArgs, AnalyticsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct VolumeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Messages")]
    count: u64,
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Leads")]
    count: u64,
}

#[derive(Tabled)]
struct PerformanceRow {
    #[tabled(rename = "Agent")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Accuracy")]
    accuracy: String,
}

fn automation_detail(analytics: &AutomationAnalytics) -> String {
    let distribution = &analytics.lead_distribution;
    [
        format!("Messages today:     {}", analytics.messages_today),
        format!("Messages yesterday: {}", analytics.messages_yesterday),
        format!("AI messages today:  {}", analytics.ai_messages_today),
        format!("Automation rate:    {:.1}%", analytics.automation_rate),
        format!("Tracked leads:      {}", distribution.total()),
        format!("System status:      {}", analytics.system_status),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: AnalyticsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let campaign = console.campaign();

    match args.command {
        AnalyticsCommand::Automation => {
            campaign.refresh_analytics().await?;
            let Some(analytics) = campaign.analytics() else {
                return Ok(());
            };
            let out = output::render_single(&global.output, &*analytics, automation_detail, |a| {
                a.system_status.clone()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnalyticsCommand::AiPerformance => {
            let performance = campaign.ai_performance().await?;
            let entries: Vec<AgentPerformancePayload> = performance.into_values().collect();
            let out = output::render_list(
                &global.output,
                &entries,
                |p| PerformanceRow {
                    name: p.name.clone(),
                    status: p.status.clone(),
                    accuracy: p
                        .accuracy
                        .or(p.performance)
                        .or(p.success_rate)
                        .map_or_else(|| "-".into(), |v| format!("{v:.0}%")),
                },
                |p| p.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnalyticsCommand::Messages => {
            let volume = campaign.message_volume().await?;
            let out = output::render_list(
                &global.output,
                &volume,
                |p: &MessageVolumePoint| VolumeRow {
                    date: p.date.clone(),
                    count: p.count,
                },
                |p| p.date.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnalyticsCommand::Leads => {
            let distribution = campaign.lead_distribution().await?;
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &distribution,
                |bucket: &LeadTagCount| TagRow {
                    tag: output::paint_tag(LeadTag::from_wire(&bucket.tag), color),
                    count: bucket.count,
                },
                |bucket| bucket.tag.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
