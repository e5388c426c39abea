//! Lead command handlers.

use std::sync::Arc;

use tabled::Tabled;

use leadwire_core::{AddLeadRequest, Console, Lead};

use crate::cli::{GlobalOpts, LeadsArgs, LeadsCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LeadRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Score")]
    score: f64,
    #[tabled(rename = "Last interaction")]
    last_interaction: String,
}

fn to_row(lead: &Arc<Lead>, color: bool) -> LeadRow {
    LeadRow {
        id: lead.id.to_string(),
        name: lead.name.clone(),
        city: lead.city.clone(),
        tag: output::paint_tag(lead.tag, color),
        score: lead.score,
        last_interaction: lead
            .last_interaction
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: LeadsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let dashboard = console.dashboard();

    match args.command {
        LeadsCommand::List => {
            dashboard.load_all().await;
            let snap = dashboard.leads_snapshot();
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &snap,
                |l| to_row(l, color),
                |l| l.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LeadsCommand::Add {
            name,
            phone,
            city,
            tag,
            score,
        } => {
            let message = dashboard
                .add_lead(AddLeadRequest {
                    name,
                    phone,
                    city,
                    tag: tag.map(|t| t.to_tag().as_str().to_owned()),
                    score,
                })
                .await?;
            if !global.quiet {
                if message.is_empty() {
                    eprintln!("Lead captured");
                } else {
                    eprintln!("{message}");
                }
            }
            Ok(())
        }
    }
}
