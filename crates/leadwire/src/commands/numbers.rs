//! WhatsApp number command handlers.

use std::sync::Arc;

use tabled::Tabled;

use leadwire_core::{Console, Number};

use crate::cli::{GlobalOpts, NumbersArgs, NumbersCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NumberRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Type")]
    connection_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Messages")]
    messages: u64,
    #[tabled(rename = "Last active")]
    last_active: String,
}

fn to_row(n: &Arc<Number>, color: bool) -> NumberRow {
    NumberRow {
        id: n.id,
        number: n.number.clone(),
        connection_type: n.connection_type.clone(),
        status: output::paint_status(n.status, color),
        messages: n.messages_count,
        last_active: n
            .last_active
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".into()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: NumbersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let dashboard = console.dashboard();

    match args.command {
        NumbersCommand::List => {
            dashboard.load_all().await;
            let snap = dashboard.numbers_snapshot();
            let color = output::should_color(&global.color);
            let out = output::render_list(
                &global.output,
                &snap,
                |n| to_row(n, color),
                |n| n.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NumbersCommand::Add {
            number,
            connection_type,
        } => {
            let message = dashboard.add_number(&number, &connection_type).await?;
            if !global.quiet {
                eprintln!("{}", non_empty_or(&message, "Number registered"));
            }
            Ok(())
        }

        NumbersCommand::Restart { id } => {
            let message = dashboard.restart_number(id).await?;
            if !global.quiet {
                eprintln!("{}", non_empty_or(&message, "Connection restart requested"));
            }
            Ok(())
        }
    }
}

fn non_empty_or<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.is_empty() { fallback } else { message }
}
