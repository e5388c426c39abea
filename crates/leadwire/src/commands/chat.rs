//! Conversation command handlers.
//!
//! Both subcommands drive the session manager, so the CLI gets the same
//! guarantees as any other consumer: selection-scoped history, empty-send
//! guards, and post-send re-fetch.

use std::sync::Arc;

use tabled::Tabled;

use leadwire_core::{Console, LeadId, Message, SendOutcome};

use crate::cli::{ChatArgs, ChatCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "From")]
    sender: String,
    #[tabled(rename = "Message")]
    body: String,
    #[tabled(rename = "Via")]
    via: String,
}

impl From<&Arc<Message>> for MessageRow {
    fn from(m: &Arc<Message>) -> Self {
        Self {
            time: m.timestamp.clone(),
            sender: m.sender.to_string(),
            body: m.body.clone(),
            via: m.via.clone().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(console: &Console, args: ChatArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let session = console.session();

    match args.command {
        ChatCommand::History { lead } => {
            session.select(LeadId::new(lead)).await?;
            let messages = session.messages_snapshot();
            let out = output::render_list(
                &global.output,
                &messages,
                |m| MessageRow::from(m),
                |m| m.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ChatCommand::Send { lead, message } => {
            session.select(LeadId::new(lead)).await?;
            session.set_draft(message);

            match session.send().await? {
                SendOutcome::Sent => {
                    if !global.quiet {
                        let count = session.messages_snapshot().len();
                        eprintln!("Message sent; conversation now has {count} messages");
                    }
                    Ok(())
                }
                SendOutcome::Skipped => Err(CliError::Validation {
                    field: "message".into(),
                    reason: "message is empty or a send is already in flight".into(),
                }),
            }
        }
    }
}
