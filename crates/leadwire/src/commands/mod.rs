//! Command dispatch: routes each parsed subcommand to its handler.

pub mod agents;
pub mod analytics;
pub mod automation;
pub mod campaign;
pub mod chat;
pub mod config_cmd;
pub mod leads;
pub mod numbers;
pub mod status;
pub mod util;

use leadwire_core::Console;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub async fn dispatch(cmd: Command, console: &Console, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Status(args) => status::handle(console, &args, global).await,
        Command::Numbers(args) => numbers::handle(console, args, global).await,
        Command::Leads(args) => leads::handle(console, args, global).await,
        Command::Chat(args) => chat::handle(console, args, global).await,
        Command::Agents(args) => agents::handle(console, args, global).await,
        Command::Automation(args) => automation::handle(console, args, global).await,
        Command::Bulk(args) => campaign::handle_bulk(console, &args, global).await,
        Command::SmartReply(args) => campaign::handle_smart_reply(console, &args, global).await,
        Command::Trigger(args) => campaign::handle_trigger(console, &args, global).await,
        Command::Analytics(args) => analytics::handle(console, args, global).await,

        // Handled in `run` before a console exists.
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
