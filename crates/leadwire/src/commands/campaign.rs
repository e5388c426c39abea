//! Bulk campaign, smart-reply tester, and manual trigger handlers.

use leadwire_core::{Console, LeadTag};

use crate::cli::{BulkArgs, GlobalOpts, SmartReplyArgs, TriggerArgs};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle_bulk(
    console: &Console,
    args: &BulkArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let tags: Vec<LeadTag> = args.tags.iter().map(|t| t.to_tag()).collect();
    let tag_list = tags
        .iter()
        .map(LeadTag::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    // A campaign reaches real people; confirm before broadcasting.
    let ceiling = console.config().bulk_recipient_limit;
    if !util::confirm(
        &format!("Broadcast to all {tag_list} leads (ceiling {ceiling})?"),
        global.yes,
    )? {
        return Ok(());
    }

    let sent = console.campaign().send_bulk(&args.message, &tags).await?;
    if !global.quiet {
        eprintln!("Campaign delivered to {sent} leads (backend-confirmed count)");
    }
    Ok(())
}

pub async fn handle_smart_reply(
    console: &Console,
    args: &SmartReplyArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let reply = console.campaign().test_smart_reply(&args.message).await?;

    let mut out = format!("Reply: {}", reply.reply);
    if let Some(category) = &reply.category {
        out.push_str(&format!("\nCategory: {category}"));
    }
    if let Some(confidence) = reply.confidence {
        out.push_str(&format!("\nConfidence: {confidence:.2}"));
    }
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_trigger(
    console: &Console,
    args: &TriggerArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let action = args.action.to_action();
    let message = console.campaign().trigger(action).await?;

    if !global.quiet {
        if message.is_empty() {
            eprintln!("{action} completed");
        } else {
            eprintln!("{message}");
        }
    }
    Ok(())
}
