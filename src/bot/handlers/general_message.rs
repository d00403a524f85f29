use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;

pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
) -> HandlerResult {
    if let Some(text) = msg.text() {
        // Check if it looks like a malformed command
        if text.starts_with('/') {
            let command = text.split_whitespace().next().unwrap_or(text);
            bot.send_message(
                msg.chat.id,
                format!("Unknown command: {command}\nUse /help to see all available commands."),
            ).await?;
        } else if text.to_lowercase().contains("time") {
            // Helpful hint for users asking about clocks in prose
            bot.send_message(
                msg.chat.id,
                "Looking for a clock? Try /time, /time in <place>, or /time for <user>.",
            ).await?;
        }
        // For other messages, we don't respond to avoid spam
    }

    Ok(())
}
