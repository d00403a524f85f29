use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::handlers::HandlerResult;
use crate::services::worldclock::WorldClockService;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    svc: Arc<WorldClockService>,
) -> HandlerResult {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "🕐 Welcome to World Clock Bot!\n\nUse /time to see the default cities, or /time in <place> for anywhere else.\nUse /help to see all commands.",
            ).await?;
        }
        Command::Time(args) => {
            crate::bot::commands::time::handle_time(bot, msg, args, svc.as_ref()).await?;
        }
    }
    Ok(())
}
