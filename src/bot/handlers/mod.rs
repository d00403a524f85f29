pub mod general_message;
pub mod message;

use std::sync::Arc;
use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::services::worldclock::WorldClockService;

/// Error type shared by all dispatch endpoints.
pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub struct BotHandler {
    pub svc: Arc<WorldClockService>,
}

impl BotHandler {
    pub fn new(svc: Arc<WorldClockService>) -> Self {
        Self { svc }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let svc = self.svc.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let svc = svc.clone();
                        async move { message::command_handler(bot, msg, cmd, svc).await }
                    }),
            )
            .branch(Update::filter_message().endpoint(general_message::handle_general_message))
    }
}
