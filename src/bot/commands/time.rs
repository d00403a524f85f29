use chrono::{DateTime, Utc};
use teloxide::prelude::*;
use tracing::warn;

use crate::error::WorldClockError;
use crate::services::worldclock::WorldClockService;
use crate::utils::logging::{log_command_start, log_command_success};

/// Reply sent when the `/time` tail matches none of the accepted forms.
pub const USAGE_REPLY: &str = "Usage: /time, /time in <place>, or /time for <user>";

/// Fixed reply for deployments without a user directory.
pub const UNSUPPORTED_PLATFORM_REPLY: &str =
    "Sorry, I can't look up user profiles on this chat platform.";

/// Parsed tail of the `/time` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeQuery {
    /// Bare `/time`: the default city overview.
    Defaults,
    /// `/time in <place>`: one free-text location.
    In(String),
    /// `/time for <user>`: a chat user's profile timezone.
    For(String),
}

impl TimeQuery {
    /// Parses the text after `/time`. `None` means no accepted form matched
    /// and the caller should reply with usage.
    pub fn parse(args: &str) -> Option<TimeQuery> {
        let args = args.trim();
        if args.is_empty() {
            return Some(TimeQuery::Defaults);
        }
        if let Some(place) = args.strip_prefix("in ").map(str::trim) {
            if !place.is_empty() {
                return Some(TimeQuery::In(place.to_string()));
            }
        }
        if let Some(name) = args.strip_prefix("for ").map(str::trim) {
            if !name.is_empty() {
                return Some(TimeQuery::For(name.to_string()));
            }
        }
        None
    }
}

pub async fn handle_time(
    bot: Bot,
    msg: Message,
    args: String,
    svc: &WorldClockService,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);
    let username = msg.from().and_then(|u| u.username.as_ref()).map_or("unknown", |v| v);

    log_command_start("time", username, user_id, chat_id, Some(args.trim()));

    let reply = time_reply(svc, &args, Utc::now()).await;
    bot.send_message(msg.chat.id, reply).await?;

    log_command_success("time", username, user_id, chat_id, None);
    Ok(())
}

/// Composes the reply text for one `/time` invocation. Every failure path
/// ends in a human-readable reply, never an error out of this function.
pub async fn time_reply(svc: &WorldClockService, args: &str, now: DateTime<Utc>) -> String {
    match TimeQuery::parse(args) {
        Some(TimeQuery::Defaults) => svc.defaults_overview(now).await,
        Some(TimeQuery::In(place)) => match svc.time_in(&place, now).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Lookup for '{}' failed: {}", place, e);
                format!("Sorry, no idea: {e}")
            }
        },
        Some(TimeQuery::For(name)) => match svc.time_for(&name, now) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("User time lookup for '{}' failed: {}", name, e);
                user_failure_reply(&e)
            }
        },
        None => USAGE_REPLY.to_string(),
    }
}

fn user_failure_reply(error: &WorldClockError) -> String {
    match error {
        WorldClockError::DirectoryUnavailable => UNSUPPORTED_PLATFORM_REPLY.to_string(),
        WorldClockError::UserNotFound(who) => format!("Sorry, I don't know who {who} is."),
        WorldClockError::TimezoneUnset(who) => {
            format!("{who} hasn't set a timezone. Maybe ask them to update their profile?")
        }
        other => format!("Sorry, no idea: {other}"),
    }
}
