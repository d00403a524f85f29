//! # World Clock Bot
//!
//! A Telegram bot that answers "what time is it" questions by composing a
//! geocoding lookup with a timezone lookup.
//!
//! ## Features
//! - Current time across a fixed set of default cities
//! - Current time in any free-text location via geocoding
//! - Current time for a chat user with a profile timezone, when the
//!   deployment provides a user directory

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Error taxonomy for lookups and user queries
pub mod error;
/// External lookup providers and the world clock service
pub mod services;
/// Utility functions for time formatting and logging
pub mod utils;
