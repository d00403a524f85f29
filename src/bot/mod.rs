/// The /time command family and its query grammar
pub mod commands;
/// Update dispatch wiring
pub mod handlers;
