/// Offset arithmetic and wall-clock formatting
pub mod datetime;
/// The hardcoded default city table
pub mod defaults;
/// Consistent command logging helpers
pub mod logging;
