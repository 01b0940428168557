//! Subcommand implementations.

/// Provider listing command handler.
pub mod providers;

/// Prompt fan-out command handler.
pub mod run;
