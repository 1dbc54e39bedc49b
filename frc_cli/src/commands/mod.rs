//! CLI subcommand implementations.

pub mod event;
pub mod season;
