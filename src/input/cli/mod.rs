//! Command-line adapter: parses flags with clap and runs a headless export.

pub mod args;
pub mod commands;
pub mod errors;
