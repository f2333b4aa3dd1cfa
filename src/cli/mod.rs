//! Command-line interface for the playback remote.
//!
//! Provides a hierarchical command system over the playback session.
//! Commands are organized by category and automatically generate help
//! text from metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use registry::CommandRegistry;
pub use service::CliService;
pub use types::{CliError, Command, CommandResult};
