use std::sync::Arc;

use crate::config::Config;

use super::{CliError, CommandRegistry};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and
/// execution. Commands are organized by category and can be listed or
/// executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `config` - Loaded configuration, shared with commands that reach
    ///   the streaming service
    pub fn new(config: Config) -> Self {
        let registry = CommandRegistry::new(Arc::new(config));
        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// The `help` category (or an empty command) renders the generated
    /// help text instead of dispatching.
    ///
    /// # Arguments
    /// * `category` - Command category to search in
    /// * `command_name` - Name of the command to execute
    /// * `args` - Command-line arguments to pass to the command
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in
    /// the category; other errors come from command execution.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == "help" || command_name.is_empty() {
            return Ok(self.registry.render_help());
        }

        self.registry.execute(category, command_name, args).await
    }
}
