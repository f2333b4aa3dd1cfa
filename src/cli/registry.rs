use std::{collections::HashMap, sync::Arc};

use crate::config::Config;

use super::{
    CliError, Command,
    commands::player,
    formatting::{format_category, format_command, format_description, format_header},
    types::{ArgType, CommandMetadata},
};

/// Registry for CLI commands organized by category.
///
/// Commands are grouped by logical categories so the dispatch path stays
/// a lookup rather than a growing match statement.
pub struct CommandRegistry {
    /// Nested map: category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
}

impl CommandRegistry {
    /// Creates a registry with all built-in commands registered.
    ///
    /// The configuration is shared across commands that need to reach
    /// the streaming service.
    pub fn new(config: Arc<Config>) -> Self {
        let mut registry = Self {
            categories: HashMap::new(),
        };

        registry.register_command(Box::new(player::StatusCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::WatchCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::PlayPauseCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::NextCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::PreviousCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::SeekCommand::new(Arc::clone(&config))));
        registry.register_command(Box::new(player::VolumeCommand::new(config)));

        registry
    }

    /// Registers a command under the category its metadata names.
    ///
    /// The command's metadata name is used as the key within the
    /// category; a command with the same name replaces the previous one.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        let metadata = command.metadata();
        self.categories
            .entry(metadata.category)
            .or_default()
            .insert(metadata.name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command
    /// does not exist, `CliError::MissingArgument` if a required
    /// argument is absent; other errors come from the command itself.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{command_name}'"))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category.
    ///
    /// Categories and commands are sorted alphabetically for consistent
    /// display.
    pub fn list_commands(&self) -> Vec<(String, Vec<CommandMetadata>)> {
        let mut categories: Vec<(String, Vec<CommandMetadata>)> = self
            .categories
            .iter()
            .map(|(name, commands)| {
                let mut metadata: Vec<CommandMetadata> =
                    commands.values().map(|c| c.metadata()).collect();
                metadata.sort_by(|a, b| a.name.cmp(&b.name));
                (name.clone(), metadata)
            })
            .collect();
        categories.sort_by(|a, b| a.0.cmp(&b.0));
        categories
    }

    /// Renders help text for every registered command.
    pub fn render_help(&self) -> String {
        let mut output = String::new();
        output.push_str(&format_header("tonearm - streaming player remote"));
        output.push('\n');

        for (category, commands) in self.list_commands() {
            output.push('\n');
            output.push_str(&format_category(&category));
            output.push('\n');

            for metadata in commands {
                output.push_str(&format!(
                    "  {:<24} {}\n",
                    format_command(&metadata.name),
                    format_description(&metadata.description)
                ));
                for arg in &metadata.args {
                    let hint = match arg.value_type {
                        ArgType::String => "string",
                        ArgType::Number => "number",
                    };
                    let shape = if arg.required {
                        format!("<{}>", arg.name)
                    } else {
                        format!("[{}]", arg.name)
                    };
                    output.push_str(&format!("      {shape} ({hint}) - {}\n", arg.description));
                }
                for example in &metadata.examples {
                    output.push_str(&format!("      {example}\n"));
                }
            }
        }

        output
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required = metadata.args.iter().filter(|a| a.required).count();
        if args.len() < required {
            let missing = &metadata.args[args.len()];
            return Err(CliError::MissingArgument {
                arg: missing.name.clone(),
                command: metadata.name.clone(),
            });
        }
        Ok(())
    }
}
