use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::CommandMetadata,
    },
    config::Config,
};

use super::utils::start_session;

/// Command to go back to the previous track.
pub struct PreviousCommand {
    config: Arc<Config>,
}

impl PreviousCommand {
    /// Creates a new PreviousCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for PreviousCommand {
    /// Go back to the previous track on the configured device
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started or the service
    /// rejects the command
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let session = start_session(&self.config).await?;

        session
            .previous()
            .await
            .map_err(|e| CliError::ServiceError {
                service: "Playback".to_string(),
                details: e.to_string(),
            })?;

        Ok("Went back to previous track".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "previous".to_string(),
            description: "Go back to the previous track".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["tonearm player previous".to_string()],
        }
    }
}
