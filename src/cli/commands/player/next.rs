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

/// Command to skip to the next track.
pub struct NextCommand {
    config: Arc<Config>,
}

impl NextCommand {
    /// Creates a new NextCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for NextCommand {
    /// Skip to the next track on the configured device
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started or the service
    /// rejects the command
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let session = start_session(&self.config).await?;

        session.next().await.map_err(|e| CliError::ServiceError {
            service: "Playback".to_string(),
            details: e.to_string(),
        })?;

        Ok("Skipped to next track".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "next".to_string(),
            description: "Skip to the next track".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["tonearm player next".to_string()],
        }
    }
}
