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

/// Command to toggle between playing and paused.
pub struct PlayPauseCommand {
    config: Arc<Config>,
}

impl PlayPauseCommand {
    /// Creates a new PlayPauseCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for PlayPauseCommand {
    /// Toggle play/pause on the configured device
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started or the service
    /// rejects the command
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let session = start_session(&self.config).await?;

        session
            .play_pause()
            .await
            .map_err(|e| CliError::ServiceError {
                service: "Playback".to_string(),
                details: e.to_string(),
            })?;

        Ok("Toggled playback".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "play-pause".to_string(),
            description: "Toggle between playing and paused".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["tonearm player play-pause".to_string()],
        }
    }
}
