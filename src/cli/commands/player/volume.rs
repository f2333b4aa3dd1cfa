use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::render_volume_bar,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
    services::playback::Volume,
};

use super::utils::start_session;

/// Command to set the playback volume.
pub struct VolumeCommand {
    config: Arc<Config>,
}

impl VolumeCommand {
    /// Creates a new VolumeCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub(crate) fn parse_percent(value: &str) -> Result<Volume, CliError> {
        let percent = value.parse::<f64>().map_err(|_| CliError::InvalidArgument {
            arg: "percent".to_string(),
            reason: "Volume must be a number".to_string(),
        })?;

        if !(0.0..=100.0).contains(&percent) {
            return Err(CliError::InvalidArgument {
                arg: "percent".to_string(),
                reason: "Volume must be between 0 and 100".to_string(),
            });
        }

        Ok(Volume::new(percent / 100.0))
    }
}

#[async_trait]
impl Command for VolumeCommand {
    /// Set the playback volume on the configured device
    ///
    /// # Arguments
    ///
    /// * `args` - Volume percentage between 0 and 100 (required)
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started, the value is
    /// invalid, or the service rejects the command
    async fn execute(&self, args: &[String]) -> CommandResult {
        let Some(value) = args.first() else {
            return Err(CliError::MissingArgument {
                arg: "percent".to_string(),
                command: "volume".to_string(),
            });
        };

        let volume = Self::parse_percent(value)?;
        let session = start_session(&self.config).await?;

        session
            .set_volume(volume)
            .await
            .map_err(|e| CliError::ServiceError {
                service: "Playback".to_string(),
                details: e.to_string(),
            })?;

        Ok(format!("Volume {}", render_volume_bar(volume, 10)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "volume".to_string(),
            description: "Set the playback volume".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "percent".to_string(),
                description: "Volume level between 0 and 100".to_string(),
                required: true,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "tonearm player volume 50".to_string(),
                "tonearm player volume 0".to_string(),
            ],
        }
    }
}
