use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_position,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    config::Config,
};

use super::utils::start_session;

/// Command to seek to a specific position in the current track
///
/// Supports various position formats like seconds, mm:ss, or percentage
pub struct SeekCommand {
    config: Arc<Config>,
}

impl SeekCommand {
    /// Creates a new SeekCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub(crate) fn parse_position(
        position_str: &str,
        current_position: Duration,
        track_length: Duration,
    ) -> Result<Duration, CliError> {
        if let Some(percentage_str) = position_str.strip_suffix('%') {
            let percentage =
                percentage_str
                    .parse::<f64>()
                    .map_err(|_| CliError::InvalidArgument {
                        arg: "position".to_string(),
                        reason: "Invalid percentage format".to_string(),
                    })?;

            if !(0.0..=100.0).contains(&percentage) {
                return Err(CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Percentage must be between 0 and 100".to_string(),
                });
            }

            if track_length.is_zero() {
                return Err(CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Cannot use percentage - track length unknown".to_string(),
                });
            }

            let position_secs = track_length.as_secs_f64() * (percentage / 100.0);
            return Ok(Duration::from_secs_f64(position_secs));
        }

        if position_str.starts_with('+') || position_str.starts_with('-') {
            let delta_str = &position_str[1..];
            let delta_secs = delta_str
                .parse::<u64>()
                .map_err(|_| CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Invalid relative seek format".to_string(),
                })?;

            let new_position = if position_str.starts_with('+') {
                current_position.saturating_add(Duration::from_secs(delta_secs))
            } else {
                current_position.saturating_sub(Duration::from_secs(delta_secs))
            };

            return Ok(new_position);
        }

        if position_str.contains(':') {
            let parts: Vec<&str> = position_str.split(':').collect();
            if parts.len() != 2 {
                return Err(CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Invalid time format. Use mm:ss".to_string(),
                });
            }

            let minutes = parts[0]
                .parse::<u64>()
                .map_err(|_| CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Invalid minutes value".to_string(),
                })?;

            let seconds = parts[1]
                .parse::<u64>()
                .map_err(|_| CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Invalid seconds value".to_string(),
                })?;

            if seconds >= 60 {
                return Err(CliError::InvalidArgument {
                    arg: "position".to_string(),
                    reason: "Seconds must be less than 60".to_string(),
                });
            }

            return Ok(Duration::from_secs(minutes * 60 + seconds));
        }

        let seconds = position_str.parse::<u64>().map_err(|_| {
            CliError::InvalidArgument {
                arg: "position".to_string(),
                reason: "Invalid position format. Use seconds, mm:ss, percentage (50%), or relative (+10, -10)".to_string(),
            }
        })?;

        Ok(Duration::from_secs(seconds))
    }
}

#[async_trait]
impl Command for SeekCommand {
    /// Seek to a specific position in the current track
    ///
    /// # Arguments
    ///
    /// * `args` - Target position (required)
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started, the position is
    /// invalid, or the service rejects the command
    async fn execute(&self, args: &[String]) -> CommandResult {
        let Some(position_str) = args.first() else {
            return Err(CliError::MissingArgument {
                arg: "position".to_string(),
                command: "seek".to_string(),
            });
        };

        let session = start_session(&self.config).await?;

        // Percentage and relative formats need the authoritative state.
        let needs_state = position_str.ends_with('%')
            || position_str.starts_with('+')
            || position_str.starts_with('-');
        if needs_state {
            let _ = tokio::time::timeout(Duration::from_secs(5), session.wait_for_snapshot()).await;
        }

        let current_position = session.position.get();
        let track_length = session.duration.get();

        let target = Self::parse_position(position_str, current_position, track_length)?;

        if !track_length.is_zero() && target > track_length {
            return Err(CliError::InvalidArgument {
                arg: "position".to_string(),
                reason: format!(
                    "Position {} exceeds track length {}",
                    format_position(target),
                    format_position(track_length)
                ),
            });
        }

        session.seek(target).await.map_err(|e| CliError::ServiceError {
            service: "Playback".to_string(),
            details: e.to_string(),
        })?;

        Ok(format!("Seeked to {}", format_position(target)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "seek".to_string(),
            description: "Seek to a specific position in the current track".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "position".to_string(),
                description:
                    "Target position - seconds (30), time (1:30), percentage (50%), or relative (+10, -10)"
                        .to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec![
                "tonearm player seek 30".to_string(),
                "tonearm player seek 1:30".to_string(),
                "tonearm player seek 50%".to_string(),
                "tonearm player seek +10".to_string(),
            ],
        }
    }
}
