use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_error, format_position, render_progress_bar, render_volume_bar},
        types::CommandMetadata,
    },
    config::Config,
    services::playback::PlaybackSession,
};

use super::utils::start_session;

/// How long `status` waits for the first authoritative snapshot.
const SNAPSHOT_WAIT: Duration = Duration::from_secs(3);

/// Command to show the current playback state
///
/// Displays the current track, pause state, position and volume.
pub struct StatusCommand {
    config: Arc<Config>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn render(session: &PlaybackSession, synced: bool) -> String {
        let mut output = String::new();

        if let Some(message) = session.auth_error.get() {
            output.push_str(&format_error("Sign in to the streaming service to play"));
            output.push_str(&format!(" ({message})\n\n"));
        }

        if let Some(device) = session.device.get() {
            output.push_str(&format!("Device: {device}\n"));
        }

        let track = session.track.get();
        if track.name.is_empty() {
            output.push_str("No track currently loaded\n");
        } else {
            output.push_str(&format!("Track: {}\n", track.name));
            output.push_str(&format!("Artist: {}\n", track.artist));
            if !track.art_url.is_empty() {
                output.push_str(&format!("Artwork URL: {}\n", track.art_url));
            }
        }

        let state = if session.is_paused.get() {
            "⏸ Paused"
        } else {
            "▶ Playing"
        };
        output.push_str(&format!("State: {state}\n"));

        let position = session.position.get();
        let duration = session.duration.get();
        output.push_str(&format!(
            "Position: {} / {}\n",
            format_position(position),
            format_position(duration)
        ));
        output.push_str(&format!(
            "Progress: {}\n",
            render_progress_bar(position, duration, 30)
        ));
        output.push_str(&format!(
            "Volume:   {}\n",
            render_volume_bar(session.volume.get(), 30)
        ));

        if !synced {
            output.push_str("\nNo playback state reported yet\n");
        }

        output
    }
}

#[async_trait]
impl Command for StatusCommand {
    /// Show the current playback state
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let session = start_session(&self.config).await?;

        let synced = tokio::time::timeout(SNAPSHOT_WAIT, session.wait_for_snapshot())
            .await
            .is_ok();

        Ok(Self::render(&session, synced))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show the current playback state".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["tonearm player status".to_string()],
        }
    }
}
