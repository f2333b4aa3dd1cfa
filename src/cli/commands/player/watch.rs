use std::sync::Arc;

use async_trait::async_trait;
use futures::StreamExt;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_error, format_position, render_progress_bar},
        types::CommandMetadata,
    },
    config::Config,
    services::playback::{PlaybackSession, PositionTracker},
};

use super::utils::start_session;

/// Command to continuously render the playback state.
///
/// Re-renders whenever the locally extrapolated position or the
/// authoritative state changes, until interrupted.
pub struct WatchCommand {
    config: Arc<Config>,
}

impl WatchCommand {
    /// Creates a new WatchCommand
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn render_line(session: &PlaybackSession, displayed: std::time::Duration) -> String {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        let track = session.track.get();
        let duration = session.duration.get();
        let state = if session.is_paused.get() { "⏸" } else { "▶" };

        let title = if track.name.is_empty() {
            "(no track)".to_string()
        } else if track.artist.is_empty() {
            track.name
        } else {
            format!("{} — {}", track.name, track.artist)
        };

        format!(
            "[{timestamp}] {state} {} {} {}  {title}",
            format_position(displayed),
            render_progress_bar(displayed, duration, 20),
            format_position(duration),
        )
    }
}

#[async_trait]
impl Command for WatchCommand {
    /// Continuously render the playback state until interrupted
    ///
    /// # Errors
    ///
    /// Returns CliError if the session cannot be started
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let session = start_session(&self.config).await?;

        let mut tracker = PositionTracker::new(session.position.get());

        let mut paused_updates = Box::pin(session.is_paused.watch());
        let mut position_updates = Box::pin(session.position.watch());
        let mut auth_updates = Box::pin(session.auth_error.watch());
        let mut displayed_updates = Box::pin(tracker.displayed.watch());

        loop {
            tokio::select! {
                Some(is_paused) = paused_updates.next() => {
                    tracker.sync(is_paused, session.position.get());
                }
                Some(position) = position_updates.next() => {
                    tracker.sync(session.is_paused.get(), position);
                }
                Some(Some(message)) = auth_updates.next() => {
                    return Ok(format!(
                        "{}: {message}",
                        format_error("Sign in to the streaming service to play")
                    ));
                }
                Some(displayed) = displayed_updates.next() => {
                    println!("{}", Self::render_line(&session, displayed));
                }
                else => break,
            }
        }

        Ok(String::new())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "watch".to_string(),
            description: "Continuously render the playback state".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["tonearm player watch".to_string()],
        }
    }
}
