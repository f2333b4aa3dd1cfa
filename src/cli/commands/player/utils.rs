use std::sync::Arc;

use crate::{
    cli::CliError,
    config::Config,
    services::playback::{ConnectClient, PlaybackSession},
};

/// Build a session over the configured remote-control client.
///
/// Every command opens its own session, mirroring how the player surface
/// reconnects per invocation; the session (and its poll loop) is torn
/// down when the command returns.
pub(super) async fn start_session(config: &Config) -> Result<PlaybackSession, CliError> {
    let client = ConnectClient::new(config.connect_settings()).map_err(|e| CliError::ServiceError {
        service: "Playback".to_string(),
        details: e.to_string(),
    })?;

    PlaybackSession::start(Arc::new(client), config.session_config())
        .await
        .map_err(|e| CliError::ServiceError {
            service: "Playback".to_string(),
            details: e.to_string(),
        })
}
