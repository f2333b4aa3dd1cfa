use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::services::common::Property;

use super::client::{ClientEvent, PlaybackClient};
use super::error::PlaybackError;
use super::types::{DeviceId, PlaybackSnapshot, TrackId, TrackInfo, Volume};

/// Session-level settings, taken from the loaded configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Track to start once the service reports a ready device, if any
    pub track: Option<TrackId>,

    /// Initial volume level
    pub volume: Volume,
}

/// Reactive playback session bound to a vendor client.
///
/// The session owns the client handle, mirrors the client's events into
/// fine-grained reactive properties, and exposes user-intent methods that
/// delegate to client calls. The snapshot delivered by the service is the
/// sole source of truth for track, pause state, position and duration;
/// every event replaces the held values wholesale.
pub struct PlaybackSession {
    client: Arc<dyn PlaybackClient>,

    /// Device the service routes playback to, once reported
    pub device: Property<Option<DeviceId>>,
    /// Track currently loaded on the device
    pub track: Property<TrackInfo>,
    /// Whether playback is paused
    pub is_paused: Property<bool>,
    /// Last authoritative playback position
    pub position: Property<Duration>,
    /// Length of the current track
    pub duration: Property<Duration>,
    /// Locally owned volume level; not synchronized from the service
    /// after initialization
    pub volume: Property<Volume>,
    /// Authentication failure reported by the service, if any
    pub auth_error: Property<Option<String>>,

    has_state: Property<bool>,
    monitor: JoinHandle<()>,
}

impl PlaybackSession {
    /// Start a session over the given client.
    ///
    /// Subscribes to the client's events before connecting so the initial
    /// `Ready` event is not missed, then spawns a monitor task that
    /// mirrors events into the session's properties. The task runs until
    /// the session is dropped.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the connection attempt fails.
    #[instrument(skip(client, config))]
    pub async fn start(
        client: Arc<dyn PlaybackClient>,
        config: SessionConfig,
    ) -> Result<Self, PlaybackError> {
        let events = client.subscribe();
        client.connect().await?;

        let device = Property::new(None);
        let track = Property::new(TrackInfo::default());
        let is_paused = Property::new(false);
        let position = Property::new(Duration::ZERO);
        let duration = Property::new(Duration::ZERO);
        let auth_error = Property::new(None);
        let has_state = Property::new(false);

        let monitor = tokio::spawn(monitor_events(
            Arc::clone(&client),
            config.track,
            events,
            Mirror {
                device: device.clone(),
                track: track.clone(),
                is_paused: is_paused.clone(),
                position: position.clone(),
                duration: duration.clone(),
                auth_error: auth_error.clone(),
                has_state: has_state.clone(),
            },
        ));

        info!("playback session started");

        Ok(Self {
            client,
            device,
            track,
            is_paused,
            position,
            duration,
            volume: Property::new(config.volume),
            auth_error,
            has_state,
            monitor,
        })
    }

    /// Wait until the first authoritative snapshot has been applied.
    ///
    /// Returns immediately if one has already arrived. Callers that need
    /// a bound on the wait should wrap this in a timeout.
    pub async fn wait_for_snapshot(&self) {
        let mut updates = Box::pin(self.has_state.watch());
        while let Some(seen) = updates.next().await {
            if seen {
                break;
            }
        }
    }

    /// Toggle between playing and paused.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    pub async fn play_pause(&self) -> Result<(), PlaybackError> {
        self.client.toggle_play().await
    }

    /// Skip to the next track.
    ///
    /// The authoritative position is reset optimistically; the service
    /// confirms through the next state-changed event.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    pub async fn next(&self) -> Result<(), PlaybackError> {
        self.client.next_track().await?;
        self.position.set(Duration::ZERO);
        Ok(())
    }

    /// Go back to the previous track.
    ///
    /// The authoritative position is reset optimistically; the service
    /// confirms through the next state-changed event.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    pub async fn previous(&self) -> Result<(), PlaybackError> {
        self.client.previous_track().await?;
        self.position.set(Duration::ZERO);
        Ok(())
    }

    /// Seek to an absolute position in the current track.
    ///
    /// Forwards exactly one seek call to the client and updates the
    /// authoritative position optimistically.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    pub async fn seek(&self, position: Duration) -> Result<(), PlaybackError> {
        self.client.seek(position).await?;
        self.position.set(position);
        Ok(())
    }

    /// Set the playback volume.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    pub async fn set_volume(&self, volume: Volume) -> Result<(), PlaybackError> {
        self.client.set_volume(volume).await?;
        self.volume.set(volume);
        Ok(())
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.monitor.abort();
    }
}

/// Property handles the monitor task writes through.
struct Mirror {
    device: Property<Option<DeviceId>>,
    track: Property<TrackInfo>,
    is_paused: Property<bool>,
    position: Property<Duration>,
    duration: Property<Duration>,
    auth_error: Property<Option<String>>,
    has_state: Property<bool>,
}

impl Mirror {
    /// Replace the held state wholesale from an authoritative snapshot.
    fn apply(&self, snapshot: PlaybackSnapshot) {
        self.track.set(snapshot.track);
        self.is_paused.set(snapshot.is_paused);
        self.position.set(snapshot.position);
        self.duration.set(snapshot.duration);
        self.has_state.set(true);
    }
}

async fn monitor_events(
    client: Arc<dyn PlaybackClient>,
    track: Option<TrackId>,
    mut events: broadcast::Receiver<ClientEvent>,
    mirror: Mirror,
) {
    let mut started = false;

    loop {
        match events.recv().await {
            Ok(ClientEvent::Ready { device }) => {
                mirror.device.set(Some(device.clone()));

                if started {
                    debug!(device = %device, "device ready again, track already started");
                    continue;
                }
                started = true;

                let Some(track) = track.as_ref() else {
                    debug!(device = %device, "device ready, no track configured");
                    continue;
                };

                // One-shot authorization; failures are logged, never retried.
                match client.start_track(&device, track).await {
                    Ok(()) => info!(track = %track, device = %device, "track start accepted"),
                    Err(e) => warn!(track = %track, error = %e, "track start failed"),
                }
            }
            Ok(ClientEvent::StateChanged(Some(snapshot))) => {
                mirror.apply(snapshot);
            }
            Ok(ClientEvent::StateChanged(None)) => {
                debug!("empty state payload ignored");
            }
            Ok(ClientEvent::AuthenticationFailed { message }) => {
                error!(message = %message, "authentication rejected by streaming service");
                mirror.auth_error.set(Some(message));
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "event stream lagged, state may be stale");
            }
            Err(RecvError::Closed) => {
                debug!("client event stream closed");
                break;
            }
        }
    }
}
