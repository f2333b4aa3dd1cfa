use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;

use super::error::PlaybackError;
use super::types::{DeviceId, PlaybackSnapshot, TrackId, Volume};

/// Event delivered asynchronously by a playback client.
///
/// Delivery order and latency are controlled by the streaming service,
/// not by this crate.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// The client registered a playback device with the service
    Ready {
        /// Device the service will route playback to
        device: DeviceId,
    },

    /// The service reported new playback state.
    ///
    /// `None` means the service delivered an empty payload; receivers
    /// must ignore it without mutating state.
    StateChanged(Option<PlaybackSnapshot>),

    /// The service rejected the bearer credential
    AuthenticationFailed {
        /// Failure message reported by the service
        message: String,
    },
}

/// Client seam for the vendor playback service.
///
/// The session receives an implementation of this trait as an injected
/// dependency, never through a global handle, so tests can substitute a
/// fake. The shipped implementation is [`super::connect::ConnectClient`].
#[async_trait]
pub trait PlaybackClient: Send + Sync {
    /// Subscribe to the client's event stream.
    ///
    /// Subscribe before calling [`PlaybackClient::connect`] to observe
    /// the initial `Ready` event.
    fn subscribe(&self) -> broadcast::Receiver<ClientEvent>;

    /// Establish the connection to the streaming service.
    ///
    /// Emits `Ready` once a playback device is available, then keeps
    /// delivering `StateChanged` events until the client is dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::AuthenticationFailed` if the credential is
    /// rejected, `PlaybackError::DeviceNotFound` if no usable device is
    /// registered.
    async fn connect(&self) -> Result<(), PlaybackError>;

    /// Toggle between playing and paused.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    async fn toggle_play(&self) -> Result<(), PlaybackError>;

    /// Seek to an absolute position in the current track.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    async fn seek(&self, position: Duration) -> Result<(), PlaybackError>;

    /// Skip to the next track.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    async fn next_track(&self) -> Result<(), PlaybackError>;

    /// Go back to the previous track.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    async fn previous_track(&self) -> Result<(), PlaybackError>;

    /// Set the playback volume on the device.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::ControlFailed` if the service rejects the command.
    async fn set_volume(&self, volume: Volume) -> Result<(), PlaybackError>;

    /// Ask the service to start playing a track on a device.
    ///
    /// One-shot authorization request bearing the client credential.
    /// Callers log the outcome and never retry.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::TrackStartFailed` if the service rejects the request.
    async fn start_track(&self, device: &DeviceId, track: &TrackId) -> Result<(), PlaybackError>;
}
