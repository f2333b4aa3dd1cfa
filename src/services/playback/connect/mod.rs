mod types;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::StatusCode;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::services::playback::client::{ClientEvent, PlaybackClient};
use crate::services::playback::error::PlaybackError;
use crate::services::playback::types::{DeviceId, TrackId, Volume};

use self::types::{DevicesReply, PlayerStateReply};

/// How many client events may queue up before slow receivers lag.
const EVENT_CAPACITY: usize = 32;

/// Settings for the remote-control connection.
#[derive(Debug, Clone)]
pub struct ConnectSettings {
    /// Base URL of the service Web API
    pub api_url: String,

    /// Bearer credential attached to every request
    pub access_token: String,

    /// Preferred playback device; empty selects the active (or first)
    /// registered device
    pub device_name: String,

    /// Interval between state polls
    pub poll_interval: Duration,
}

/// `PlaybackClient` over the streaming service's remote-control Web API.
///
/// Commands are one-shot bearer-authorized requests; playback state is
/// polled on a fixed interval and republished as `StateChanged` events.
/// The playback protocol, the authentication flow and audio decoding
/// stay with the service; this client only issues the remote-control
/// requests the service documents.
pub struct ConnectClient {
    http: reqwest::Client,
    settings: ConnectSettings,
    events: broadcast::Sender<ClientEvent>,
    last_paused: Arc<AtomicBool>,
    poller: Mutex<Option<JoinHandle<()>>>,
}

impl ConnectClient {
    /// Create a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::InitializationFailed` if the API URL is
    /// malformed, or `PlaybackError::Request` if the HTTP client cannot
    /// be constructed.
    pub fn new(settings: ConnectSettings) -> Result<Self, PlaybackError> {
        let api_url = settings.api_url.trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(PlaybackError::InitializationFailed(format!(
                "API URL must start with http:// or https://, got '{}'",
                settings.api_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("tonearm/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PlaybackError::Request)?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            http,
            settings: ConnectSettings { api_url, ..settings },
            events,
            // No state seen yet; a toggle before the first poll starts playback.
            last_paused: Arc::new(AtomicBool::new(true)),
            poller: Mutex::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.settings.api_url)
    }

    /// Issue a transport command and map the reply onto the error taxonomy.
    async fn command(&self, request: reqwest::RequestBuilder, operation: &str) -> Result<(), PlaybackError> {
        let response = request
            .bearer_auth(&self.settings.access_token)
            .send()
            .await
            .map_err(PlaybackError::Request)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(PlaybackError::AuthenticationFailed(format!(
                "{operation} rejected with 401"
            ))),
            status => Err(PlaybackError::ControlFailed {
                operation: operation.to_string(),
                details: format!("service replied {status}"),
            }),
        }
    }

    async fn list_devices(&self) -> Result<DevicesReply, PlaybackError> {
        let response = self
            .http
            .get(self.endpoint("/me/player/devices"))
            .bearer_auth(&self.settings.access_token)
            .send()
            .await
            .map_err(PlaybackError::Request)?;

        match response.status() {
            status if status.is_success() => {
                response.json().await.map_err(PlaybackError::Request)
            }
            StatusCode::UNAUTHORIZED => Err(PlaybackError::AuthenticationFailed(
                "device listing rejected with 401".to_string(),
            )),
            status => Err(PlaybackError::InitializationFailed(format!(
                "device listing replied {status}"
            ))),
        }
    }

    /// Pick the configured device, or fall back to the active device
    /// (then the first registered one) when no name is configured.
    fn select_device(&self, reply: DevicesReply) -> Result<DeviceId, PlaybackError> {
        let wanted = self.settings.device_name.as_str();

        let device = if wanted.is_empty() {
            reply
                .devices
                .iter()
                .find(|d| d.is_active)
                .or_else(|| reply.devices.first())
        } else {
            reply
                .devices
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(wanted))
        };

        device
            .map(|d| DeviceId::new(d.id.clone()))
            .ok_or_else(|| PlaybackError::DeviceNotFound(wanted.to_string()))
    }

    /// Poll the player state endpoint once.
    ///
    /// `Ok(None)` is the service's empty reply (nothing playing, no
    /// payload); receivers treat it as a null snapshot.
    async fn fetch_state(
        http: &reqwest::Client,
        api_url: &str,
        access_token: &str,
    ) -> Result<Option<PlayerStateReply>, PlaybackError> {
        let response = http
            .get(format!("{api_url}/me/player"))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(PlaybackError::Request)?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(None),
            status if status.is_success() => {
                response.json().await.map(Some).map_err(PlaybackError::Request)
            }
            StatusCode::UNAUTHORIZED => Err(PlaybackError::AuthenticationFailed(
                "state poll rejected with 401".to_string(),
            )),
            status => Err(PlaybackError::ControlFailed {
                operation: "state poll".to_string(),
                details: format!("service replied {status}"),
            }),
        }
    }

    /// Stream of state events, polled at the configured interval.
    ///
    /// Authentication failures terminate the stream; transient poll
    /// errors are logged and skipped.
    fn state_updates(
        http: reqwest::Client,
        api_url: String,
        access_token: String,
        interval: Duration,
        last_paused: Arc<AtomicBool>,
    ) -> impl Stream<Item = ClientEvent> + Send {
        async_stream::stream! {
            loop {
                tokio::time::sleep(interval).await;

                match Self::fetch_state(&http, &api_url, &access_token).await {
                    Ok(Some(reply)) => {
                        last_paused.store(!reply.is_playing, Ordering::Relaxed);
                        yield ClientEvent::StateChanged(Some(reply.into_snapshot()));
                    }
                    Ok(None) => yield ClientEvent::StateChanged(None),
                    Err(PlaybackError::AuthenticationFailed(message)) => {
                        yield ClientEvent::AuthenticationFailed { message };
                        break;
                    }
                    Err(e) => warn!(error = %e, "state poll failed"),
                }
            }
        }
    }
}

#[async_trait]
impl PlaybackClient for ConnectClient {
    fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    #[instrument(skip(self))]
    async fn connect(&self) -> Result<(), PlaybackError> {
        let device = match self.list_devices().await {
            Ok(reply) => self.select_device(reply)?,
            Err(PlaybackError::AuthenticationFailed(message)) => {
                let _ = self.events.send(ClientEvent::AuthenticationFailed {
                    message: message.clone(),
                });
                return Err(PlaybackError::AuthenticationFailed(message));
            }
            Err(e) => return Err(e),
        };

        info!(device = %device, "connected to streaming service");
        let _ = self.events.send(ClientEvent::Ready { device });

        let updates = Self::state_updates(
            self.http.clone(),
            self.settings.api_url.clone(),
            self.settings.access_token.clone(),
            self.settings.poll_interval,
            Arc::clone(&self.last_paused),
        );
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let mut updates = Box::pin(updates);
            while let Some(event) = updates.next().await {
                let _ = events.send(event);
            }
            debug!("state poll stream ended");
        });

        let mut poller = self
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = poller.replace(task) {
            previous.abort();
        }

        Ok(())
    }

    async fn toggle_play(&self) -> Result<(), PlaybackError> {
        if self.last_paused.load(Ordering::Relaxed) {
            self.command(self.http.put(self.endpoint("/me/player/play")), "play")
                .await
        } else {
            self.command(self.http.put(self.endpoint("/me/player/pause")), "pause")
                .await
        }
    }

    async fn seek(&self, position: Duration) -> Result<(), PlaybackError> {
        let request = self
            .http
            .put(self.endpoint("/me/player/seek"))
            .query(&[("position_ms", position.as_millis().to_string())]);
        self.command(request, "seek").await
    }

    async fn next_track(&self) -> Result<(), PlaybackError> {
        self.command(self.http.post(self.endpoint("/me/player/next")), "next")
            .await
    }

    async fn previous_track(&self) -> Result<(), PlaybackError> {
        self.command(
            self.http.post(self.endpoint("/me/player/previous")),
            "previous",
        )
        .await
    }

    async fn set_volume(&self, volume: Volume) -> Result<(), PlaybackError> {
        let percent = volume.as_percentage().round() as u32;
        let request = self
            .http
            .put(self.endpoint("/me/player/volume"))
            .query(&[("volume_percent", percent.to_string())]);
        self.command(request, "set volume").await
    }

    async fn start_track(&self, device: &DeviceId, track: &TrackId) -> Result<(), PlaybackError> {
        let body = serde_json::json!({
            "uris": [track.as_str()],
            "device_id": device.as_str(),
        });

        let response = self
            .http
            .put(self.endpoint("/me/player/play"))
            .bearer_auth(&self.settings.access_token)
            .json(&body)
            .send()
            .await
            .map_err(PlaybackError::Request)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(PlaybackError::AuthenticationFailed(
                "track start rejected with 401".to_string(),
            )),
            status => Err(PlaybackError::TrackStartFailed(format!(
                "service replied {status}"
            ))),
        }
    }
}

impl Drop for ConnectClient {
    fn drop(&mut self) {
        let poller = self.poller.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = poller.as_ref() {
            task.abort();
        }
    }
}
