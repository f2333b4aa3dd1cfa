use std::time::Duration;

use serde::Deserialize;

use crate::services::playback::types::{PlaybackSnapshot, TrackInfo};

/// Reply to the device listing request.
#[derive(Debug, Deserialize)]
pub(crate) struct DevicesReply {
    pub devices: Vec<DeviceReply>,
}

/// One playback device registered with the service.
#[derive(Debug, Deserialize)]
pub(crate) struct DeviceReply {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Player state payload polled from the service.
#[derive(Debug, Deserialize)]
pub(crate) struct PlayerStateReply {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub progress_ms: u64,
    pub item: Option<TrackReply>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackReply {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistReply>,
    pub album: Option<AlbumReply>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtistReply {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlbumReply {
    #[serde(default)]
    pub images: Vec<ImageReply>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageReply {
    pub url: String,
}

impl PlayerStateReply {
    /// Translate the wire payload into an authoritative snapshot.
    pub(crate) fn into_snapshot(self) -> PlaybackSnapshot {
        let (track, duration) = match self.item {
            Some(item) => {
                let artist = item
                    .artists
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                let art_url = item
                    .album
                    .and_then(|album| album.images.into_iter().next())
                    .map(|image| image.url)
                    .unwrap_or_default();
                (
                    TrackInfo {
                        name: item.name,
                        artist,
                        art_url,
                    },
                    Duration::from_millis(item.duration_ms),
                )
            }
            None => (TrackInfo::default(), Duration::ZERO),
        };

        PlaybackSnapshot {
            is_paused: !self.is_playing,
            position: Duration::from_millis(self.progress_ms),
            duration,
            track,
        }
    }
}
