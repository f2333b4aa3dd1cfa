use std::fmt;
use std::ops::Deref;
use std::time::Duration;

/// Unique identifier for a playback device registered with the
/// streaming service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    /// Create a DeviceId from the identifier reported by the service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw device identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier (URI) of a track known to the streaming service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackId(String);

impl TrackId {
    /// Create a TrackId from a service track URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Get the track URI.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Volume of the player
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Create a new instance of a volume with safeguarded values
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Descriptive information about the track the service is playing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackInfo {
    /// Track title
    pub name: String,

    /// Track artist
    pub artist: String,

    /// URL to album artwork image
    pub art_url: String,
}

/// Authoritative playback state reported by the streaming service.
///
/// A snapshot is immutable once received; the session replaces its held
/// state wholesale on every snapshot rather than patching fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSnapshot {
    /// Whether playback is currently paused
    pub is_paused: bool,

    /// Playback position at the time the snapshot was taken
    pub position: Duration,

    /// Length of the current track
    pub duration: Duration,

    /// Track currently loaded on the device
    pub track: TrackInfo,
}
