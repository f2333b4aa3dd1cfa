mod paths;

use std::fs;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Result, TonearmError};
use crate::services::playback::{ConnectSettings, SessionConfig, TrackId, Volume};

pub use paths::ConfigPaths;

/// Connection settings for the streaming service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectConfig {
    /// Base URL of the service Web API
    pub api_url: String,

    /// Bearer credential authorizing remote-control requests
    pub access_token: String,

    /// Preferred playback device name; empty selects the active device
    pub device_name: String,

    /// Track URI to start once a device is ready; empty starts nothing
    pub track: String,

    /// Milliseconds between playback state polls
    pub poll_interval_ms: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.spotify.com/v1".to_string(),
            access_token: String::new(),
            device_name: String::new(),
            track: String::new(),
            poll_interval_ms: 1000,
        }
    }
}

/// Local player settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial volume level in `[0.0, 1.0]`
    pub volume: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { volume: 0.5 }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Streaming service connection settings
    pub connect: ConnectConfig,

    /// Local player settings
    pub player: PlayerConfig,
}

impl Config {
    /// Load the configuration from the XDG config file.
    ///
    /// A missing file yields the defaults; a present but malformed file
    /// is an error.
    ///
    /// # Errors
    /// Returns `TonearmError::Io` if the file exists but cannot be read,
    /// or `TonearmError::TomlParseError` if it cannot be parsed.
    pub fn load() -> Result<Self> {
        let path = ConfigPaths::config_file().map_err(TonearmError::Io)?;

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)
            .map_err(|e| TonearmError::toml_parse(e, Some(&path)))?;

        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `TonearmError::TomlParseError` if the string cannot be parsed.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TonearmError::toml_parse(e, None))
    }

    /// Connection settings for the remote-control client.
    pub fn connect_settings(&self) -> ConnectSettings {
        ConnectSettings {
            api_url: self.connect.api_url.clone(),
            access_token: self.connect.access_token.clone(),
            device_name: self.connect.device_name.clone(),
            poll_interval: Duration::from_millis(self.connect.poll_interval_ms),
        }
    }

    /// Session settings derived from this configuration.
    pub fn session_config(&self) -> SessionConfig {
        let track = if self.connect.track.is_empty() {
            None
        } else {
            Some(TrackId::new(self.connect.track.clone()))
        };

        SessionConfig {
            track,
            volume: Volume::new(self.player.volume),
        }
    }
}

#[cfg(test)]
mod tests;
