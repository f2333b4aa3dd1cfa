//! Tonearm - remote control surface for a vendor-hosted streaming player.
//!
//! Tonearm owns no audio pipeline. It connects a playback client to the
//! streaming service, mirrors the client's asynchronous events into
//! reactive local state, locally extrapolates the displayed playback
//! position between authoritative updates, and forwards transport
//! intents (play/pause, next, previous, seek, volume) back to the
//! service. The main features include:
//!
//! - Reactive playback session over an injected client seam
//! - Local position extrapolation between sparse state events
//! - CLI interface for transport control and state rendering
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tonearm::config::Config;
//! use tonearm::services::playback::{ConnectClient, PlaybackSession};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let client = ConnectClient::new(config.connect_settings())?;
//! let session = PlaybackSession::start(Arc::new(client), config.session_config()).await?;
//!
//! println!("paused: {}", session.is_paused.get());
//! # Ok(())
//! # }
//! ```

/// Configuration schema and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for playback control.
pub mod cli;

/// Reactive services for playback integration.
pub mod services;

/// Tracing initialization helpers.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use self::core::{Result, TonearmError};
