/// Client seam for the vendor playback service
pub mod client;
/// Remote-control client over the service Web API
pub mod connect;
/// Playback error types
pub mod error;
/// Local extrapolation of the displayed position
pub mod position;
/// Reactive playback session bound to a client
pub mod session;
/// Playback domain types
pub mod types;

pub use client::{ClientEvent, PlaybackClient};
pub use connect::{ConnectClient, ConnectSettings};
pub use error::PlaybackError;
pub use position::{PositionTracker, TICK_INTERVAL, progress_ratio};
pub use session::{PlaybackSession, SessionConfig};
pub use types::{DeviceId, PlaybackSnapshot, TrackId, TrackInfo, Volume};
