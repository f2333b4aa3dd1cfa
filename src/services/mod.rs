/// Shared service primitives.
pub mod common;

/// Playback session, position tracking and the vendor client seam.
pub mod playback;
