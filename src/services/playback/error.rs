/// Errors that can occur while controlling remote playback
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// Failed to initialize the playback client
    #[error("failed to initialize playback client: {0}")]
    InitializationFailed(String),

    /// The streaming service rejected the bearer credential
    #[error("authentication rejected by streaming service: {0}")]
    AuthenticationFailed(String),

    /// No playback device matched the configured name
    #[error("no playback device matching '{0}' is available")]
    DeviceNotFound(String),

    /// A transport command was rejected by the service
    #[error("{operation} failed: {details}")]
    ControlFailed {
        /// Name of the command that failed
        operation: String,
        /// Failure details reported by the service
        details: String,
    },

    /// The track-start request was rejected by the service
    #[error("track start rejected: {0}")]
    TrackStartFailed(String),

    /// HTTP transport error
    #[error("request to streaming service failed: {0}")]
    Request(#[from] reqwest::Error),
}
