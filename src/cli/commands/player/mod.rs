mod next;
mod play_pause;
mod previous;
mod seek;
mod status;
mod utils;
mod volume;
mod watch;

pub use next::NextCommand;
pub use play_pause::PlayPauseCommand;
pub use previous::PreviousCommand;
pub use seek::SeekCommand;
pub use status::StatusCommand;
pub use volume::VolumeCommand;
pub use watch::WatchCommand;
