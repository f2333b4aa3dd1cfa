//! Formatting utilities for CLI output.
//!
//! Provides the textual rendering of playback state: timestamps,
//! progress and volume bars, and styled help and error text.

use std::time::Duration;

use crate::services::playback::{Volume, progress_ratio};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Format a playback position as `mm:ss`.
///
/// Minutes run past 59 without rolling into hours, so the minute/second
/// pair survives a round trip for every input.
pub fn format_position(position: Duration) -> String {
    let total_seconds = position.as_secs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar spanning `[0, duration]` at `displayed`.
///
/// The displayed position may exceed the duration (extrapolation drift,
/// or a zero duration before the first snapshot); the bar clamps
/// instead of failing.
pub fn render_progress_bar(displayed: Duration, duration: Duration, width: usize) -> String {
    let ratio = progress_ratio(displayed, duration);
    let filled = (width as f64 * ratio) as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.push_str(&"=".repeat(filled));
    bar.push_str(&" ".repeat(width - filled));
    bar.push(']');
    bar
}

/// Render a volume bar with the level as a percentage.
pub fn render_volume_bar(volume: Volume, width: usize) -> String {
    let filled = (width as f64 * *volume) as usize;
    let filled = filled.min(width);

    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        " ".repeat(width - filled),
        volume.as_percentage()
    )
}
