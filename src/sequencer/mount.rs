//! The mount point: where the draw sequence renders its progress

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

use super::display::DisplayConfig;
use crate::core::{NO_TOPICS_MESSAGE, SPINNER_TEMPLATE, SPINNER_TICK_MS};

/// The single display surface the sequence writes to
///
/// Written at exactly two points: the initial render and the terminal
/// outcome. Both writes happen from the one execution context driving the
/// sequence, so implementations need no locking of their own.
pub trait MountPoint: Send + Sync {
    /// Clears prior content and shows the animation plus the in-progress
    /// caption; synchronous, completes before any async work can resolve
    fn render_in_progress(&self, config: &DisplayConfig);

    /// Tears down the in-progress display ahead of navigation
    fn finish(&self);

    /// Replaces the display with the fixed no-topics message
    fn show_unavailable(&self);
}

/// Production mount: an indicatif spinner on an interactive terminal
pub struct TerminalMount {
    spinner: ProgressBar,
}

impl TerminalMount {
    /// Looks up the mount point for this process
    ///
    /// Returns `None` when no interactive terminal is attached (output piped
    /// or redirected); the caller treats that as a silent no-op, not an
    /// error.
    pub fn locate() -> Option<Self> {
        if !std::io::stderr().is_terminal() {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            spinner.set_style(style);
        }
        Some(TerminalMount { spinner })
    }
}

impl MountPoint for TerminalMount {
    fn render_in_progress(&self, config: &DisplayConfig) {
        self.spinner.reset();
        self.spinner.set_message(format!("🎋 {}", config.caption));
        self.spinner
            .enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn show_unavailable(&self) {
        self.spinner.finish_and_clear();
        println!("🍂 {NO_TOPICS_MESSAGE}");
    }
}
