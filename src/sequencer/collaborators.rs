//! Injected collaborators for the draw sequencer
//!
//! The sequencer only talks to the outside world through these traits, so
//! tests can drive it with fakes (instant timers, scripted fetch results,
//! recording navigators) without a terminal or a running service.

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

use super::outcome::{DrawResult, FetchError};

/// Produces the draw result from the service
#[async_trait]
pub trait DrawFetcher: Send + Sync {
    /// Requests a randomly drawn topic; settles with a result or a failure
    async fn fetch_draw(&self) -> Result<DrawResult, FetchError>;
}

/// Enforces the minimum display duration
#[async_trait]
pub trait MinimumDelay: Send + Sync {
    /// Waits out the given duration; has no failure mode
    async fn wait(&self, duration: Duration);
}

/// Performs the terminal success action for the selected topic
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &Url);
}

/// Side channel for draw failure diagnostics
///
/// Reporting must never panic or block the surrounding UI update.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &FetchError);
}

/// Production timer backed by the tokio runtime
pub struct TokioDelay;

#[async_trait]
impl MinimumDelay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Production navigator: hands the selected topic URL to the user
///
/// A terminal client cannot redirect a page, so "navigation" is emitting
/// the target on stdout where shells and terminals make it clickable.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, target: &Url) {
        println!("🎯 {target}");
    }
}

/// Production diagnostics: failure details go to stderr, away from the
/// user-visible outcome on stdout
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, error: &FetchError) {
        eprintln!("⚠️  draw failed: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_delay_waits_at_least_requested_duration() {
        let delay = TokioDelay;
        let start = Instant::now();
        delay.wait(Duration::from_millis(30)).await;
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
