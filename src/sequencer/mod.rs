//! The draw sequencer
//!
//! Orchestrates one draw: render the in-progress display, run the minimum
//! display timer and the draw fetch concurrently, and take exactly one
//! terminal action once both have settled. The wait is a join, not a race:
//! an instant fetch still holds the display for the full minimum duration,
//! and a slow fetch extends the wait past it. The first fetch error aborts
//! the join and takes the failure path; the timer cannot fail.

pub(crate) mod collaborators;
pub(crate) mod display;
pub(crate) mod mount;
pub(crate) mod outcome;

pub use collaborators::{
    DiagnosticSink, DrawFetcher, MinimumDelay, Navigator, StderrDiagnostics, TerminalNavigator,
    TokioDelay,
};
pub use display::{resolve_duration, DisplayConfig};
pub use mount::{MountPoint, TerminalMount};
pub use outcome::{DrawResult, FetchError, SequenceOutcome};

use reqwest::Url;

use crate::core::TOPICS_ENDPOINT;

/// What a single activation did
#[derive(Debug)]
pub enum Activation {
    /// No mount point was present; nothing was rendered or fetched
    Skipped,
    /// Both operations settled and one terminal action ran
    Completed(SequenceOutcome),
}

/// One-shot orchestrator for the draw sequence
///
/// Holds only borrowed collaborators; at most one activation runs per
/// process invocation.
pub struct DrawSequencer<'a> {
    fetcher: &'a dyn DrawFetcher,
    delay: &'a dyn MinimumDelay,
    navigator: &'a dyn Navigator,
    diagnostics: &'a dyn DiagnosticSink,
    server_url: Url,
}

impl<'a> DrawSequencer<'a> {
    pub fn new(
        fetcher: &'a dyn DrawFetcher,
        delay: &'a dyn MinimumDelay,
        navigator: &'a dyn Navigator,
        diagnostics: &'a dyn DiagnosticSink,
        server_url: Url,
    ) -> Self {
        DrawSequencer {
            fetcher,
            delay,
            navigator,
            diagnostics,
            server_url,
        }
    }

    /// Runs the draw sequence once
    ///
    /// A missing mount point is a silent no-op: no render, no fetch, no
    /// timer. Otherwise the in-progress display is rendered synchronously
    /// before either asynchronous operation is started, then the sequence
    /// suspends at the join until both settle.
    pub async fn activate(
        &self,
        mount: Option<&dyn MountPoint>,
        duration_override: Option<&str>,
    ) -> Activation {
        let Some(mount) = mount else {
            return Activation::Skipped;
        };

        let config = DisplayConfig::from_override(duration_override);
        mount.render_in_progress(&config);

        let fetch = self.fetcher.fetch_draw();
        let timer = async {
            self.delay.wait(config.duration).await;
            Ok::<(), FetchError>(())
        };

        let outcome = match futures::try_join!(fetch, timer) {
            Ok((result, ())) => {
                let target = topic_url(&self.server_url, &result.id);
                mount.finish();
                self.navigator.navigate(&target);
                SequenceOutcome::Success(result)
            }
            Err(error) => {
                mount.show_unavailable();
                // Side channel only; the UI update above already happened
                self.diagnostics.report(&error);
                SequenceOutcome::Failure(error)
            }
        };

        Activation::Completed(outcome)
    }
}

/// Forms the navigation target for a drawn topic id
///
/// The id lands as a single path segment under `/topics`, percent-escaped
/// so ids containing spaces or slashes stay one segment.
pub fn topic_url(server_url: &Url, id: &str) -> Url {
    let mut url = server_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend([TOPICS_ENDPOINT, id]);
    }
    url
}
