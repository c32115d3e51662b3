//! Common test utilities and fake collaborators for the draw sequencer
#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::Url;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{Duration, Instant};

use omikuji_cli::sequencer::{
    DiagnosticSink, DisplayConfig, DrawFetcher, DrawResult, FetchError, MinimumDelay, MountPoint,
    Navigator,
};

static TEST_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Acquires a global lock for tests that modify process-wide state (env vars)
pub fn lock_test() -> MutexGuard<'static, ()> {
    TEST_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scripted draw fetcher: settles once with the configured result after an
/// optional artificial delay, and counts how often it was asked
pub struct FakeFetcher {
    outcome: Mutex<Option<Result<DrawResult, FetchError>>>,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn success(id: &str) -> Self {
        FakeFetcher {
            outcome: Mutex::new(Some(Ok(DrawResult { id: id.to_string() }))),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failure(error: FetchError) -> Self {
        FakeFetcher {
            outcome: Mutex::new(Some(Err(error))),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DrawFetcher for FakeFetcher {
    async fn fetch_draw(&self) -> Result<DrawResult, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("fetch_draw settled more than once per activation")
    }
}

/// Real timer that additionally records every requested duration
pub struct RecordingDelay {
    pub requested: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        RecordingDelay {
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MinimumDelay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.requested.lock().unwrap().push(duration);
        tokio::time::sleep(duration).await;
    }
}

/// Records each navigation target together with when it happened
pub struct RecordingNavigator {
    pub navigations: Mutex<Vec<(Url, Instant)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        RecordingNavigator {
            navigations: Mutex::new(Vec::new()),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &Url) {
        self.navigations
            .lock()
            .unwrap()
            .push((target.clone(), Instant::now()));
    }
}

/// What happened to the mount point, in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountEvent {
    Rendered(Duration),
    Finished,
    Unavailable,
}

/// Mount point that records every write instead of drawing anything
pub struct RecordingMount {
    pub events: Mutex<Vec<MountEvent>>,
}

impl RecordingMount {
    pub fn new() -> Self {
        RecordingMount {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<MountEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl MountPoint for RecordingMount {
    fn render_in_progress(&self, config: &DisplayConfig) {
        self.events
            .lock()
            .unwrap()
            .push(MountEvent::Rendered(config.duration));
    }

    fn finish(&self) {
        self.events.lock().unwrap().push(MountEvent::Finished);
    }

    fn show_unavailable(&self) {
        self.events.lock().unwrap().push(MountEvent::Unavailable);
    }
}

/// Diagnostic sink that captures the rendered failure reasons
pub struct RecordingSink {
    pub reports: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink {
            reports: Mutex::new(Vec::new()),
        }
    }

    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, error: &FetchError) {
        self.reports.lock().unwrap().push(error.to_string());
    }
}
