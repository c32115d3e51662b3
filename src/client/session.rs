//! Persisted login session
//!
//! The service authenticates with a `session` cookie set by the login form.
//! The CLI captures that cookie once and keeps it under the user config
//! directory so later invocations stay logged in.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config_dir;

const SESSION_FILE: &str = "session.json";

/// A captured service session cookie
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Raw value of the `session` cookie
    pub cookie: String,
}

impl Session {
    /// Renders the `Cookie` request header value for this session
    pub fn cookie_header(&self) -> String {
        format!("session={}", self.cookie)
    }
}

fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SESSION_FILE))
}

/// Loads the stored session, if any; unreadable or malformed files count
/// as "not logged in" rather than errors
pub fn load() -> Option<Session> {
    let path = session_path().ok()?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> Option<Session> {
    let contents = fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Persists a freshly captured session
pub fn store(session: &Session) -> Result<()> {
    let path = session_path()?;
    store_at(&path, session)
}

pub fn store_at(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(session)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Discards the stored session; returns whether one existed
pub fn clear() -> Result<bool> {
    let path = session_path()?;
    clear_at(&path)
}

pub fn clear_at(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        return Ok(true);
    }
    Ok(false)
}
