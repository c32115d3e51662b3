//! Configuration constants and settings resolution

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Deserialize;
use std::path::PathBuf;

// Draw sequence configuration
//
// The minimum display duration guarantees the draw animation stays visible
// even when the service answers instantly. The fetch timeout bounds how long
// an unresponsive service can hold the sequence open.
pub const DEFAULT_DURATION_MS: u64 = 3000;
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Service endpoints (relative to the configured base URL)
pub const DRAW_ENDPOINT: &str = "omikuji";
pub const TOPICS_ENDPOINT: &str = "topics";
pub const LOGIN_ENDPOINT: &str = "login";
pub const REGISTER_ENDPOINT: &str = "register";

// Default service location, matching the service's own default port
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

// UI Constants
pub const DRAWING_MESSAGE: &str = "drawing a topic...";
pub const NO_TOPICS_MESSAGE: &str = "No topics available.";
pub const NOT_LOGGED_IN_MESSAGE: &str = "Not logged in. Run 'omikuji login' first.";
pub const SPINNER_TEMPLATE: &str = "{spinner:.bold} {wide_msg}";
pub const SPINNER_TICK_MS: u64 = 80;

// Display formatting constants
pub const TITLE_DISPLAY_WIDTH: usize = 40;

// Environment variables
const SERVER_ENV_VAR: &str = "OMIKUJI_SERVER";
const DURATION_ENV_VAR: &str = "OMIKUJI_DRAW_MS";

/// Resolved runtime settings for a single CLI invocation
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base URL of the omikuji service
    pub server_url: Url,
    /// Raw minimum-display-duration override, if any; fed through
    /// `sequencer::resolve_duration` so invalid values default silently
    pub duration_override: Option<String>,
}

/// Optional on-disk configuration (`~/.config/omikuji/config.toml`)
#[derive(Deserialize, Default)]
struct ConfigFile {
    server: Option<ServerSection>,
}

#[derive(Deserialize)]
struct ServerSection {
    url: Option<String>,
}

/// Returns the per-user configuration directory for the CLI
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine the user configuration directory")?
        .join("omikuji");
    Ok(dir)
}

fn read_config_file() -> Option<ConfigFile> {
    let path = config_dir().ok()?.join("config.toml");
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("⚠️  Ignoring malformed config.toml: {e}");
            None
        }
    }
}

/// Determines the service base URL and duration override for this invocation
///
/// Priority order for the server URL:
/// 1. --server flag
/// 2. OMIKUJI_SERVER env var
/// 3. `server.url` in ~/.config/omikuji/config.toml
/// 4. Default (http://localhost:8000)
///
/// The duration override follows the same flag → env precedence; it stays a
/// raw string here so every source gets the same defaulting rules later.
pub fn load_settings(
    server_flag: Option<&str>,
    duration_flag: Option<&str>,
) -> Result<Settings> {
    let raw_url = server_flag
        .map(str::to_string)
        .or_else(|| std::env::var(SERVER_ENV_VAR).ok())
        .or_else(|| read_config_file().and_then(|c| c.server).and_then(|s| s.url))
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    let server_url = Url::parse(&raw_url)
        .with_context(|| format!("Invalid server URL: {raw_url}"))?;

    let duration_override = duration_flag
        .map(str::to_string)
        .or_else(|| std::env::var(DURATION_ENV_VAR).ok());

    Ok(Settings {
        server_url,
        duration_override,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_url_parses() {
        assert!(Url::parse(DEFAULT_SERVER_URL).is_ok());
    }

    #[test]
    fn test_load_settings_rejects_garbage_url() {
        let result = load_settings(Some("not a url"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_settings_flag_wins() {
        let settings = load_settings(Some("https://example.com"), Some("1200"))
            .expect("flag URL should parse");
        assert_eq!(settings.server_url.as_str(), "https://example.com/");
        assert_eq!(settings.duration_override.as_deref(), Some("1200"));
    }
}
