//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality:
//! - Runtime settings resolution (flags, env vars, config file)
//! - Shared constants for the draw sequence and service endpoints
//!
//! Internal implementation details are not exposed through this API.

// Settings
pub use super::config::{config_dir, load_settings, Settings};

// Draw sequence configuration
pub use super::config::{DEFAULT_DURATION_MS, FETCH_TIMEOUT_SECS};

// Service endpoints
pub use super::config::{
    DRAW_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT, TOPICS_ENDPOINT, DEFAULT_SERVER_URL,
};

// User-facing messages
pub use super::config::{DRAWING_MESSAGE, NOT_LOGGED_IN_MESSAGE, NO_TOPICS_MESSAGE};

// UI configuration
pub use super::config::{SPINNER_TEMPLATE, SPINNER_TICK_MS, TITLE_DISPLAY_WIDTH};

// Terminal utilities (re-exported from utils)
pub use crate::utils::{set_terminal_title, set_terminal_title_and_flush};
