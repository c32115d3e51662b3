//! # omikuji-cli
//!
//! `omikuji-cli` is the terminal client for the omikuji topic-draw service.
//! It powers the `omikuji` CLI tool.
//!
//! ## Core Features
//!
//! - **Topic Draw**: Animated draw sequence that asks the service for a
//!   random topic and opens it, honoring a minimum display duration.
//! - **Topic Management**: List, post, and delete topics over the service's
//!   JSON API.
//! - **Session Auth**: Cookie-based login against the service, persisted
//!   across invocations.
//!
//! ## Example
//!
//! ```rust
//! use omikuji_cli::sequencer::resolve_duration;
//!
//! // Invalid overrides fall back to the 3000ms default
//! assert_eq!(resolve_duration(Some("not-a-number")), 3000);
//! assert_eq!(resolve_duration(Some("1500")), 1500);
//! ```

pub mod client;
pub mod commands;
pub mod core;
pub mod sequencer;
pub mod utils;
