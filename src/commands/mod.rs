//! CLI command implementations

pub mod auth;
pub mod draw;
pub mod topics;
