//! Login session command implementations

use anyhow::{bail, Result};
use std::io::{self, Write};

use crate::client::{session, ApiClient};
use crate::core::load_settings;

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

/// Handles the login command
///
/// Performs the service's form login and persists the captured session
/// cookie so later invocations stay authenticated.
pub async fn handle_login_command(server: Option<&str>, username: Option<&str>) -> Result<()> {
    let settings = load_settings(server, None)?;
    let client = ApiClient::new(settings.server_url)?;

    let username = match username {
        Some(name) => name.to_string(),
        None => prompt("Username: ")?,
    };
    if username.trim().is_empty() {
        bail!("Username is required.");
    }

    let password = prompt("Password: ")?;
    if password.is_empty() {
        bail!("Password is required.");
    }

    let session = client.login(username.trim(), &password).await?;
    session::store(&session)?;

    println!("✅ Logged in as {}", username.trim());
    Ok(())
}

/// Handles the register command
///
/// The service auto-logs new accounts in, so the captured session is
/// persisted just like after a login.
pub async fn handle_register_command(server: Option<&str>, username: Option<&str>) -> Result<()> {
    let settings = load_settings(server, None)?;
    let client = ApiClient::new(settings.server_url)?;

    let username = match username {
        Some(name) => name.to_string(),
        None => prompt("Username: ")?,
    };
    if username.trim().is_empty() {
        bail!("Username is required.");
    }

    let password = prompt("Password: ")?;
    if password.is_empty() {
        bail!("Password is required.");
    }

    let session = client.register(username.trim(), &password).await?;
    session::store(&session)?;

    println!("✅ Registered and logged in as {}", username.trim());
    Ok(())
}

/// Handles the logout command; purely client-side, the stored session is
/// discarded
pub fn handle_logout_command() -> Result<()> {
    if session::clear()? {
        println!("👋 Logged out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}
