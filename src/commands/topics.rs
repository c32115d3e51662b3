//! Topic listing and management command implementations
//!
//! These commands consume the service's JSON API directly; the service
//! enforces which of them need a login or an admin role.

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use std::io::Read;
use std::path::Path;

use crate::client::ApiClient;
use crate::core::{load_settings, TITLE_DISPLAY_WIDTH};
use crate::sequencer::topic_url;

/// Handles the topic listing command
pub async fn handle_list_command(server: Option<&str>) -> Result<()> {
    let settings = load_settings(server, None)?;
    let client = ApiClient::new(settings.server_url)?;

    let topics = client.list_topics().await?;
    if topics.is_empty() {
        println!("No topics yet.");
        return Ok(());
    }

    let total = topics.len();
    let topic_word = if total == 1 { "topic" } else { "topics" };
    println!("📜 {total} {topic_word}\n");

    for topic in &topics {
        let when = format_created_at(topic.created_at.as_deref());
        println!(
            "   🟢 {:<6} {:<width$} {}",
            topic.id,
            fit_title(&topic.title, TITLE_DISPLAY_WIDTH),
            when,
            width = TITLE_DISPLAY_WIDTH
        );
    }
    Ok(())
}

/// Handles the topic posting command
///
/// The body comes from `--body-file` or, when omitted, from stdin so topics
/// can be piped in.
pub async fn handle_post_command(
    server: Option<&str>,
    title: &str,
    body_file: Option<&Path>,
) -> Result<()> {
    let body = match body_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read the topic body from stdin")?;
            buffer
        }
    };

    if title.trim().is_empty() {
        bail!("Topic title is empty.");
    }
    if body.trim().is_empty() {
        bail!("Topic body is empty.");
    }

    let settings = load_settings(server, None)?;
    let client = ApiClient::new(settings.server_url.clone())?;
    let id = client.create_topic(title.trim(), body.trim()).await?;

    println!(
        "✅ Posted '{}' → {}",
        title.trim(),
        topic_url(&settings.server_url, &id)
    );
    Ok(())
}

/// Handles the topic deletion command
pub async fn handle_delete_command(server: Option<&str>, id: &str) -> Result<()> {
    let settings = load_settings(server, None)?;
    let client = ApiClient::new(settings.server_url)?;

    client.delete_topic(id).await?;
    println!("🗑️  Deleted topic {id}");
    Ok(())
}

/// Formats the service's `created_at` timestamp for listing; unparseable or
/// absent values display as-is rather than failing the listing
fn format_created_at(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        Ok(when) => when.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Truncates long titles for aligned display; counts characters so
/// multi-byte titles never split mid-codepoint
fn fit_title(title: &str, max_length: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_length {
        return title.to_string();
    }
    let kept: String = chars[..max_length.saturating_sub(3)].iter().collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_at_parses_service_timestamps() {
        assert_eq!(
            format_created_at(Some("2024-05-01 09:30:00")),
            "2024-05-01"
        );
    }

    #[test]
    fn test_format_created_at_passes_through_unknown_shapes() {
        assert_eq!(format_created_at(Some("yesterday")), "yesterday");
        assert_eq!(format_created_at(None), "");
    }

    #[test]
    fn test_fit_title_truncates_long_titles() {
        let long = "a".repeat(60);
        let fitted = fit_title(&long, 40);
        assert_eq!(fitted.chars().count(), 40);
        assert!(fitted.ends_with("..."));
    }

    #[test]
    fn test_fit_title_keeps_short_and_multibyte_titles() {
        assert_eq!(fit_title("短い話題", 40), "短い話題");
    }
}
