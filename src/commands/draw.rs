//! Topic draw command implementation
//!
//! Wires the production collaborators (HTTP client, tokio timer, terminal
//! mount, stdout navigator, stderr diagnostics) into the draw sequencer and
//! runs one activation.

use anyhow::Result;

use crate::client::ApiClient;
use crate::core::{load_settings, set_terminal_title, set_terminal_title_and_flush};
use crate::sequencer::{
    Activation, DrawSequencer, MountPoint, SequenceOutcome, StderrDiagnostics, TerminalMount,
    TerminalNavigator, TokioDelay,
};

/// Handles the topic draw command
///
/// When no interactive terminal is attached there is no mount point; the
/// sequence is skipped silently and no request is issued. A failed draw
/// already rendered its outcome, so the process still exits cleanly.
pub async fn handle_draw_command(
    server: Option<&str>,
    duration_ms: Option<&str>,
) -> Result<()> {
    set_terminal_title("🎋 omikuji");

    let settings = load_settings(server, duration_ms)?;
    let client = ApiClient::new(settings.server_url.clone())?;
    let delay = TokioDelay;
    let navigator = TerminalNavigator;
    let diagnostics = StderrDiagnostics;

    let sequencer = DrawSequencer::new(
        &client,
        &delay,
        &navigator,
        &diagnostics,
        settings.server_url,
    );

    let mount = TerminalMount::locate();
    let activation = sequencer
        .activate(
            mount.as_ref().map(|m| m as &dyn MountPoint),
            settings.duration_override.as_deref(),
        )
        .await;

    set_terminal_title_and_flush(completion_title(&activation));
    Ok(())
}

/// Picks the terminal title reflecting how the draw ended; a failed or
/// skipped draw must not report the success checkmark
fn completion_title(activation: &Activation) -> &'static str {
    match activation {
        Activation::Completed(SequenceOutcome::Success(_)) => "✅ omikuji",
        Activation::Completed(SequenceOutcome::Failure(_)) => "🍂 omikuji",
        Activation::Skipped => "omikuji",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequencer::{DrawResult, FetchError};

    #[test]
    fn test_completion_title_reports_success() {
        let activation = Activation::Completed(SequenceOutcome::Success(DrawResult {
            id: "7".to_string(),
        }));
        assert_eq!(completion_title(&activation), "✅ omikuji");
    }

    #[test]
    fn test_completion_title_does_not_claim_success_on_failure() {
        let activation = Activation::Completed(SequenceOutcome::Failure(FetchError::Status(404)));
        assert_eq!(completion_title(&activation), "🍂 omikuji");

        assert_eq!(completion_title(&Activation::Skipped), "omikuji");
    }
}
