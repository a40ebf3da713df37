//! Console interaction: prompts and result reporting.

use dialoguer::Input;

use hotshare::hosted::HostedNetworkStatus;
use hotshare::network::{AdapterRecord, RetryPrompt, SharingRole, validate_index};
use hotshare::orchestrator::{CredentialInput, Operator, PromptError, StartSummary, StopSummary};
use hotshare::sharing::EnableOutcome;

/// [`Operator`] that reads from the terminal.
///
/// Values given on the command line are used in place of the matching
/// prompt. An unusable `--uplink` falls back to the prompt.
pub struct ConsoleOperator {
    ssid: Option<String>,
    uplink: Option<String>,
}

impl ConsoleOperator {
    pub const fn new(ssid: Option<String>, uplink: Option<String>) -> Self {
        Self { ssid, uplink }
    }
}

/// Map a dialoguer / terminal I/O failure into a prompt error.
fn prompt_err(e: impl std::fmt::Display) -> PromptError {
    PromptError::Io(std::io::Error::other(e.to_string()))
}

fn key_err(e: std::io::Error) -> PromptError {
    match e.kind() {
        std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof => {
            PromptError::Cancelled
        }
        _ => PromptError::Io(e),
    }
}

impl Operator for ConsoleOperator {
    fn hotspot_credentials(&mut self) -> Result<CredentialInput, PromptError> {
        let ssid = match self.ssid.take() {
            Some(ssid) => ssid,
            None => Input::<String>::new()
                .with_prompt("SSID (3 characters to 32 bytes)")
                .interact_text()
                .map_err(prompt_err)?,
        };

        let key = rpassword::prompt_password("Key (8-63 characters): ").map_err(key_err)?;

        Ok(CredentialInput { ssid, key })
    }

    fn choose_uplink(&mut self, candidates: &[AdapterRecord]) -> Result<AdapterRecord, PromptError> {
        println!("\nConnected adapters:");
        for line in candidate_lines(candidates) {
            println!("{line}");
        }

        if let Some(input) = self.uplink.take() {
            match validate_index(candidates, &input) {
                Ok(adapter) => return Ok(adapter),
                Err(reason) => tracing::warn!("Ignoring --uplink: {reason}"),
            }
        }

        prompt_until_valid(
            candidates,
            || {
                Input::<String>::new()
                    .with_prompt("Uplink index")
                    .interact_text()
                    .map_err(prompt_err)
            },
            |reason| eprintln!("{reason}"),
        )
    }
}

/// Reads answers until one selects a candidate. Each rejected answer is
/// passed to `on_retry` before asking again.
fn prompt_until_valid(
    candidates: &[AdapterRecord],
    mut read: impl FnMut() -> Result<String, PromptError>,
    mut on_retry: impl FnMut(&RetryPrompt),
) -> Result<AdapterRecord, PromptError> {
    loop {
        match validate_index(candidates, &read()?) {
            Ok(adapter) => return Ok(adapter),
            Err(reason) => on_retry(&reason),
        }
    }
}

/// One numbered line per candidate, marking connections already shared.
fn candidate_lines(candidates: &[AdapterRecord]) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, adapter)| match adapter.sharing_role {
            SharingRole::None => format!("  [{i}] {adapter}"),
            role => format!("  [{i}] {adapter} (shared: {role})"),
        })
        .collect()
}

const fn outcome_note(outcome: EnableOutcome) -> &'static str {
    match outcome {
        EnableOutcome::Enabled => "",
        EnableOutcome::AlreadyShared => " (already shared)",
    }
}

pub fn report_start(summary: &StartSummary) {
    println!("\nHotspot '{}' is up.", summary.ssid);
    println!(
        "  Uplink:  {}{}",
        summary.uplink.name,
        outcome_note(summary.uplink_outcome)
    );
    println!(
        "  Hotspot: {}{}",
        summary.hotspot.name,
        outcome_note(summary.hotspot_outcome)
    );
}

pub fn report_stop(summary: &StopSummary) {
    if summary.disabled.is_empty() {
        println!("No connection was shared.");
    } else {
        println!("Sharing disabled on {} connection(s).", summary.disabled.len());
    }
    println!("Hosted network stopped.");
}

pub fn report_status(status: &HostedNetworkStatus) {
    println!("{}", status.raw.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotshare::network::{AdapterId, ConnectionStatus};

    #[test]
    fn candidate_lines_are_numbered_from_zero() {
        let candidates = [
            AdapterRecord::new(AdapterId::new("a"), "Ethernet", ConnectionStatus::Connected),
            AdapterRecord::new(AdapterId::new("b"), "Wi-Fi", ConnectionStatus::Connected)
                .with_sharing(SharingRole::Public),
        ];

        let lines = candidate_lines(&candidates);

        assert!(lines[0].starts_with("  [0] Ethernet"));
        assert!(lines[1].starts_with("  [1] Wi-Fi"));
        assert!(lines[1].ends_with("(shared: public)"));
        assert!(!lines[0].contains("shared"));
    }

    #[test]
    fn preselected_uplink_skips_prompt() {
        let candidates = [AdapterRecord::new(
            AdapterId::new("a"),
            "Ethernet",
            ConnectionStatus::Connected,
        )];
        let mut operator = ConsoleOperator::new(None, Some("0".to_string()));

        let chosen = operator.choose_uplink(&candidates).unwrap();

        assert_eq!(chosen.name, "Ethernet");
    }

    fn two_candidates() -> [AdapterRecord; 2] {
        [
            AdapterRecord::new(AdapterId::new("a"), "Ethernet", ConnectionStatus::Connected),
            AdapterRecord::new(AdapterId::new("b"), "Wi-Fi", ConnectionStatus::Connected),
        ]
    }

    #[test]
    fn bad_answers_are_asked_again() {
        let candidates = two_candidates();
        let mut answers = ["7", "abc", "", "1"].into_iter();
        let mut retries = Vec::new();

        let chosen = prompt_until_valid(
            &candidates,
            || Ok(answers.next().unwrap().to_string()),
            |reason| retries.push(reason.clone()),
        )
        .unwrap();

        assert_eq!(chosen.name, "Wi-Fi");
        assert_eq!(
            retries,
            [
                RetryPrompt::OutOfRange { index: 7, len: 2 },
                RetryPrompt::NotANumber("abc".to_string()),
                RetryPrompt::NotANumber(String::new()),
            ]
        );
        assert_eq!(answers.next(), None);
    }

    #[test]
    fn failed_read_ends_the_loop() {
        let candidates = two_candidates();
        let mut reads = 0;

        let result = prompt_until_valid(
            &candidates,
            || {
                reads += 1;
                if reads == 1 {
                    Ok("9".to_string())
                } else {
                    Err(PromptError::Cancelled)
                }
            },
            |_| {},
        );

        assert!(matches!(result, Err(PromptError::Cancelled)));
        assert_eq!(reads, 2);
    }

    #[test]
    fn interrupted_key_prompt_is_cancelled() {
        let err = key_err(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(err, PromptError::Cancelled));

        let err = key_err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn outcome_note_marks_skipped_enable() {
        assert_eq!(outcome_note(EnableOutcome::Enabled), "");
        assert_eq!(outcome_note(EnableOutcome::AlreadyShared), " (already shared)");
    }
}
