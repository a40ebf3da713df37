//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, the banner, and error
//! hints that support the main entry point.

use hotshare::config::ConfigError;
use hotshare::network::ResolveError;
use hotshare::orchestrator::OrchestratorError;
use hotshare::sharing::DisableReport;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, unreadable config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - missing privileges, OS refusal, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints the start-up banner.
pub fn print_banner() {
    println!(
        "{} {} - hosted network with connection sharing",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nCheck the --config path, or omit it to use the default location.");
        }
        ConfigError::TomlParse(_) => {
            eprintln!("\nOnly [hosted] miniport_service and [uplink] include/exclude are accepted.");
        }
        _ => {}
    }
}

/// Prints helpful hints for common runtime errors.
pub fn print_runtime_hint(error: &OrchestratorError) {
    match error {
        OrchestratorError::NotAdministrator => {
            eprintln!("\nRight-click the terminal and choose 'Run as administrator'.");
        }
        OrchestratorError::UnsupportedHardware => {
            eprintln!("\nRun 'netsh wlan show drivers' and look for 'Hosted network supported'.");
        }
        OrchestratorError::SharingTeardown(report)
        | OrchestratorError::StopFailed {
            teardown: report, ..
        } => {
            for line in teardown_lines(report) {
                eprintln!("{line}");
            }
        }
        OrchestratorError::Resolve(ResolveError::HotspotAdapterNotFound { .. }) => {
            eprintln!(
                "\nThe virtual adapter may be disabled in Device Manager, \
                 or [hosted] miniport_service may not match the driver."
            );
        }
        _ => {}
    }
}

/// One line per connection that kept sharing enabled.
fn teardown_lines(report: &DisableReport) -> Vec<String> {
    report
        .failures
        .iter()
        .map(|(id, reason)| format!("  still shared: {id}: {reason}"))
        .collect()
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
