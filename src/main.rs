//! hotshare: Windows hosted network with Internet Connection Sharing
//!
//! Entry point for the hotshare application.

use hotshare::config::{Action, Cli, ValidatedConfig};
use hotshare::hosted::NetshWlan;
use hotshare::network::platform::{PowerShellNetwork, is_elevated};
use hotshare::orchestrator::{Environment, Orchestrator, OrchestratorError};
use std::process::ExitCode;

mod app;
mod shell;

use app::{exit_code, print_banner, print_config_hint, print_runtime_hint, setup_tracing};
use shell::{ConsoleOperator, report_start, report_status, report_stop};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    print_banner();
    tracing::debug!("{config}");

    match run_action(&config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            print_runtime_hint(&e);
            exit_code::runtime_error()
        }
    }
}

/// Runs the configured action against the real OS services.
///
/// Excluded from coverage - requires Windows networking services.
#[cfg(not(tarpaulin_include))]
fn run_action(config: &ValidatedConfig) -> Result<(), OrchestratorError> {
    let wlan = NetshWlan::new();
    let network = PowerShellNetwork::new();
    let env = Environment {
        is_admin: is_elevated(),
        wlan: &wlan,
        connections: &network,
        sharing: &network,
        lookup: &network,
    };

    let orchestrator = Orchestrator::new(env)
        .with_miniport_service(&config.miniport_service)
        .with_candidate_filter(&config.candidate_filter);

    match config.action {
        Action::Show => orchestrator.show().map(|status| report_status(&status)),
        Action::Stop => orchestrator.stop().map(|summary| report_stop(&summary)),
        Action::Start => {
            let mut operator = ConsoleOperator::new(config.ssid.clone(), config.uplink.clone());
            orchestrator
                .start(&mut operator)
                .map(|summary| report_start(&summary))
        }
    }
}
