//! [`WlanService`] implementation that shells out to `netsh wlan`.

use crate::process::{CommandOutput, CommandRunner, SystemRunner};

use super::{
    DriverCapabilities, HostedNetworkStatus, KeyUsage, ModeRequest, WlanError, WlanService,
    parse_driver_capabilities, parse_hosted_network_status,
};

const NETSH: &str = "netsh";

/// Wireless service driven through `netsh wlan ...` commands.
///
/// # Example
///
/// ```no_run
/// use hotshare::hosted::{NetshWlan, WlanService};
///
/// let wlan = NetshWlan::new();
/// let caps = wlan.show_driver_capabilities().expect("netsh failed");
/// println!("hosted network supported: {:?}", caps.hosted_network_supported);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetshWlan<R = SystemRunner> {
    runner: R,
}

impl NetshWlan {
    /// Creates a netsh-backed service running real processes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner::new(),
        }
    }
}

impl<R: CommandRunner> NetshWlan<R> {
    /// Creates a netsh-backed service using `runner` to execute commands.
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    fn netsh(&self, operation: &'static str, args: &[&str]) -> Result<CommandOutput, WlanError> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.run(operation, &args)
    }

    fn run(&self, operation: &'static str, args: &[String]) -> Result<CommandOutput, WlanError> {
        let output = self.runner.run(NETSH, args)?;
        if output.success {
            Ok(output)
        } else {
            Err(WlanError::Rejected {
                operation,
                reason: output.diagnostic(),
            })
        }
    }
}

impl<R: CommandRunner> WlanService for NetshWlan<R> {
    fn show_driver_capabilities(&self) -> Result<DriverCapabilities, WlanError> {
        let output = self.netsh("show drivers", &["wlan", "show", "drivers"])?;
        Ok(parse_driver_capabilities(&output.stdout))
    }

    fn set_hosted_network_mode(&self, request: ModeRequest<'_>) -> Result<(), WlanError> {
        let args = mode_args(request);
        self.run("set hostednetwork", &args)?;
        Ok(())
    }

    fn start_hosted_network(&self) -> Result<(), WlanError> {
        self.netsh("start hostednetwork", &["wlan", "start", "hostednetwork"])?;
        Ok(())
    }

    fn stop_hosted_network(&self) -> Result<(), WlanError> {
        self.netsh("stop hostednetwork", &["wlan", "stop", "hostednetwork"])?;
        Ok(())
    }

    fn show_hosted_network_status(&self) -> Result<HostedNetworkStatus, WlanError> {
        let output = self.netsh("show hostednetwork", &["wlan", "show", "hostednetwork"])?;
        Ok(parse_hosted_network_status(&output.stdout))
    }
}

/// Builds the `netsh wlan set hostednetwork` argument list.
fn mode_args(request: ModeRequest<'_>) -> Vec<String> {
    let mut args = vec![
        "wlan".to_string(),
        "set".to_string(),
        "hostednetwork".to_string(),
    ];

    match request {
        ModeRequest::Allow { config, key_usage } => {
            let usage = match key_usage {
                KeyUsage::Persistent => "persistent",
                KeyUsage::Temporary => "temporary",
            };
            args.push("mode=allow".to_string());
            args.push(format!("ssid={}", config.ssid()));
            args.push(format!("key={}", config.key()));
            args.push(format!("keyUsage={usage}"));
        }
        ModeRequest::Disallow => args.push("mode=disallow".to_string()),
    }

    args
}
