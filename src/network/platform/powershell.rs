//! Connection enumeration, sharing, and adapter lookup through PowerShell.
//!
//! Connection data and sharing control come from the `HNetCfg.HNetShare`
//! COM object; the hardware lookup queries `Win32_NetworkAdapter` over CIM.
//! Scripts print JSON (or a bare GUID) which is decoded here.

use serde::Deserialize;

use crate::network::{
    AdapterId, AdapterLookup, ConnectionEntry, ConnectionProps, ConnectionSource,
    EnumerationError, LookupError, SharingConfig, SharingRole,
};
use crate::process::{CommandOutput, CommandRunner, SystemRunner};
use crate::sharing::{ShareRole, SharingError, SharingService};

const POWERSHELL: &str = "powershell";

/// Prepended to every script so names outside the OEM code page survive.
const UTF8_OUTPUT: &str = "[Console]::OutputEncoding = New-Object System.Text.UTF8Encoding $false";

const ENUMERATE_SCRIPT: &str = r"$ErrorActionPreference = 'Stop'
$share = New-Object -ComObject HNetCfg.HNetShare
$rows = @(foreach ($c in $share.EnumEveryConnection) {
    $p = $share.NetConnectionProps.Invoke($c)
    $cfg = $null
    try { $cfg = $share.INetSharingConfigurationForINetConnection.Invoke($c) } catch { }
    $sharing = $null
    if ($cfg) {
        $sharing = [ordered]@{
            enabled = [bool]$cfg.SharingEnabled
            connectionType = [int]$cfg.SharingConnectionType
            firewallEnabled = [bool]$cfg.InternetFirewallEnabled
        }
    }
    [ordered]@{
        guid = $p.Guid
        name = $p.Name
        deviceName = $p.DeviceName
        status = [int]$p.Status
        mediaType = [int]$p.MediaType
        characteristics = [int64]$p.Characteristics
        sharing = $sharing
    }
})
ConvertTo-Json -InputObject $rows -Depth 4 -Compress";

const SHARING_SCRIPT: &str = r"$ErrorActionPreference = 'Stop'
$share = New-Object -ComObject HNetCfg.HNetShare
$conn = $share.EnumEveryConnection |
    Where-Object { $share.NetConnectionProps.Invoke($_).Guid -eq '__GUID__' } |
    Select-Object -First 1
if (-not $conn) { throw 'Connection __GUID__ not found' }
$share.INetSharingConfigurationForINetConnection.Invoke($conn).__ACTION__";

const LOOKUP_SCRIPT: &str = r#"$ErrorActionPreference = 'Stop'
Get-CimInstance -ClassName Win32_NetworkAdapter -Filter "ServiceName='__SERVICE__'" |
    Where-Object { $_.GUID } |
    Select-Object -First 1 -ExpandProperty GUID"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConnection {
    guid: Option<String>,
    name: Option<String>,
    device_name: Option<String>,
    status: i32,
    media_type: i32,
    #[serde(default)]
    characteristics: u32,
    sharing: Option<RawSharing>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSharing {
    enabled: bool,
    connection_type: i32,
    firewall_enabled: bool,
}

/// `ConvertTo-Json` collapses single-element arrays on some PowerShell
/// versions, so both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<RawConnection>),
    One(Box<RawConnection>),
}

/// Windows network services reached through `powershell -Command`.
#[derive(Debug, Clone, Default)]
pub struct PowerShellNetwork<R = SystemRunner> {
    runner: R,
}

impl PowerShellNetwork {
    /// Creates a service running real PowerShell processes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner::new(),
        }
    }
}

impl<R: CommandRunner> PowerShellNetwork<R> {
    /// Creates a service using `runner` to execute PowerShell.
    #[must_use]
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    fn run_script(&self, script: &str) -> std::io::Result<CommandOutput> {
        let command = format!("{UTF8_OUTPUT}\n{script}");
        let args = [
            "-NoProfile",
            "-NonInteractive",
            "-ExecutionPolicy",
            "Bypass",
            "-Command",
            command.as_str(),
        ]
        .map(ToString::to_string);
        self.runner.run(POWERSHELL, &args)
    }

    fn change_sharing(&self, id: &AdapterId, change: SharingChange) -> Result<(), SharingError> {
        ensure_guid(id)?;
        let (action, call) = match change {
            SharingChange::Enable(role) => ("enable", format!("EnableSharing({})", role.code())),
            SharingChange::Disable => ("disable", "DisableSharing()".to_string()),
        };
        let script = SHARING_SCRIPT
            .replace("__GUID__", &id.braced())
            .replace("__ACTION__", &call);

        let output = self.run_script(&script)?;
        if output.success {
            Ok(())
        } else {
            Err(SharingError::Rejected {
                action,
                id: id.clone(),
                reason: output.diagnostic(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SharingChange {
    Enable(ShareRole),
    Disable,
}

impl<R: CommandRunner> ConnectionSource for PowerShellNetwork<R> {
    fn enumerate_connections(&self) -> Result<Vec<ConnectionEntry>, EnumerationError> {
        let output = self
            .run_script(ENUMERATE_SCRIPT)
            .map_err(|e| EnumerationError::Unavailable(e.to_string()))?;

        if !output.success {
            return Err(EnumerationError::Unavailable(output.diagnostic()));
        }

        parse_connections(&output.stdout)
    }
}

impl<R: CommandRunner> SharingService for PowerShellNetwork<R> {
    fn enable_sharing(&self, id: &AdapterId, role: ShareRole) -> Result<(), SharingError> {
        self.change_sharing(id, SharingChange::Enable(role))
    }

    fn disable_sharing(&self, id: &AdapterId) -> Result<(), SharingError> {
        self.change_sharing(id, SharingChange::Disable)
    }
}

impl<R: CommandRunner> AdapterLookup for PowerShellNetwork<R> {
    fn find_adapter_by_service_name(
        &self,
        service_name: &str,
    ) -> Result<Option<AdapterId>, LookupError> {
        if !is_service_name(service_name) {
            return Err(LookupError(format!("invalid service name '{service_name}'")));
        }

        let script = LOOKUP_SCRIPT.replace("__SERVICE__", service_name);
        let output = self
            .run_script(&script)
            .map_err(|e| LookupError(e.to_string()))?;

        if !output.success {
            return Err(LookupError(output.diagnostic()));
        }

        let guid = output.stdout.lines().map(str::trim).find(|l| !l.is_empty());
        Ok(guid.map(AdapterId::new).filter(|id| !id.is_empty()))
    }
}

/// Decodes the enumeration script's JSON output.
fn parse_connections(stdout: &str) -> Result<Vec<ConnectionEntry>, EnumerationError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let raw = match serde_json::from_str::<OneOrMany>(trimmed)
        .map_err(|e| EnumerationError::Malformed(e.to_string()))?
    {
        OneOrMany::Many(rows) => rows,
        OneOrMany::One(row) => vec![*row],
    };

    raw.into_iter().map(into_entry).collect()
}

fn into_entry(raw: RawConnection) -> Result<ConnectionEntry, EnumerationError> {
    let sharing = raw
        .sharing
        .map(|s| {
            let role = match (s.enabled, s.connection_type) {
                (false, _) => SharingRole::None,
                (true, 0) => SharingRole::Public,
                (true, 1) => SharingRole::Private,
                (true, other) => {
                    return Err(EnumerationError::Malformed(format!(
                        "unknown sharing connection type {other}"
                    )));
                }
            };
            Ok(SharingConfig {
                sharing_enabled: s.enabled,
                sharing_role: role,
                firewall_enabled: s.firewall_enabled,
            })
        })
        .transpose()?;

    Ok(ConnectionEntry {
        props: ConnectionProps {
            guid: raw.guid.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            device_name: raw.device_name.unwrap_or_default(),
            status: raw.status,
            media_type: raw.media_type,
            characteristics: raw.characteristics,
        },
        sharing,
    })
}

/// Only hex digits and dashes may be spliced into a script.
fn ensure_guid(id: &AdapterId) -> Result<(), SharingError> {
    let inner = id.braced();
    let inner = &inner[1..inner.len() - 1];
    if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        Ok(())
    } else {
        Err(SharingError::InvalidIdentity(id.to_string()))
    }
}

fn is_service_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
#[path = "powershell_tests.rs"]
mod tests;
