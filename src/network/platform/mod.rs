//! Platform implementations of the network service traits.
//!
//! Connection enumeration, sharing control, and the miniport lookup all go
//! through PowerShell, so the crate builds on every host; only the
//! administrator check calls into the `windows` crate directly.
//!
//! # Platform Support
//!
//! - **Windows**: [`PowerShellNetwork`] drives `HNetCfg.HNetShare` and CIM.
//! - **Other**: the scripts fail to spawn and [`is_elevated`] is always false.

mod elevation;
mod powershell;

pub use elevation::is_elevated;
pub use powershell::PowerShellNetwork;
