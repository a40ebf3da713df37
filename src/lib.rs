//! hotshare: Windows hosted network with Internet Connection Sharing
//!
//! A library for turning a capable wireless adapter into a software access
//! point and sharing an uplink connection with it through the OS connection
//! sharing service.

pub mod config;
pub mod hosted;
pub mod network;
pub mod orchestrator;
pub mod process;
pub mod sharing;

#[cfg(test)]
mod testing;
