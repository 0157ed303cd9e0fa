// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Host data acquisition.
//!
//! Each platform implements [`CpuSource`]. Sources only fetch raw data; all
//! decoding goes through the platform-agnostic scanner and adapters, so they
//! can be tested from captured fixtures.
//!
//! # Platform Support
//!
//! - **Linux**: reads `/proc/cpuinfo` ([`ProcCpuinfo`])
//! - **macOS**: queries `sysctl` ([`SysctlSource`])
//! - **Other**: [`host_source`] fails with
//!   [`SysinfoError::UnsupportedPlatform`] and detection returns an empty
//!   report

mod darwin;
mod proc_cpuinfo;
mod sysctl;

pub use darwin::{scan_sysctl, AppleFamily, APPLE_FAMILIES};
pub use proc_cpuinfo::ProcCpuinfo;
pub use sysctl::{SysctlCommand, SysctlStore};

use crate::config::DetectConfig;
use crate::error::Result;
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
use crate::error::SysinfoError;
use crate::report::Info;

/// Produces the CPU report for a host.
pub trait CpuSource {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Read the host data and decode it.
    fn collect(&self) -> Result<Info>;
}

/// [`CpuSource`] backed by a sysctl store.
#[derive(Debug, Clone)]
pub struct SysctlSource<S> {
    store: S,
}

impl<S: SysctlStore> SysctlSource<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SysctlStore> CpuSource for SysctlSource<S> {
    fn name(&self) -> &'static str {
        "sysctl"
    }

    fn collect(&self) -> Result<Info> {
        Ok(scan_sysctl(&self.store))
    }
}

/// Source for the compile target.
#[cfg(target_os = "linux")]
pub fn host_source(config: &DetectConfig) -> Result<Box<dyn CpuSource>> {
    Ok(Box::new(ProcCpuinfo::from_config(config)))
}

/// Source for the compile target.
#[cfg(target_os = "macos")]
pub fn host_source(config: &DetectConfig) -> Result<Box<dyn CpuSource>> {
    let store = SysctlCommand::new(config.sysctl_command.clone());
    Ok(Box::new(SysctlSource::new(store)))
}

/// Source for the compile target.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn host_source(_config: &DetectConfig) -> Result<Box<dyn CpuSource>> {
    Err(SysinfoError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}
