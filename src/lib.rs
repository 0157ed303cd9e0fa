// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! # silicon-sysinfo
//!
//! Static host CPU descriptors, read from `/proc/cpuinfo` on Linux or
//! `sysctl` on macOS and normalized into a single [`Info`] report.
//!
//! Detection is best-effort and never fails: an unreadable source yields an
//! empty report, malformed fields decode to zero, and unknown vendor or part
//! codes resolve to a `"generic"` name.
//!
//! ```no_run
//! let info = sysinfolib::detect();
//! for cpu in &info.cpus {
//!     println!("cpu{}: {}", cpu.proc, cpu);
//! }
//! ```
//!
//! Captured dumps can be decoded directly:
//!
//! ```
//! use sysinfolib::scanner::scan_proc;
//!
//! let buf = b"processor\t: 0\nCPU implementer\t: 0x41\nCPU part\t: 0xd08\n\nHardware\t: BCM2711\n";
//! let info = scan_proc(buf);
//! assert_eq!(info.cpus[0].to_string(), "ARM Ltd Cortex-A72");
//! assert_eq!(info.misc_value("Hardware"), Some("BCM2711"));
//! ```

pub mod config;
pub mod error;
pub mod implementer;
pub mod parse;
pub mod platform;
pub mod report;
pub mod scanner;

pub use config::DetectConfig;
pub use error::{Result, SysinfoError};
pub use implementer::{part_name, Implementer, Part};
pub use platform::CpuSource;
pub use report::{AddressSizes, Cache, Cpu, Info, Pair, Tlb};

/// Detect the current host with the default configuration.
///
/// Every call reads the host afresh, so two calls may differ.
pub fn detect() -> Info {
    detect_with(&DetectConfig::default())
}

/// Detect the current host.
pub fn detect_with(config: &DetectConfig) -> Info {
    match platform::host_source(config) {
        Ok(source) => collect_or_empty(source.as_ref()),
        Err(e) => {
            log::debug!("no CPU source: {}", e);
            Info::default()
        }
    }
}

/// Run `source`, replacing an acquisition failure with an empty report.
pub fn collect_or_empty(source: &dyn CpuSource) -> Info {
    match source.collect() {
        Ok(info) => info,
        Err(e) => {
            log::warn!("{} unavailable: {}", source.name(), e);
            Info::default()
        }
    }
}
