// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Detection configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SysinfoError};
use crate::scanner::ScanOptions;

/// Where and how host CPU data is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// cpuinfo pseudo-file read on Linux.
    pub cpuinfo_path: PathBuf,
    /// Keep a final record that has no trailing blank line.
    pub flush_trailing_record: bool,
    /// Drop cpuinfo records that have no recognized key.
    pub skip_empty_records: bool,
    /// Program queried for sysctl values on macOS.
    pub sysctl_command: String,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            cpuinfo_path: PathBuf::from("/proc/cpuinfo"),
            flush_trailing_record: false,
            skip_empty_records: false,
            sysctl_command: "sysctl".into(),
        }
    }
}

impl DetectConfig {
    /// Load from TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SysinfoError::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SysinfoError::Config(format!("TOML parse error: {}", e)))
    }

    /// Scanner options derived from this config.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            flush_trailing_record: self.flush_trailing_record,
            skip_empty_records: self.skip_empty_records,
        }
    }

    /// Generate sample config
    pub fn sample_toml() -> String {
        r#"# silicon-sysinfo configuration
cpuinfo_path = "/proc/cpuinfo"
# Keep a final cpuinfo record even when the dump has no trailing blank line
flush_trailing_record = false
# Drop records made only of blank lines or unrecognized keys
skip_empty_records = false
sysctl_command = "sysctl"
"#
        .into()
    }
}
