// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

use std::path::{Path, PathBuf};

use super::CpuSource;
use crate::config::DetectConfig;
use crate::error::Result;
use crate::report::Info;
use crate::scanner::{scan_proc_with, ScanOptions};

/// Reads a cpuinfo pseudo-file (or a captured copy of one).
#[derive(Debug, Clone)]
pub struct ProcCpuinfo {
    path: PathBuf,
    options: ScanOptions,
}

impl ProcCpuinfo {
    pub fn new(path: impl Into<PathBuf>, options: ScanOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn from_config(config: &DetectConfig) -> Self {
        Self::new(config.cpuinfo_path.clone(), config.scan_options())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CpuSource for ProcCpuinfo {
    fn name(&self) -> &'static str {
        "/proc/cpuinfo"
    }

    fn collect(&self) -> Result<Info> {
        log::debug!("reading {}", self.path.display());
        let buf = std::fs::read(&self.path)?;
        Ok(scan_proc_with(&buf, &self.options))
    }
}
