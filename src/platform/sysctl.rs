// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

use std::collections::BTreeMap;
use std::process::Command;

use crate::error::{Result, SysinfoError};
use crate::parse::parse_uint;

/// Named value lookup over a hierarchical sysctl tree (`hw.cpufamily`,
/// `machdep.cpu.brand_string`, ...).
///
/// Missing keys read as empty or zero; the typed accessors never fail.
pub trait SysctlStore {
    /// Raw text of `name`, if the key exists.
    fn value(&self, name: &str) -> Option<String>;

    fn string(&self, name: &str) -> String {
        self.value(name).unwrap_or_default()
    }

    fn u32(&self, name: &str) -> u32 {
        let Some(raw) = self.value(name) else {
            return 0;
        };
        let raw = raw.trim();
        // sysctl prints CTLTYPE_INT values signed, so family codes above
        // 0x7fffffff come back negative.
        if raw.starts_with('-') {
            return raw.parse::<i32>().map(|v| v as u32).unwrap_or(0);
        }
        parse_uint(raw)
    }

    fn u64(&self, name: &str) -> u64 {
        self.value(name).map(|v| parse_uint(v.trim())).unwrap_or(0)
    }
}

/// Fixture store, keyed by full sysctl name.
impl SysctlStore for BTreeMap<String, String> {
    fn value(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Queries values with `sysctl -n <name>`.
#[derive(Debug, Clone)]
pub struct SysctlCommand {
    program: String,
}

impl SysctlCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `sysctl -n <name>` and return its trimmed output.
    pub fn query(&self, name: &str) -> Result<String> {
        let output = Command::new(&self.program).args(["-n", name]).output()?;
        if !output.status.success() {
            return Err(SysinfoError::CommandFailed(format!(
                "{} -n {}: exited with {}",
                self.program, name, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for SysctlCommand {
    fn default() -> Self {
        Self::new("sysctl")
    }
}

impl SysctlStore for SysctlCommand {
    fn value(&self, name: &str) -> Option<String> {
        match self.query(name) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("sysctl {}: {}", name, e);
                None
            }
        }
    }
}
