// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Normalized host CPU report.
//!
//! Every source (the `/proc/cpuinfo` scanner, the sysctl adapter) feeds a
//! [`ReportBuilder`], which sorts its output so two detections of the same
//! host compare equal regardless of input order.
//!
//! # Examples
//!
//! ```
//! use sysinfolib::report::{Cpu, ReportBuilder};
//!
//! let mut builder = ReportBuilder::new();
//! builder.push_cpu(Cpu { proc: 1, ..Cpu::default() });
//! builder.push_cpu(Cpu { proc: 0, ..Cpu::default() });
//! builder.push_pair("Hardware", "BCM2711");
//!
//! let info = builder.finish();
//! assert_eq!(info.cpus[0].proc, 0);
//! assert_eq!(info.misc_value("Hardware"), Some("BCM2711"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::implementer::{part_name, Implementer, Part};

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Host information: per-CPU records plus anything unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Per-CPU records, sorted by [`Cpu::proc`] ascending.
    #[serde(default)]
    pub cpus: Vec<Cpu>,
    /// Unrecognized fields, sorted by key ascending.
    #[serde(default)]
    pub misc: Vec<Pair>,
}

impl Info {
    /// True when nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.cpus.is_empty() && self.misc.is_empty()
    }

    /// First value recorded under `key` in the generic pairs.
    pub fn misc_value(&self, key: &str) -> Option<&str> {
        self.misc
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Pretty-printed JSON, using the external field names.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A miscellaneous key/value reported by the host but not modeled on [`Cpu`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One logical processor.
///
/// Zero and empty mean "not reported"; the sources do not distinguish the
/// two, so neither does this type. The `/proc/cpuinfo` keys that populate
/// each field are listed in [`crate::scanner::FIELDS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cpu {
    // General
    /// Processor number, usually zero-indexed.
    #[serde(rename = "processor")]
    pub proc: u32,
    /// Linux's rough measure of CPU speed. Not comparable across hardware.
    #[serde(skip_serializing_if = "is_default")]
    pub bogomips: f64,
    /// Supported CPU features or flags, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Revision or stepping.
    #[serde(rename = "revision", skip_serializing_if = "is_default")]
    pub rev: u32,
    /// Human-readable model name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model_name: String,
    /// Microarchitecture name, where the source reports one.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub micro_arch: String,

    // ARM
    #[serde(skip_serializing_if = "is_default")]
    pub implementer: Implementer,
    #[serde(skip_serializing_if = "is_default")]
    pub arch: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub variant: u32,
    #[serde(rename = "part_number", skip_serializing_if = "is_default")]
    pub part: Part,

    // x86
    /// `GenuineIntel`, `AuthenticAMD`, ...
    #[serde(skip_serializing_if = "String::is_empty")]
    pub vendor_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub family: u32,
    #[serde(rename = "model_number", skip_serializing_if = "is_default")]
    pub model: u32,
    #[serde(rename = "microcode_version", skip_serializing_if = "is_default")]
    pub microcode: u32,
    /// Frequency in MHz.
    #[serde(rename = "frequency_mhz", skip_serializing_if = "is_default")]
    pub freq: f64,
    #[serde(skip_serializing_if = "Cache::is_empty")]
    pub cache: Cache,
    #[serde(rename = "physical_id", skip_serializing_if = "is_default")]
    pub phys_id: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub siblings: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub core_id: u32,
    #[serde(rename = "num_cores", skip_serializing_if = "is_default")]
    pub cores: u32,
    #[serde(rename = "apic_id", skip_serializing_if = "is_default")]
    pub apic_id: u32,
    #[serde(rename = "initial_apic_id", skip_serializing_if = "is_default")]
    pub init_apic_id: u32,
    #[serde(skip_serializing_if = "is_default")]
    pub fpu: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub fpu_exceptions: bool,
    /// Highest CPUID leaf.
    #[serde(skip_serializing_if = "is_default")]
    pub cpuid_level: u32,
    /// Write protection honored in supervisor mode.
    #[serde(rename = "write_protection", skip_serializing_if = "is_default")]
    pub wp: bool,
    /// Hardware bugs detected or worked around, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bugs: Vec<String>,
    #[serde(rename = "address_sizes", skip_serializing_if = "AddressSizes::is_empty")]
    pub addr_sizes: AddressSizes,
    #[serde(rename = "power_management", skip_serializing_if = "String::is_empty")]
    pub power_mgmt: String,

    // AMD
    #[serde(skip_serializing_if = "Tlb::is_empty")]
    pub tlb: Tlb,
}

impl Cpu {
    /// Model name resolved from the implementer and part number.
    pub fn name(&self) -> &'static str {
        part_name(self.implementer, self.part)
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.implementer, self.name())
    }
}

/// Cache geometry, sizes in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cache {
    #[serde(rename = "instruction", skip_serializing_if = "is_default")]
    pub inst: u64,
    /// L1 data cache.
    #[serde(skip_serializing_if = "is_default")]
    pub l1: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub l2: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub l3: u64,
    #[serde(skip_serializing_if = "is_default")]
    pub alignment: u32,
    /// CLFLUSH line size.
    #[serde(skip_serializing_if = "is_default")]
    pub flush: u32,
}

impl Cache {
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Memory address widths in bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSizes {
    #[serde(rename = "physical_bits", skip_serializing_if = "is_default")]
    pub phys: u32,
    #[serde(rename = "virtual_bits", skip_serializing_if = "is_default")]
    pub virt: u32,
}

impl AddressSizes {
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Translation lookaside buffer geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tlb {
    #[serde(rename = "num_pages", skip_serializing_if = "is_default")]
    pub pages: u32,
    /// Page size in bytes.
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: u64,
}

impl Tlb {
    pub fn is_empty(&self) -> bool {
        is_default(self)
    }
}

/// Accumulates CPU records and generic pairs, then sorts them.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    info: Info,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_cpu(&mut self, cpu: Cpu) {
        self.info.cpus.push(cpu);
    }

    pub fn push_pair(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.info.misc.push(Pair::new(key, value));
    }

    /// Sort and return the report.
    ///
    /// Both sorts are stable, so duplicate processor indexes or keys keep
    /// their input order.
    pub fn finish(mut self) -> Info {
        self.info.cpus.sort_by_key(|c| c.proc);
        self.info.misc.sort_by(|a, b| a.key.cmp(&b.key));
        self.info
    }
}
