// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! sysctl → [`Cpu`] mapping for macOS.
//!
//! Apple silicon exposes per-cluster ("perflevel") cache and core counts
//! under `hw.perflevel{N}.*`. Level 0 is the performance cluster.

use super::SysctlStore;
use crate::implementer::Implementer;
use crate::report::{Cache, Cpu, Info, ReportBuilder};

/// Most CPU records built from one store. Larger core counts are clamped.
const MAX_CPUS: u32 = 4096;

/// Most perflevels read from one store.
const MAX_PERF_LEVELS: u32 = 8;

/// An Apple silicon `hw.cpufamily` value and its core microarchitectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppleFamily {
    pub code: u32,
    pub performance: &'static str,
    pub efficiency: &'static str,
}

pub const APPLE_FAMILIES: &[AppleFamily] = &[
    // M1
    AppleFamily {
        code: 0x1b58_8bb3,
        performance: "Firestorm",
        efficiency: "Icestorm",
    },
    // M2
    AppleFamily {
        code: 0xda33_d83d,
        performance: "Avalanche",
        efficiency: "Blizzard",
    },
];

/// Build a report from sysctl values.
///
/// Unknown CPU families only produce the kernel and OS version pairs.
pub fn scan_sysctl<S: SysctlStore + ?Sized>(store: &S) -> Info {
    let mut builder = ReportBuilder::new();
    builder.push_pair("Kernel Version", store.string("kern.version"));
    builder.push_pair("OS Version", store.string("kern.osversion"));

    let family = store.u32("hw.cpufamily");
    match APPLE_FAMILIES.iter().find(|f| f.code == family) {
        Some(apple) => scan_apple_silicon(store, apple, &mut builder),
        None => log::debug!("unrecognized hw.cpufamily {:#x}", family),
    }
    builder.finish()
}

fn scan_apple_silicon<S: SysctlStore + ?Sized>(
    store: &S,
    family: &AppleFamily,
    builder: &mut ReportBuilder,
) {
    let mut brand = store.string("machdep.cpu.brand_string");
    let suffix = match store.u32("hw.cpusubfamily") {
        4 => Some(" Pro"),
        5 => Some(" Max"),
        _ => None,
    };
    if let Some(suffix) = suffix {
        if !brand.ends_with(suffix) {
            brand.push_str(suffix);
        }
    }

    let virt = store.u32("machdep.virtual_address_size");
    let alignment = store.u32("hw.cachelinesize");
    let levels = store.u32("hw.nperflevels").min(MAX_PERF_LEVELS);

    let mut proc = 0u32;
    for level in 0..levels {
        let key = |leaf: &str| format!("hw.perflevel{}.{}", level, leaf);
        let cache = Cache {
            inst: store.u64(&key("l1icachesize")),
            l1: store.u64(&key("l1dcachesize")),
            l2: store.u64(&key("l2cachesize")),
            alignment,
            ..Cache::default()
        };
        let micro_arch = if level == 0 {
            family.performance
        } else {
            family.efficiency
        };

        let reported = store.u32(&key("physicalcpu"));
        // proc never exceeds MAX_CPUS, so the subtraction cannot wrap.
        let cores = reported.min(MAX_CPUS - proc);
        if cores < reported {
            log::warn!("perflevel{}: clamping {} cores to {}", level, reported, cores);
        }
        log::debug!("perflevel{}: {} {} cores", level, cores, micro_arch);
        for _ in 0..cores {
            let mut cpu = Cpu {
                proc,
                implementer: Implementer::APPLE,
                arch: 8,
                model: family.code,
                model_name: brand.clone(),
                micro_arch: micro_arch.to_string(),
                cache,
                ..Cpu::default()
            };
            cpu.addr_sizes.virt = virt;
            builder.push_cpu(cpu);
            proc += 1;
        }
    }

    builder.push_pair("Model", store.string("hw.model"));
}
