// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! `/proc/cpuinfo` key table.
//!
//! Keys are matched exactly and case-sensitively. Kernels for different
//! architectures spell some fields differently (`BogoMIPS` on ARM,
//! `bogomips` on x86), so synonyms get one row each.

use crate::implementer::{Implementer, Part};
use crate::parse::{
    parse_address_sizes, parse_bool, parse_cache_size, parse_float, parse_list, parse_tlb,
    parse_uint,
};
use crate::report::Cpu;

/// Applies one decoded value to the record being built.
pub type FieldSetter = fn(&mut Cpu, &str);

/// A recognized `/proc/cpuinfo` key.
#[derive(Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub set: FieldSetter,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("key", &self.key).finish()
    }
}

/// Every key the scanner maps onto a [`Cpu`] field.
pub static FIELDS: &[Field] = &[
    // General
    Field {
        key: "processor",
        set: |c, v| c.proc = parse_uint(v),
    },
    Field {
        key: "BogoMIPS",
        set: |c, v| c.bogomips = parse_float(v),
    },
    Field {
        key: "bogomips",
        set: |c, v| c.bogomips = parse_float(v),
    },
    Field {
        key: "Features",
        set: |c, v| c.features = parse_list(v),
    },
    Field {
        key: "flags",
        set: |c, v| c.features = parse_list(v),
    },
    Field {
        key: "CPU revision",
        set: |c, v| c.rev = parse_uint(v),
    },
    Field {
        key: "stepping",
        set: |c, v| c.rev = parse_uint(v),
    },
    Field {
        key: "model name",
        set: |c, v| c.model_name = v.to_string(),
    },
    // ARM
    Field {
        key: "CPU implementer",
        set: |c, v| c.implementer = Implementer(parse_uint(v)),
    },
    Field {
        key: "CPU architecture",
        set: |c, v| c.arch = parse_uint(v),
    },
    Field {
        key: "CPU variant",
        set: |c, v| c.variant = parse_uint(v),
    },
    Field {
        key: "CPU part",
        set: |c, v| c.part = Part(parse_uint(v)),
    },
    // x86
    Field {
        key: "vendor_id",
        set: |c, v| c.vendor_id = v.to_string(),
    },
    Field {
        key: "cpu family",
        set: |c, v| c.family = parse_uint(v),
    },
    Field {
        key: "model",
        set: |c, v| c.model = parse_uint(v),
    },
    Field {
        key: "microcode",
        set: |c, v| c.microcode = parse_uint(v),
    },
    Field {
        key: "cpu MHz",
        set: |c, v| c.freq = parse_float(v),
    },
    Field {
        key: "cache size",
        set: |c, v| c.cache.l2 = parse_cache_size(v),
    },
    Field {
        key: "physical id",
        set: |c, v| c.phys_id = parse_uint(v),
    },
    Field {
        key: "siblings",
        set: |c, v| c.siblings = parse_uint(v),
    },
    Field {
        key: "core id",
        set: |c, v| c.core_id = parse_uint(v),
    },
    Field {
        key: "cpu cores",
        set: |c, v| c.cores = parse_uint(v),
    },
    Field {
        key: "apicid",
        set: |c, v| c.apic_id = parse_uint(v),
    },
    Field {
        key: "initial apicid",
        set: |c, v| c.init_apic_id = parse_uint(v),
    },
    Field {
        key: "fpu",
        set: |c, v| c.fpu = parse_bool(v),
    },
    Field {
        key: "fpu_exception",
        set: |c, v| c.fpu_exceptions = parse_bool(v),
    },
    Field {
        key: "cpuid level",
        set: |c, v| c.cpuid_level = parse_uint(v),
    },
    Field {
        key: "wp",
        set: |c, v| c.wp = parse_bool(v),
    },
    Field {
        key: "bugs",
        set: |c, v| c.bugs = parse_list(v),
    },
    Field {
        key: "clflush size",
        set: |c, v| c.cache.flush = parse_uint(v),
    },
    Field {
        key: "cache_alignment",
        set: |c, v| c.cache.alignment = parse_uint(v),
    },
    Field {
        key: "address sizes",
        set: |c, v| {
            let (phys, virt) = parse_address_sizes(v);
            c.addr_sizes.phys = phys;
            c.addr_sizes.virt = virt;
        },
    },
    Field {
        key: "power management",
        set: |c, v| c.power_mgmt = v.to_string(),
    },
    // AMD
    Field {
        key: "TLB size",
        set: |c, v| {
            let (pages, page_size) = parse_tlb(v);
            c.tlb.pages = pages;
            c.tlb.page_size = page_size;
        },
    },
];

/// Setter for `key`, or `None` if the key belongs in the generic pairs.
pub fn lookup(key: &str) -> Option<FieldSetter> {
    FIELDS.iter().find(|f| f.key == key).map(|f| f.set)
}
