// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Decoders for multi-value `/proc/cpuinfo` fields.

use super::parse_uint;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Decode a cache size such as `512 KB` or `32 MB` into bytes.
///
/// The unit must be exactly `KB` or `MB` after a single space; anything else
/// decodes to 0.
pub fn parse_cache_size(s: &str) -> u64 {
    let Some((num, unit)) = s.split_once(' ') else {
        return 0;
    };
    let scale = match unit {
        "KB" => KIB,
        "MB" => MIB,
        _ => return 0,
    };
    parse_uint::<u64>(num).checked_mul(scale).unwrap_or(0)
}

/// Decode `40 bits physical, 48 bits virtual` into `(physical, virtual)`.
///
/// The text is machine generated, so the format is strict: any deviation
/// yields `(0, 0)` rather than a half-parsed pair.
pub fn parse_address_sizes(s: &str) -> (u32, u32) {
    let Some((lhs, rhs)) = s.split_once(", ") else {
        return (0, 0);
    };
    let (Some(phys), Some(virt)) = (
        lhs.strip_suffix(" bits physical"),
        rhs.strip_suffix(" bits virtual"),
    ) else {
        return (0, 0);
    };
    (parse_uint(phys), parse_uint(virt))
}

/// Decode a TLB descriptor such as `1024 4K pages` into
/// `(page count, page size in bytes)`.
pub fn parse_tlb(s: &str) -> (u32, u64) {
    let Some(s) = s.strip_suffix(" pages") else {
        return (0, 0);
    };
    let (s, scale) = if let Some(rest) = s.strip_suffix('K') {
        (rest, KIB)
    } else if let Some(rest) = s.strip_suffix('M') {
        (rest, MIB)
    } else {
        return (0, 0);
    };
    let Some((count, page)) = s.split_once(' ') else {
        return (0, 0);
    };
    let page_size = parse_uint::<u64>(page).checked_mul(scale).unwrap_or(0);
    (parse_uint(count), page_size)
}
