// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Lenient value decoders shared by every CPU source.
//!
//! Host data is best-effort: kernels and firmware disagree on formatting, so
//! every decoder here is total. Malformed text decodes to zero (or `false`,
//! or an empty list) instead of an error.

mod composite;

pub use composite::{parse_address_sizes, parse_cache_size, parse_tlb};

/// Parse an unsigned decimal or `0x`-prefixed hexadecimal integer.
///
/// Returns `T::default()` (zero) when the text is malformed or the value
/// does not fit in `T`.
pub fn parse_uint<T>(s: &str) -> T
where
    T: TryFrom<u64> + Default,
{
    if s.starts_with('+') {
        return T::default();
    }
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed
        .ok()
        .and_then(|x| T::try_from(x).ok())
        .unwrap_or_default()
}

/// Parse a decimal floating point number, zero on failure.
pub fn parse_float(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Only the literal token `yes` is true.
pub fn parse_bool(s: &str) -> bool {
    s == "yes"
}

/// Split a space separated flag list, keeping source order.
pub fn parse_list(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

/// Split a `key: value` line at the first colon.
///
/// Both halves are trimmed. A line without a colon yields `("", "")`,
/// which the scanner treats as a record separator.
pub fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => ("", ""),
    }
}
