// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! CPU implementer codes and part-name resolution.
//!
//! ARM cores report the designer of the core as an 8-bit implementer code
//! (an ASCII letter in practice) and the core model as a vendor-scoped part
//! number. [`part_name`] resolves the pair to a model name, falling back to
//! `"generic"` for anything it does not know.

mod parts;

pub use parts::{part_name, Part, GENERIC};

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SysinfoError;

/// Designer or licensor of a CPU core.
///
/// The set of named codes is closed but any `u8` is a valid implementer;
/// unnamed codes display as `Implementer(N)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implementer(pub u8);

impl Implementer {
    pub const ARM_LTD: Implementer = Implementer(b'A');
    pub const BROADCOM: Implementer = Implementer(b'B');
    pub const CAVIUM: Implementer = Implementer(b'C');
    pub const FUJITSU: Implementer = Implementer(b'F');
    pub const HISILICON: Implementer = Implementer(b'H');
    pub const NVIDIA: Implementer = Implementer(b'N');
    pub const QUALCOMM: Implementer = Implementer(b'Q');
    pub const SAMSUNG: Implementer = Implementer(b'S');
    pub const APPLE: Implementer = Implementer(b'a');
    /// Intel's ARM parts (XScale and friends).
    pub const INTEL: Implementer = Implementer(b'i');

    /// Vendor name for known codes.
    pub fn name(self) -> Option<&'static str> {
        IMPLEMENTER_NAMES
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, name)| *name)
    }

    /// Raw implementer code.
    pub fn code(self) -> u8 {
        self.0
    }
}

const IMPLEMENTER_NAMES: &[(Implementer, &str)] = &[
    (Implementer::ARM_LTD, "ARM Ltd"),
    (Implementer::BROADCOM, "Broadcom"),
    (Implementer::CAVIUM, "Cavium"),
    (Implementer::FUJITSU, "Fujitsu Ltd"),
    (Implementer::HISILICON, "HiSilicon Technologies Inc"),
    (Implementer::NVIDIA, "NVIDIA Corporation"),
    (Implementer::QUALCOMM, "Qualcomm Technologies Inc"),
    (Implementer::SAMSUNG, "Samsung Technologies Inc"),
    (Implementer::APPLE, "Apple Inc"),
    (Implementer::INTEL, "Intel ARM parts"),
];

impl fmt::Display for Implementer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Implementer({})", self.0),
        }
    }
}

impl FromStr for Implementer {
    type Err = SysinfoError;

    /// Accepts a vendor name, the `Implementer(N)` fallback form, or a raw
    /// decimal/hex code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((code, _)) = IMPLEMENTER_NAMES.iter().find(|(_, name)| *name == s) {
            return Ok(*code);
        }
        let raw = s
            .strip_prefix("Implementer(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        let parsed = match raw.strip_prefix("0x") {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => raw.parse::<u8>(),
        };
        parsed
            .map(Implementer)
            .map_err(|_| SysinfoError::InvalidValue(format!("unknown implementer {:?}", s)))
    }
}

// Serialized as the vendor name so reports stay readable.
impl Serialize for Implementer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Implementer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ImplementerVisitor;

        impl<'de> Visitor<'de> for ImplementerVisitor {
            type Value = Implementer;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an implementer name or numeric code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Implementer, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Implementer, E> {
                u8::try_from(v)
                    .map(Implementer)
                    .map_err(|_| E::custom(format!("implementer code {} out of range", v)))
            }
        }

        deserializer.deserialize_any(ImplementerVisitor)
    }
}
