// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Per-vendor part number tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Implementer;

/// Name returned for any part a vendor table does not list.
pub const GENERIC: &str = "generic";

/// Vendor-scoped part number. Only meaningful next to an [`Implementer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Part(pub u16);

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

// ARM Ltd
impl Part {
    pub const ARM926EJS: Part = Part(0x926);
    pub const ARM11_MPCORE: Part = Part(0xb02);
    pub const ARM1136JS: Part = Part(0xb36);
    pub const ARM1156T2S: Part = Part(0xb56);
    pub const ARM1176JZS: Part = Part(0xb76);
    pub const CORTEX_A8: Part = Part(0xc08);
    pub const CORTEX_A9: Part = Part(0xc09);
    pub const CORTEX_A15: Part = Part(0xc0f);
    pub const CORTEX_M0: Part = Part(0xc20);
    pub const CORTEX_M3: Part = Part(0xc23);
    pub const CORTEX_M4: Part = Part(0xc24);
    pub const CORTEX_M55: Part = Part(0xd22);
    pub const CORTEX_A34: Part = Part(0xd02);
    pub const CORTEX_A35: Part = Part(0xd04);
    pub const CORTEX_A53: Part = Part(0xd03);
    pub const CORTEX_A55: Part = Part(0xd05);
    pub const CORTEX_A57: Part = Part(0xd07);
    pub const CORTEX_A72: Part = Part(0xd08);
    pub const CORTEX_A73: Part = Part(0xd09);
    pub const CORTEX_A75: Part = Part(0xd0a);
    pub const CORTEX_A76: Part = Part(0xd0b);
    pub const CORTEX_A77: Part = Part(0xd0d);
    pub const CORTEX_A78: Part = Part(0xd41);
    pub const CORTEX_X1: Part = Part(0xd44);
    pub const CORTEX_X1C: Part = Part(0xd4c);
    pub const NEOVERSE_N1: Part = Part(0xd0c);
    pub const NEOVERSE_N2: Part = Part(0xd49);
    pub const NEOVERSE_V1: Part = Part(0xd40);
    pub const FIRESTORM: Part = Part(0x23);
    pub const ICESTORM: Part = Part(0x22);
}

// Broadcom / Cavium
impl Part {
    pub const THUNDERX2_T99: Part = Part(0x516);
    pub const THUNDERX2_T99_ALT: Part = Part(0xaf);
    pub const THUNDERX_T88: Part = Part(0xa1);
}

// Fujitsu, NVIDIA, HiSilicon
impl Part {
    pub const A64FX: Part = Part(0x001);
    pub const CARMEL: Part = Part(0x004);
    pub const TSV110: Part = Part(0xd01);
}

// Qualcomm
impl Part {
    pub const KRAIT: Part = Part(0x06f);
    pub const KRYO: Part = Part(0x201);
    pub const KRYO_2: Part = Part(0x205);
    pub const KRYO_3: Part = Part(0x211);
    pub const KRYO_2XX_GOLD: Part = Part(0x800);
    pub const KRYO_2XX_SILVER: Part = Part(0x801);
    pub const KRYO_3XX_GOLD: Part = Part(0x802);
    pub const KRYO_3XX_SILVER: Part = Part(0x803);
    pub const KRYO_4XX_GOLD: Part = Part(0x804);
    pub const KRYO_4XX_SILVER: Part = Part(0x805);
    pub const FALKOR: Part = Part(0xc00);
    pub const SAPHIRA: Part = Part(0xc01);
}

type PartTable = &'static [(Part, &'static str)];

const ARM_PARTS: PartTable = &[
    (Part::ARM926EJS, "ARM926EJ-S"),
    (Part::ARM11_MPCORE, "ARM11 MPCore"),
    (Part::ARM1136JS, "ARM1136J-S"),
    (Part::ARM1156T2S, "ARM1156T2-S"),
    (Part::ARM1176JZS, "ARM1176JZ-S"),
    (Part::CORTEX_A8, "Cortex-A8"),
    (Part::CORTEX_A9, "Cortex-A9"),
    (Part::CORTEX_A15, "Cortex-A15"),
    (Part::CORTEX_M0, "Cortex-M0"),
    (Part::CORTEX_M3, "Cortex-M3"),
    (Part::CORTEX_M4, "Cortex-M4"),
    (Part::CORTEX_M55, "Cortex-M55"),
    (Part::CORTEX_A34, "Cortex-A34"),
    (Part::CORTEX_A35, "Cortex-A35"),
    (Part::CORTEX_A53, "Cortex-A53"),
    (Part::CORTEX_A55, "Cortex-A55"),
    (Part::CORTEX_A57, "Cortex-A57"),
    (Part::CORTEX_A72, "Cortex-A72"),
    (Part::CORTEX_A73, "Cortex-A73"),
    (Part::CORTEX_A75, "Cortex-A75"),
    (Part::CORTEX_A76, "Cortex-A76"),
    (Part::CORTEX_A77, "Cortex-A77"),
    (Part::CORTEX_A78, "Cortex-A78"),
    (Part::CORTEX_X1, "Cortex-X1"),
    (Part::CORTEX_X1C, "Cortex-X1C"),
    (Part::NEOVERSE_N1, "neoverse-n1"),
    (Part::NEOVERSE_N2, "neoverse-n2"),
    (Part::NEOVERSE_V1, "neoverse-v1"),
    (Part::FIRESTORM, "M1 Firestorm"),
    (Part::ICESTORM, "M1 Icestorm"),
];

const BROADCOM_PARTS: PartTable = &[
    (Part::THUNDERX2_T99, "ThunderX2T99"),
    (Part::THUNDERX2_T99_ALT, "ThunderX2T99"),
    (Part::THUNDERX_T88, "ThunderXT88"),
];

const FUJITSU_PARTS: PartTable = &[(Part::A64FX, "A64FX")];

const NVIDIA_PARTS: PartTable = &[(Part::CARMEL, "Carmel")];

const HISILICON_PARTS: PartTable = &[(Part::TSV110, "TSV110")];

// Several Kryo generations are licensed Cortex cores and share a name.
const QUALCOMM_PARTS: PartTable = &[
    (Part::KRAIT, "Krait"),
    (Part::KRYO, "Kryo"),
    (Part::KRYO_2, "Kryo"),
    (Part::KRYO_3, "Kryo"),
    (Part::KRYO_2XX_GOLD, "Cortex-A73"),
    (Part::KRYO_2XX_SILVER, "Cortex-A73"),
    (Part::KRYO_3XX_GOLD, "Cortex-A75"),
    (Part::KRYO_3XX_SILVER, "Cortex-A75"),
    (Part::KRYO_4XX_GOLD, "Cortex-A76"),
    (Part::KRYO_4XX_SILVER, "Cortex-A76"),
    (Part::FALKOR, "Falkor"),
    (Part::SAPHIRA, "Saphira"),
];

const SAMSUNG_PARTS: PartTable = &[];

fn part_table(implementer: Implementer) -> PartTable {
    match implementer {
        Implementer::ARM_LTD => ARM_PARTS,
        Implementer::BROADCOM | Implementer::CAVIUM => BROADCOM_PARTS,
        Implementer::FUJITSU => FUJITSU_PARTS,
        Implementer::NVIDIA => NVIDIA_PARTS,
        Implementer::HISILICON => HISILICON_PARTS,
        Implementer::QUALCOMM => QUALCOMM_PARTS,
        Implementer::SAMSUNG => SAMSUNG_PARTS,
        _ => &[],
    }
}

/// Resolve a part number to a model name within the implementer's table.
///
/// Never fails: unknown implementers and unknown parts are `"generic"`.
pub fn part_name(implementer: Implementer, part: Part) -> &'static str {
    part_table(implementer)
        .iter()
        .find(|(code, _)| *code == part)
        .map(|(_, name)| *name)
        .unwrap_or(GENERIC)
}
