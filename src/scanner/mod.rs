// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Line-oriented `/proc/cpuinfo` scanner.
//!
//! The input looks like
//!
//! ```text
//! processor       : 5
//! BogoMIPS        : 48.00
//! Features        : fp asimd evtstrm aes pmull sha1 sha2 crc32 cpuid
//! CPU implementer : 0x41
//! CPU architecture: 8
//! CPU variant     : 0x0
//! CPU part        : 0xd08
//! CPU revision    : 2
//! ```
//!
//! with a blank line after each processor. Keys listed in [`FIELDS`] set a
//! field on the current record; anything else is kept as a generic pair.
//!
//! # Record boundaries
//!
//! Every line with an empty key (a blank line, or one without a colon)
//! closes the current record and starts a fresh one, even if nothing was
//! set on it. [`ScanOptions::skip_empty_records`] drops those empty records.
//!
//! A record is only emitted when such a line closes it. The kernel always
//! writes one after the last processor, and ARM kernels follow it with a
//! board section (`Hardware`, `Revision`, `Serial`) that has no trailing
//! blank line. A final record that is not closed is dropped unless
//! [`ScanOptions::flush_trailing_record`] is set; even then, a final
//! record with no recognized key is not emitted.
//!
//! # Examples
//!
//! ```
//! use sysinfolib::scanner::scan_proc;
//!
//! let info = scan_proc(b"processor: 0\nCPU implementer: 0x41\nCPU part: 0xd08\n\n");
//! assert_eq!(info.cpus.len(), 1);
//! assert_eq!(info.cpus[0].name(), "Cortex-A72");
//! ```

mod fields;

pub use fields::{lookup, Field, FieldSetter, FIELDS};

use serde::{Deserialize, Serialize};

use crate::parse::split_key_value;
use crate::report::{Cpu, Info, ReportBuilder};

/// Scanner behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Emit a final record that is not followed by a blank line.
    pub flush_trailing_record: bool,
    /// Drop records closed before any recognized key was set.
    pub skip_empty_records: bool,
}

/// Scan a `/proc/cpuinfo` buffer with default options.
pub fn scan_proc(buf: &[u8]) -> Info {
    scan_proc_with(buf, &ScanOptions::default())
}

/// Scan a `/proc/cpuinfo` buffer.
///
/// Never fails. Invalid UTF-8 is replaced, and fields that do not decode
/// are left at zero.
pub fn scan_proc_with(buf: &[u8], options: &ScanOptions) -> Info {
    let text = String::from_utf8_lossy(buf);
    let mut builder = ReportBuilder::new();
    let mut cpu = Cpu::default();
    // Set once a recognized key lands on the current record.
    let mut open = false;

    for line in text.lines() {
        let (key, value) = split_key_value(line);
        if key.is_empty() {
            if open || !options.skip_empty_records {
                builder.push_cpu(std::mem::take(&mut cpu));
            }
            open = false;
            continue;
        }
        match lookup(key) {
            Some(set) => {
                set(&mut cpu, value);
                open = true;
            }
            None => {
                log::trace!("unrecognized cpuinfo key {:?}", key);
                builder.push_pair(key, value);
            }
        }
    }

    if open {
        if options.flush_trailing_record {
            builder.push_cpu(cpu);
        } else {
            log::trace!("dropping unterminated record for processor {}", cpu.proc);
        }
    }

    let info = builder.finish();
    log::debug!(
        "scanned {} bytes: {} cpus, {} generic pairs",
        buf.len(),
        info.cpus.len(),
        info.misc.len()
    );
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementer::{Implementer, Part};
    use crate::report::{AddressSizes, Cache, Pair, Tlb};

    const RASPBERRY_PI_4B: &str = include_str!("../../testdata/raspberry_pi_4b");
    const ROCKPRO64: &str = include_str!("../../testdata/rockpro64");
    const AMD_EPYC: &str = include_str!("../../testdata/amd_epyc_centos");
    const INTEL_SKYLAKE: &str = include_str!("../../testdata/intel_skylake_ubuntu");
    const GOOGLE_PIXEL_6: &str = include_str!("../../testdata/google_pixel_6");

    fn split(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn test_cortex_a72_record() {
        let info = scan_proc(
            b"processor: 0\nCPU implementer: 0x41\nCPU part: 0xd08\nCPU architecture: 8\n\n",
        );
        assert_eq!(info.cpus.len(), 1);
        let cpu = &info.cpus[0];
        assert_eq!(cpu.proc, 0);
        assert_eq!(cpu.implementer, Implementer::ARM_LTD);
        assert_eq!(cpu.part, Part::CORTEX_A72);
        assert_eq!(cpu.arch, 8);
        assert_eq!(cpu.name(), "Cortex-A72");
        assert!(info.misc.is_empty());
    }

    #[test]
    fn test_composite_fields_end_to_end() {
        let buf = concat!(
            "processor: 0\n",
            "cache size: 16384 KB\n",
            "TLB size: 1024 4K pages\n",
            "address sizes: 40 bits physical, 48 bits virtual\n",
            "\n",
        );
        let info = scan_proc(buf.as_bytes());
        let cpu = &info.cpus[0];
        assert_eq!(cpu.cache.l2, 16384 * 1024);
        assert_eq!(
            cpu.tlb,
            Tlb {
                pages: 1024,
                page_size: 4096
            }
        );
        assert_eq!(cpu.addr_sizes, AddressSizes { phys: 40, virt: 48 });
    }

    #[test]
    fn test_every_key_populates_its_field() {
        let buf = concat!(
            "processor: 7\n",
            "BogoMIPS: 5985.93\n",
            "bogomips: 5985.93\n",
            "Features: fpu vme\n",
            "flags: fpu vme\n",
            "CPU revision: 6\n",
            "stepping: 6\n",
            "model name: Intel Xeon Processor (Cascadelake)\n",
            "CPU implementer: 0x41\n",
            "CPU architecture: 8\n",
            "CPU variant: 0x3\n",
            "CPU part: 0xd0c\n",
            "vendor_id: GenuineIntel\n",
            "cpu family: 6\n",
            "model: 85\n",
            "microcode: 0x5003102\n",
            "cpu MHz: 2992.968\n",
            "cache size: 16384 KB\n",
            "physical id: 1\n",
            "siblings: 48\n",
            "core id: 11\n",
            "cpu cores: 24\n",
            "apicid: 23\n",
            "initial apicid: 22\n",
            "fpu: yes\n",
            "fpu_exception: yes\n",
            "cpuid level: 13\n",
            "wp: yes\n",
            "bugs: spectre_v1 mds\n",
            "clflush size: 64\n",
            "cache_alignment: 128\n",
            "address sizes: 46 bits physical, 57 bits virtual\n",
            "power management: ts ttp tm hwpstate\n",
            "TLB size: 2560 4K pages\n",
            "\n",
        );
        for field in FIELDS {
            let present = buf.lines().any(|l| split_key_value(l).0 == field.key);
            assert!(present, "{:?} not exercised", field.key);
        }

        let info = scan_proc(buf.as_bytes());
        assert!(info.misc.is_empty());
        let want = Cpu {
            proc: 7,
            bogomips: 5985.93,
            features: split("fpu vme"),
            rev: 6,
            model_name: "Intel Xeon Processor (Cascadelake)".into(),
            micro_arch: String::new(),
            implementer: Implementer::ARM_LTD,
            arch: 8,
            variant: 3,
            part: Part::NEOVERSE_N1,
            vendor_id: "GenuineIntel".into(),
            family: 6,
            model: 85,
            microcode: 0x500_3102,
            freq: 2992.968,
            cache: Cache {
                l2: 16384 * 1024,
                alignment: 128,
                flush: 64,
                ..Cache::default()
            },
            phys_id: 1,
            siblings: 48,
            core_id: 11,
            cores: 24,
            apic_id: 23,
            init_apic_id: 22,
            fpu: true,
            fpu_exceptions: true,
            cpuid_level: 13,
            wp: true,
            bugs: split("spectre_v1 mds"),
            addr_sizes: AddressSizes { phys: 46, virt: 57 },
            power_mgmt: "ts ttp tm hwpstate".into(),
            tlb: Tlb {
                pages: 2560,
                page_size: 4096,
            },
        };
        assert_eq!(info.cpus, vec![want]);
    }

    #[test]
    fn test_records_sorted_by_processor() {
        let info =
            scan_proc(b"processor: 1\nCPU part: 0xd03\n\nprocessor: 0\nCPU part: 0xd08\n\n");
        assert_eq!(info.cpus.len(), 2);
        assert_eq!(info.cpus[0].proc, 0);
        assert_eq!(info.cpus[0].part, Part::CORTEX_A72);
        assert_eq!(info.cpus[1].proc, 1);
        assert_eq!(info.cpus[1].part, Part::CORTEX_A53);
    }

    #[test]
    fn test_records_start_fresh() {
        let info = scan_proc(b"processor: 0\nmodel name: first\n\nprocessor: 1\n\n");
        assert_eq!(info.cpus[0].model_name, "first");
        assert_eq!(info.cpus[1].model_name, "");
    }

    #[test]
    fn test_unknown_keys_become_sorted_pairs() {
        let info = scan_proc(b"Serial: 1234\nHardware: BCM2711\nprocessor: 0\n\n");
        assert_eq!(
            info.misc,
            vec![Pair::new("Hardware", "BCM2711"), Pair::new("Serial", "1234")]
        );
        assert_eq!(info.cpus.len(), 1);
    }

    #[test]
    fn test_trailing_record_dropped_by_default() {
        let buf = b"processor: 0\n\nprocessor: 1\nCPU part: 0xd08\n";
        let info = scan_proc(buf);
        assert_eq!(info.cpus.len(), 1);
        assert_eq!(info.cpus[0].proc, 0);

        let options = ScanOptions {
            flush_trailing_record: true,
            ..ScanOptions::default()
        };
        let info = scan_proc_with(buf, &options);
        assert_eq!(info.cpus.len(), 2);
        assert_eq!(info.cpus[1].part, Part::CORTEX_A72);
    }

    #[test]
    fn test_every_blank_line_closes_a_record() {
        let info = scan_proc(b"processor: 0\n\n\n");
        assert_eq!(info.cpus.len(), 2);
        assert_eq!(info.cpus[1], Cpu::default());

        let info = scan_proc(b"\n\nprocessor: 0\n\n\n\nprocessor: 1\n\n\n");
        assert_eq!(info.cpus.len(), 7);
        assert_eq!(info.cpus.last().map(|c| c.proc), Some(1));
    }

    #[test]
    fn test_unknown_only_section_is_a_record() {
        let info = scan_proc(b"Hardware: BCM2711\n\n");
        assert_eq!(info.cpus, vec![Cpu::default()]);
        assert_eq!(info.misc_value("Hardware"), Some("BCM2711"));
    }

    #[test]
    fn test_skip_empty_records() {
        let options = ScanOptions {
            skip_empty_records: true,
            ..ScanOptions::default()
        };
        let info = scan_proc_with(b"\n\nprocessor: 0\n\n\n\nprocessor: 1\n\n\n", &options);
        let procs: Vec<u32> = info.cpus.iter().map(|c| c.proc).collect();
        assert_eq!(procs, vec![0, 1]);

        let info = scan_proc_with(b"Hardware: BCM2711\n\n", &options);
        assert!(info.cpus.is_empty());
        assert_eq!(info.misc.len(), 1);
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(scan_proc(b"").is_empty());
        assert_eq!(scan_proc(b"\n\n\n").cpus.len(), 3);
        // A line without a colon is a separator too.
        let info = scan_proc(b"\xff\xfe not cpuinfo\n\n");
        assert_eq!(info.cpus.len(), 2);
        assert!(info.misc.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let info = scan_proc(b"processor: 2\r\nCPU part: 0xd08\r\n\r\n");
        assert_eq!(info.cpus.len(), 1);
        assert_eq!(info.cpus[0].proc, 2);
        assert_eq!(info.cpus[0].part, Part::CORTEX_A72);
    }

    #[test]
    fn test_malformed_values_are_zero() {
        let buf = concat!(
            "processor: zero\n",
            "cpu MHz: fast\n",
            "cache size: 512 KiB\n",
            "TLB size: lots\n",
            "address sizes: 40 bits\n",
            "fpu: maybe\n",
            "\n",
        );
        let info = scan_proc(buf.as_bytes());
        let cpu = &info.cpus[0];
        assert_eq!(cpu.proc, 0);
        assert_eq!(cpu.freq, 0.0);
        assert!(cpu.cache.is_empty());
        assert!(cpu.tlb.is_empty());
        assert!(cpu.addr_sizes.is_empty());
        assert!(!cpu.fpu);
    }

    #[test]
    fn test_raspberry_pi_4b() {
        let info = scan_proc(RASPBERRY_PI_4B.as_bytes());
        let feats = split(concat!(
            "half thumb fastmult vfp edsp neon vfpv3 tls vfpv4 ",
            "idiva idivt vfpd32 lpae evtstrm crc32",
        ));
        assert_eq!(info.cpus.len(), 4);
        for (i, cpu) in info.cpus.iter().enumerate() {
            let want = Cpu {
                proc: i as u32,
                bogomips: 108.0,
                features: feats.clone(),
                implementer: Implementer::ARM_LTD,
                arch: 7,
                part: Part::CORTEX_A72,
                rev: 3,
                model_name: "ARMv7 Processor rev 3 (v7l)".into(),
                ..Cpu::default()
            };
            assert_eq!(*cpu, want, "cpu #{}", i);
        }
        assert_eq!(
            info.misc,
            vec![
                Pair::new("Hardware", "BCM2711"),
                Pair::new("Model", "Raspberry Pi 4 Model B Rev 1.1"),
                Pair::new("Revision", "c03111"),
                Pair::new("Serial", "10000000771c4af4"),
            ]
        );
    }

    #[test]
    fn test_raspberry_pi_board_section_is_not_a_cpu() {
        let options = ScanOptions {
            flush_trailing_record: true,
            ..ScanOptions::default()
        };
        let info = scan_proc_with(RASPBERRY_PI_4B.as_bytes(), &options);
        assert_eq!(info.cpus.len(), 4);
        assert_eq!(info.misc.len(), 4);
    }

    #[test]
    fn test_rockpro64_big_little() {
        let info = scan_proc(ROCKPRO64.as_bytes());
        assert_eq!(info.cpus.len(), 6);
        for cpu in &info.cpus[..4] {
            assert_eq!(cpu.name(), "Cortex-A53");
            assert_eq!(cpu.rev, 4);
        }
        for cpu in &info.cpus[4..] {
            assert_eq!(cpu.name(), "Cortex-A72");
            assert_eq!(cpu.rev, 2);
        }
        let cpu = &info.cpus[0];
        assert_eq!(cpu.bogomips, 48.0);
        assert_eq!(cpu.arch, 8);
        assert_eq!(cpu.features, split("fp asimd evtstrm aes pmull sha1 sha2 crc32 cpuid"));
        assert!(info.misc.is_empty());
    }

    #[test]
    fn test_google_pixel_6_variants() {
        let info = scan_proc(GOOGLE_PIXEL_6.as_bytes());
        let feats = split(concat!(
            "fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp ",
            "cpuid asimdrdm lrcpc dcpop asimddp",
        ));
        let want = [
            (2, Part::CORTEX_A55),
            (2, Part::CORTEX_A55),
            (2, Part::CORTEX_A55),
            (2, Part::CORTEX_A55),
            (4, Part::CORTEX_A76),
            (4, Part::CORTEX_A76),
            (1, Part::CORTEX_X1),
            (1, Part::CORTEX_X1),
        ];
        assert_eq!(info.cpus.len(), want.len());
        for (i, (cpu, (variant, part))) in info.cpus.iter().zip(want).enumerate() {
            let want = Cpu {
                proc: i as u32,
                bogomips: 49.15,
                features: feats.clone(),
                implementer: Implementer::ARM_LTD,
                arch: 8,
                variant,
                part,
                ..Cpu::default()
            };
            assert_eq!(*cpu, want, "cpu #{}", i);
        }
        assert_eq!(info.cpus[6].to_string(), "ARM Ltd Cortex-X1");
        assert!(info.misc.is_empty());
    }

    #[test]
    fn test_amd_epyc() {
        let info = scan_proc(AMD_EPYC.as_bytes());
        assert_eq!(info.cpus.len(), 2);
        for (i, cpu) in info.cpus.iter().enumerate() {
            let i = i as u32;
            assert_eq!(cpu.proc, i);
            assert_eq!(cpu.vendor_id, "AuthenticAMD");
            assert_eq!(cpu.family, 23);
            assert_eq!(cpu.model, 1);
            assert_eq!(cpu.model_name, "AMD EPYC 7551 32-Core Processor");
            assert_eq!(cpu.rev, 2);
            assert_eq!(cpu.microcode, 0x100_0065);
            assert_eq!(cpu.freq, 1996.245);
            assert_eq!(
                cpu.cache,
                Cache {
                    l2: 512 * 1024,
                    alignment: 64,
                    flush: 64,
                    ..Cache::default()
                }
            );
            assert_eq!(cpu.siblings, 2);
            assert_eq!(cpu.cores, 1);
            assert_eq!(cpu.apic_id, i);
            assert_eq!(cpu.init_apic_id, i);
            assert!(cpu.fpu && cpu.fpu_exceptions && cpu.wp);
            assert_eq!(cpu.cpuid_level, 13);
            assert_eq!(cpu.features.first().map(String::as_str), Some("fpu"));
            assert_eq!(cpu.features.last().map(String::as_str), Some("arch_capabilities"));
            assert_eq!(
                cpu.bugs,
                split("sysret_ss_attrs null_seg spectre_v1 spectre_v2 spec_store_bypass")
            );
            assert_eq!(cpu.bogomips, 3992.49);
            assert_eq!(cpu.addr_sizes, AddressSizes { phys: 40, virt: 48 });
            assert_eq!(
                cpu.tlb,
                Tlb {
                    pages: 1024,
                    page_size: 4096
                }
            );
            assert_eq!(cpu.power_mgmt, "");
            assert_eq!(cpu.implementer, Implementer(0));
        }
        assert!(info.misc.is_empty());
    }

    #[test]
    fn test_intel_skylake() {
        let info = scan_proc(INTEL_SKYLAKE.as_bytes());
        assert_eq!(info.cpus.len(), 1);
        let cpu = &info.cpus[0];
        assert_eq!(cpu.vendor_id, "GenuineIntel");
        assert_eq!(cpu.family, 6);
        assert_eq!(cpu.model, 94);
        assert_eq!(cpu.model_name, "Intel Core Processor (Skylake, IBRS)");
        assert_eq!(cpu.rev, 3);
        assert_eq!(cpu.microcode, 1);
        assert_eq!(cpu.freq, 3791.976);
        assert_eq!(cpu.cache.l2, 16384 * 1024);
        assert_eq!(cpu.bogomips, 7583.95);
        assert!(cpu.features.contains(&"avx2".to_string()));
        assert_eq!(cpu.bugs.len(), 9);
        assert!(cpu.tlb.is_empty());
    }
}
