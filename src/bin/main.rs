// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! CLI tool for silicon-sysinfo (sysinfo)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use sysinfolib::platform::ProcCpuinfo;
use sysinfolib::{collect_or_empty, detect_with, DetectConfig, Info};

#[derive(Parser)]
#[command(name = "sysinfo")]
#[command(about = "Report static CPU descriptors from /proc/cpuinfo or sysctl", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decode a captured cpuinfo dump instead of the host
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Keep a final record that has no trailing blank line
    #[arg(long)]
    flush_trailing: bool,

    /// Drop records made only of blank lines or unrecognized keys
    #[arg(long)]
    skip_empty: bool,

    /// Print a sample configuration file and exit
    #[arg(long)]
    sample_config: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::init();

    if cli.sample_config {
        print!("{}", DetectConfig::sample_toml());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => DetectConfig::from_toml_file(path)?,
        None => DetectConfig::default(),
    };
    if cli.flush_trailing {
        config.flush_trailing_record = true;
    }
    if cli.skip_empty {
        config.skip_empty_records = true;
    }

    let info = match &cli.input {
        Some(path) => {
            let source = ProcCpuinfo::new(path.clone(), config.scan_options());
            collect_or_empty(&source)
        }
        None => detect_with(&config),
    };

    match cli.format {
        Format::Json => println!("{}", info.to_json()?),
        Format::Text => print_text(&info),
    }
    Ok(())
}

fn print_text(info: &Info) {
    if info.is_empty() {
        eprintln!("{}", "No CPU information available".yellow());
        return;
    }

    for cpu in &info.cpus {
        let label = format!("cpu{}", cpu.proc);
        // x86 kernels report no implementer; the model name is the useful part.
        let name = if cpu.implementer.code() == 0 && !cpu.model_name.is_empty() {
            cpu.model_name.clone()
        } else {
            cpu.to_string()
        };
        print!("{}: {}", label.cyan().bold(), name);
        if !cpu.micro_arch.is_empty() {
            print!(" ({})", cpu.micro_arch);
        }
        if cpu.freq > 0.0 {
            print!(" @ {:.0} MHz", cpu.freq);
        }
        println!();
    }

    if !info.misc.is_empty() {
        println!();
        for pair in &info.misc {
            println!("{}: {}", pair.key.green(), pair.value);
        }
    }
}
