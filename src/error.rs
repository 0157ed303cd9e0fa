// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 nervosys

//! Error types for silicon-sysinfo
//!
//! Only acquisition, configuration and the CLI can fail. The parsing core
//! never returns an error: malformed fields decode to zero.

use std::io;
use thiserror::Error;

/// Result type alias for sysinfo operations
pub type Result<T> = std::result::Result<T, SysinfoError>;

#[derive(Error, Debug)]
pub enum SysinfoError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unsupported platform
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Invalid value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Command failed
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
