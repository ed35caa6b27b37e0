//! Error types for descriptor operations.

use std::path::PathBuf;

use crate::flavor::X86AsmFlavor;

/// Errors that can occur while configuring or querying descriptors.
#[derive(Debug, thiserror::Error)]
pub enum AsmInfoError {
    /// Unrecognized assembly syntax name.
    #[error("invalid x86 assembly syntax '{value}' (expected one of: att, intel)")]
    InvalidAsmSyntax {
        /// The rejected input.
        value: String,
    },

    /// Inline-assembly constraint name not present in the alias table.
    #[error("malformed inline-asm operand: unknown constraint '{name}'")]
    UnknownConstraint {
        /// The constraint as written.
        name: String,
    },

    /// Extension point requested from a flavor that does not provide it.
    #[error("{operation} is not supported for {flavor} targets")]
    Unsupported {
        /// The requested operation.
        operation: &'static str,
        /// The descriptor's flavor.
        flavor: X86AsmFlavor,
    },

    /// Failure inside the machine-code layer.
    #[error("machine-code layer error: {0}")]
    Mc(#[from] asminfo_mc::McError),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for descriptor operations.
pub type Result<T> = std::result::Result<T, AsmInfoError>;
