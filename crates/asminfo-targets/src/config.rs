//! Descriptor configuration and its TOML form.
//!
//! Configuration is read once at startup, before any descriptor is built,
//! and passed by reference into every constructor afterwards:
//!
//! ```toml
//! [x86]
//! asm-syntax = "intel"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AsmInfoError, Result};
use crate::syntax::AsmSyntax;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "asminfo.toml";

/// Process-wide descriptor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AsmInfoConfig {
    #[serde(default)]
    pub x86: X86Config,
}

/// x86 backend settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct X86Config {
    /// Style of assembly to emit.
    #[serde(default)]
    pub asm_syntax: AsmSyntax,
}

impl AsmInfoConfig {
    pub fn with_syntax(asm_syntax: AsmSyntax) -> Self {
        Self {
            x86: X86Config { asm_syntax },
        }
    }

    pub fn asm_syntax(&self) -> AsmSyntax {
        self.x86.asm_syntax
    }
}

/// Load configuration from a TOML file.
pub fn load_config_toml(path: &Path) -> Result<AsmInfoConfig> {
    if !path.exists() {
        return Err(AsmInfoError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_config_toml(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config_toml(toml_str: &str) -> Result<AsmInfoConfig> {
    let config: AsmInfoConfig = toml::from_str(toml_str)?;
    log::debug!("loaded configuration: x86 asm syntax {}", config.asm_syntax());
    Ok(config)
}

/// Serialize configuration to pretty TOML.
pub fn config_to_toml(config: &AsmInfoConfig) -> Result<String> {
    let toml_str = toml::to_string_pretty(config)?;
    Ok(toml_str)
}
