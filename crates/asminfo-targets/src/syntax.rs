//! Assembler dialect selection.
//!
//! The dialect is decided once, when configuration is read, and copied into
//! every descriptor built afterwards. The numbering matches GCC's inline-asm
//! dialect alternatives (`{att|intel}`), so `asm` statements with dialect
//! alternatives pick the same branch here and in a system assembler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AsmInfoError;

/// Textual flavor of x86 assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AsmSyntax {
    /// AT&T operand order and `%` register prefixes.
    #[default]
    Att = 0,
    Intel = 1,
}

impl AsmSyntax {
    pub const ALL: [AsmSyntax; 2] = [AsmSyntax::Att, AsmSyntax::Intel];

    /// Dialect index used by inline-asm `{a|b}` alternatives.
    pub fn dialect_index(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            AsmSyntax::Att => "att",
            AsmSyntax::Intel => "intel",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AsmSyntax::Att => "Emit AT&T-style assembly",
            AsmSyntax::Intel => "Emit Intel-style assembly",
        }
    }
}

impl FromStr for AsmSyntax {
    type Err = AsmInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AsmSyntax::ALL
            .into_iter()
            .find(|syntax| syntax.name() == s)
            .ok_or_else(|| AsmInfoError::InvalidAsmSyntax {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AsmSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
