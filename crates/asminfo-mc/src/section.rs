//! Object-file sections.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Classification of a section's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Text,
    Data,
    ReadOnly,
    Bss,
    /// Non-loaded bookkeeping (notes, debug info).
    Metadata,
}

/// ELF `sh_type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElfSectionType {
    ProgBits,
    Note,
    NoBits,
}

impl ElfSectionType {
    /// The numeric `SHT_*` value.
    pub fn raw(self) -> u32 {
        match self {
            ElfSectionType::ProgBits => 1,
            ElfSectionType::Note => 7,
            ElfSectionType::NoBits => 8,
        }
    }

    fn directive_name(self) -> &'static str {
        match self {
            ElfSectionType::ProgBits => "@progbits",
            ElfSectionType::Note => "@note",
            ElfSectionType::NoBits => "@nobits",
        }
    }
}

/// ELF `sh_flags` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElfSectionFlags(pub u64);

impl ElfSectionFlags {
    pub const NONE: Self = Self(0);
    pub const WRITE: Self = Self(0x1);
    pub const ALLOC: Self = Self(0x2);
    pub const EXECINSTR: Self = Self(0x4);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flag letters as written in a `.section` directive.
    pub fn letters(self) -> String {
        let mut s = String::new();
        if self.contains(Self::ALLOC) {
            s.push('a');
        }
        if self.contains(Self::WRITE) {
            s.push('w');
        }
        if self.contains(Self::EXECINSTR) {
            s.push('x');
        }
        s
    }
}

impl BitOr for ElfSectionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A section handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "format")]
pub enum Section {
    Elf {
        name: String,
        section_type: ElfSectionType,
        flags: ElfSectionFlags,
        kind: SectionKind,
    },
}

impl Section {
    pub fn name(&self) -> &str {
        match self {
            Section::Elf { name, .. } => name,
        }
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Elf { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for Section {
    /// Renders the `.section` directive that switches to this section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Elf {
                name,
                section_type,
                flags,
                ..
            } => write!(
                f,
                "\t.section\t{name},\"{}\",{}",
                flags.letters(),
                section_type.directive_name()
            ),
        }
    }
}
