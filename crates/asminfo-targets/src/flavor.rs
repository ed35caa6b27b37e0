//! Descriptor variants and their selection from a triple.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::triple::{Environment, ObjectFormat, Triple};

/// The closed set of x86 descriptor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum X86AsmFlavor {
    /// Mach-O, 32-bit.
    Darwin32,
    /// Mach-O, 64-bit. Same fields as `Darwin32`; adds the personality
    /// expression override.
    Darwin64,
    Elf,
    /// COFF with the Microsoft ABI.
    Microsoft,
    /// COFF with a GNU ABI (MinGW, Cygwin).
    GnuCoff,
}

impl X86AsmFlavor {
    pub const ALL: [X86AsmFlavor; 5] = [
        X86AsmFlavor::Darwin32,
        X86AsmFlavor::Darwin64,
        X86AsmFlavor::Elf,
        X86AsmFlavor::Microsoft,
        X86AsmFlavor::GnuCoff,
    ];

    /// Pick the variant for a triple.
    ///
    /// Triples that match nothing specific get the ELF variant.
    pub fn select(triple: &Triple) -> Self {
        let flavor = if triple.is_os_darwin() || triple.environment == Environment::MachO {
            if triple.arch.is_64bit() {
                X86AsmFlavor::Darwin64
            } else {
                X86AsmFlavor::Darwin32
            }
        } else if triple.environment == Environment::Elf {
            X86AsmFlavor::Elf
        } else if triple.is_windows_msvc() {
            X86AsmFlavor::Microsoft
        } else if triple.is_windows_gnu() {
            X86AsmFlavor::GnuCoff
        } else {
            X86AsmFlavor::Elf
        };
        log::debug!("selected {flavor} descriptor for {triple}");
        flavor
    }

    pub fn object_format(self) -> ObjectFormat {
        match self {
            X86AsmFlavor::Darwin32 | X86AsmFlavor::Darwin64 => ObjectFormat::MachO,
            X86AsmFlavor::Elf => ObjectFormat::Elf,
            X86AsmFlavor::Microsoft | X86AsmFlavor::GnuCoff => ObjectFormat::Coff,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            X86AsmFlavor::Darwin32 => "darwin",
            X86AsmFlavor::Darwin64 => "darwin64",
            X86AsmFlavor::Elf => "elf",
            X86AsmFlavor::Microsoft => "microsoft-coff",
            X86AsmFlavor::GnuCoff => "gnu-coff",
        }
    }
}

impl fmt::Display for X86AsmFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(triple: &str) -> X86AsmFlavor {
        X86AsmFlavor::select(&Triple::parse(triple))
    }

    #[test]
    fn darwin_by_width() {
        assert_eq!(select("i386-apple-darwin10"), X86AsmFlavor::Darwin32);
        assert_eq!(select("x86_64-apple-darwin10"), X86AsmFlavor::Darwin64);
        assert_eq!(select("x86_64-apple-macosx10.7.0"), X86AsmFlavor::Darwin64);
        assert_eq!(select("i686-apple-ios"), X86AsmFlavor::Darwin32);
    }

    #[test]
    fn macho_environment_forces_darwin() {
        assert_eq!(select("x86_64-unknown-unknown-macho"), X86AsmFlavor::Darwin64);
    }

    #[test]
    fn elf_environment_overrides_windows() {
        assert_eq!(select("i686-pc-win32-elf"), X86AsmFlavor::Elf);
    }

    #[test]
    fn windows_abis() {
        assert_eq!(select("x86_64-pc-win32"), X86AsmFlavor::Microsoft);
        assert_eq!(select("x86_64-pc-windows-msvc"), X86AsmFlavor::Microsoft);
        assert_eq!(select("i686-pc-mingw32"), X86AsmFlavor::GnuCoff);
        assert_eq!(select("x86_64-w64-mingw32"), X86AsmFlavor::GnuCoff);
        assert_eq!(select("i686-pc-cygwin"), X86AsmFlavor::GnuCoff);
        assert_eq!(select("x86_64-pc-windows-gnu"), X86AsmFlavor::GnuCoff);
    }

    #[test]
    fn default_is_elf() {
        assert_eq!(select("x86_64-unknown-linux-gnu"), X86AsmFlavor::Elf);
        assert_eq!(select("i386-unknown-openbsd"), X86AsmFlavor::Elf);
        assert_eq!(select("totally-unknown"), X86AsmFlavor::Elf);
    }

    #[test]
    fn object_formats() {
        assert_eq!(X86AsmFlavor::Darwin64.object_format(), ObjectFormat::MachO);
        assert_eq!(X86AsmFlavor::GnuCoff.object_format(), ObjectFormat::Coff);
        assert_eq!(X86AsmFlavor::Elf.object_format(), ObjectFormat::Elf);
    }
}
