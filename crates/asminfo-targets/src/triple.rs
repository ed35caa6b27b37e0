//! Target triple model.
//!
//! A triple names architecture, vendor, operating system and environment
//! (`x86_64-apple-darwin11`, `i686-pc-windows-gnu`, `x86_64-linux-gnu`).
//! Parsing never fails: components that are not recognized stay `Unknown`
//! so that new or exotic triples fall back to default descriptor values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arch {
    /// 32-bit x86 (`i386` .. `i686`).
    #[serde(rename = "x86")]
    X86,
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Arch {
    fn parse(s: &str) -> Self {
        match s {
            "i386" | "i486" | "i586" | "i686" | "i786" | "i886" | "i986" | "x86" => Arch::X86,
            "x86_64" | "amd64" => Arch::X86_64,
            _ => Arch::Unknown,
        }
    }

    /// Pointer width in bits. Unknown architectures report 32.
    pub fn pointer_width(self) -> u32 {
        match self {
            Arch::X86_64 => 64,
            Arch::X86 | Arch::Unknown => 32,
        }
    }

    pub fn is_64bit(self) -> bool {
        self.pointer_width() == 64
    }

    pub fn name(self) -> &'static str {
        match self {
            Arch::X86 => "i386",
            Arch::X86_64 => "x86_64",
            Arch::Unknown => "unknown",
        }
    }
}

/// Hardware or toolchain vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vendor {
    Apple,
    Pc,
    Unknown,
}

impl Vendor {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "apple" => Some(Vendor::Apple),
            "pc" => Some(Vendor::Pc),
            "unknown" => Some(Vendor::Unknown),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Vendor::Apple => "apple",
            Vendor::Pc => "pc",
            Vendor::Unknown => "unknown",
        }
    }
}

/// Operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Os {
    Darwin,
    MacOsx,
    Ios,
    Linux,
    FreeBsd,
    NetBsd,
    OpenBsd,
    Solaris,
    /// `win32` or `windows`.
    Win32,
    MinGw32,
    Cygwin,
    /// Freestanding (`none`).
    None,
    Unknown,
}

impl Os {
    // Longest-unambiguous prefixes; a trailing version (`darwin11.4.0`,
    // `macosx10.7`) is ignored.
    const PREFIXES: &'static [(&'static str, Os)] = &[
        ("darwin", Os::Darwin),
        ("macosx", Os::MacOsx),
        ("ios", Os::Ios),
        ("linux", Os::Linux),
        ("freebsd", Os::FreeBsd),
        ("netbsd", Os::NetBsd),
        ("openbsd", Os::OpenBsd),
        ("solaris", Os::Solaris),
        ("win32", Os::Win32),
        ("windows", Os::Win32),
        ("mingw32", Os::MinGw32),
        ("cygwin", Os::Cygwin),
        ("none", Os::None),
    ];

    fn parse(s: &str) -> Option<Self> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| s.starts_with(prefix))
            .map(|(_, os)| *os)
    }

    pub fn name(self) -> &'static str {
        match self {
            Os::Darwin => "darwin",
            Os::MacOsx => "macosx",
            Os::Ios => "ios",
            Os::Linux => "linux",
            Os::FreeBsd => "freebsd",
            Os::NetBsd => "netbsd",
            Os::OpenBsd => "openbsd",
            Os::Solaris => "solaris",
            Os::Win32 => "win32",
            Os::MinGw32 => "mingw32",
            Os::Cygwin => "cygwin",
            Os::None => "none",
            Os::Unknown => "unknown",
        }
    }
}

/// ABI / environment, which may also force an object format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Gnu,
    Msvc,
    Android,
    /// Force ELF output regardless of OS.
    Elf,
    /// Force Mach-O output regardless of OS.
    MachO,
    Unknown,
}

impl Environment {
    fn parse(s: &str) -> Option<Self> {
        if s.starts_with("gnu") {
            Some(Environment::Gnu)
        } else if s.starts_with("msvc") {
            Some(Environment::Msvc)
        } else if s.starts_with("android") {
            Some(Environment::Android)
        } else if s == "elf" {
            Some(Environment::Elf)
        } else if s == "macho" {
            Some(Environment::MachO)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Gnu => "gnu",
            Environment::Msvc => "msvc",
            Environment::Android => "android",
            Environment::Elf => "elf",
            Environment::MachO => "macho",
            Environment::Unknown => "unknown",
        }
    }
}

/// Object-file format implied by a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFormat {
    Elf,
    MachO,
    Coff,
}

/// A parsed target triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Triple {
    pub arch: Arch,
    pub vendor: Vendor,
    pub os: Os,
    pub environment: Environment,
}

impl Triple {
    /// Parse a triple string.
    ///
    /// The first component is the architecture. Each remaining component
    /// fills the first still-empty slot (vendor, OS, environment) it parses
    /// as, so `x86_64-linux-gnu` and `x86_64-unknown-linux-gnu` agree.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.trim().split('-');
        let arch = parts.next().map(Arch::parse).unwrap_or(Arch::Unknown);

        let mut vendor = None;
        let mut os = None;
        let mut environment = None;
        for comp in parts {
            if vendor.is_none() {
                if let Some(v) = Vendor::parse(comp) {
                    vendor = Some(v);
                    continue;
                }
            }
            if os.is_none() {
                if let Some(o) = Os::parse(comp) {
                    os = Some(o);
                    continue;
                }
            }
            if environment.is_none() {
                if let Some(e) = Environment::parse(comp) {
                    environment = Some(e);
                    continue;
                }
            }
            log::trace!("ignoring unrecognized triple component '{comp}' in '{s}'");
        }

        Self {
            arch,
            vendor: vendor.unwrap_or(Vendor::Unknown),
            os: os.unwrap_or(Os::Unknown),
            environment: environment.unwrap_or(Environment::Unknown),
        }
    }

    pub fn is_os_darwin(&self) -> bool {
        matches!(self.os, Os::Darwin | Os::MacOsx | Os::Ios)
    }

    pub fn is_os_windows(&self) -> bool {
        matches!(self.os, Os::Win32 | Os::MinGw32 | Os::Cygwin)
    }

    /// Windows with the Microsoft toolchain ABI.
    pub fn is_windows_msvc(&self) -> bool {
        self.os == Os::Win32
            && !matches!(self.environment, Environment::Gnu | Environment::Elf)
    }

    /// Windows with a GNU toolchain ABI (MinGW, Cygwin, `windows-gnu`).
    pub fn is_windows_gnu(&self) -> bool {
        matches!(self.os, Os::MinGw32 | Os::Cygwin)
            || (self.os == Os::Win32 && self.environment == Environment::Gnu)
    }

    pub fn object_format(&self) -> ObjectFormat {
        match self.environment {
            Environment::Elf => ObjectFormat::Elf,
            Environment::MachO => ObjectFormat::MachO,
            _ if self.is_os_darwin() => ObjectFormat::MachO,
            _ if self.is_os_windows() => ObjectFormat::Coff,
            _ => ObjectFormat::Elf,
        }
    }
}

impl From<&str> for Triple {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl fmt::Display for Triple {
    /// Normalized form; the environment is printed only when known.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.arch.name(),
            self.vendor.name(),
            self.os.name()
        )?;
        if self.environment != Environment::Unknown {
            write!(f, "-{}", self.environment.name())?;
        }
        Ok(())
    }
}
