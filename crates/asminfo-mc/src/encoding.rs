//! DWARF exception-handling pointer encodings (`DW_EH_PE_*`).
//!
//! The low nibble selects the value format, the high nibble how it is
//! applied; `indirect` marks a pointer to the real value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `DW_EH_PE_*` encoding byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEncoding(pub u8);

impl PointerEncoding {
    pub const ABSPTR: Self = Self(0x00);
    pub const UDATA4: Self = Self(0x03);
    pub const UDATA8: Self = Self(0x04);
    pub const SDATA4: Self = Self(0x0b);
    pub const SDATA8: Self = Self(0x0c);
    pub const PCREL: Self = Self(0x10);
    pub const INDIRECT: Self = Self(0x80);
    pub const OMIT: Self = Self(0xff);

    /// Combine two encodings bitwise.
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_pc_relative(self) -> bool {
        self != Self::OMIT && self.0 & 0x70 == Self::PCREL.0
    }

    pub fn is_indirect(self) -> bool {
        self != Self::OMIT && self.0 & Self::INDIRECT.0 != 0
    }

    /// Size in bytes of the encoded value, `None` for pointer-sized or omitted.
    pub fn value_size(self) -> Option<u8> {
        match self.0 & 0x0f {
            _ if self == Self::OMIT => None,
            0x02 | 0x0a => Some(2),
            0x03 | 0x0b => Some(4),
            0x04 | 0x0c => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for PointerEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}
