//! Symbols and symbol-reference relocation kinds.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A named symbol handle.
///
/// Cloning is cheap; two handles compare equal when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: Arc<str>,
}

impl Symbol {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: Arc::from(name) }
    }

    /// The symbol's name as it appears in assembly output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the symbol is assembler-temporary under the given private prefix.
    pub fn is_temporary(&self, private_prefix: &str) -> bool {
        !private_prefix.is_empty() && self.name.starts_with(private_prefix)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Relocation modifier attached to a symbol reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolRefKind {
    /// Plain reference, no modifier.
    None,
    /// PC-relative reference to the symbol's GOT entry.
    GotPcRel,
    /// Offset from the GOT base.
    GotOff,
    /// Reference through the procedure linkage table.
    Plt,
    /// Mach-O thread-local variable pointer.
    TlvpRel,
}

impl SymbolRefKind {
    /// The `@MODIFIER` suffix printed after the symbol name.
    pub fn suffix(self) -> &'static str {
        match self {
            SymbolRefKind::None => "",
            SymbolRefKind::GotPcRel => "@GOTPCREL",
            SymbolRefKind::GotOff => "@GOTOFF",
            SymbolRefKind::Plt => "@PLT",
            SymbolRefKind::TlvpRel => "@TLVP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_identity_by_name() {
        let a = Symbol::new("__gxx_personality_v0");
        let b = Symbol::new("__gxx_personality_v0");
        assert_eq!(a, b);
        assert_eq!(a.name(), "__gxx_personality_v0");
        assert_eq!(a.to_string(), "__gxx_personality_v0");
    }

    #[test]
    fn temporary_symbols() {
        assert!(Symbol::new(".Ltmp0").is_temporary(".L"));
        assert!(Symbol::new("Ltmp0").is_temporary("L"));
        assert!(!Symbol::new("main").is_temporary(".L"));
        assert!(!Symbol::new("main").is_temporary(""));
    }

    #[test]
    fn ref_kind_suffixes() {
        assert_eq!(SymbolRefKind::None.suffix(), "");
        assert_eq!(SymbolRefKind::GotPcRel.suffix(), "@GOTPCREL");
        assert_eq!(SymbolRefKind::Plt.suffix(), "@PLT");
    }
}
