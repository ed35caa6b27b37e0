//! Uniquing context for symbols and sections.
//!
//! One context lives for the duration of an emission. Symbols and sections
//! requested by name come back as the same handle every time.

use std::collections::{HashMap, HashSet};

use crate::error::{McError, Result};
use crate::expr::Expr;
use crate::section::{ElfSectionFlags, ElfSectionType, Section, SectionKind};
use crate::symbol::Symbol;

/// Owns the symbol table and section map for one emission.
#[derive(Debug, Default)]
pub struct McContext {
    symbols: HashMap<String, Symbol>,
    used: HashSet<Symbol>,
    sections: HashMap<String, Section>,
}

impl McContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the symbol named `name`, creating it on first request.
    pub fn get_or_create_symbol(&mut self, name: &str) -> Result<Symbol> {
        if name.is_empty() {
            return Err(McError::EmptySymbolName);
        }
        if let Some(sym) = self.symbols.get(name) {
            return Ok(sym.clone());
        }
        let sym = Symbol::new(name);
        self.symbols.insert(name.to_string(), sym.clone());
        Ok(sym)
    }

    pub fn lookup_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Record every symbol an expression references, so the object writer
    /// emits them (as undefined if nothing defines them).
    pub fn record_uses(&mut self, expr: &Expr) {
        for sym in expr.referenced_symbols() {
            if !self.symbols.contains_key(sym.name()) {
                self.symbols.insert(sym.name().to_string(), sym.clone());
            }
            self.used.insert(sym.clone());
        }
    }

    pub fn is_used(&self, symbol: &Symbol) -> bool {
        self.used.contains(symbol)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Return the ELF section `name`, creating it with the given attributes.
    ///
    /// Requesting an existing section with different attributes is an error.
    pub fn get_elf_section(
        &mut self,
        name: &str,
        section_type: ElfSectionType,
        flags: ElfSectionFlags,
        kind: SectionKind,
    ) -> Result<Section> {
        if let Some(existing) = self.sections.get(name) {
            let Section::Elf {
                section_type: t,
                flags: fl,
                kind: k,
                ..
            } = existing;
            if *t != section_type || *fl != flags || *k != kind {
                return Err(McError::SectionConflict {
                    name: name.to_string(),
                    detail: format!(
                        "type {:?}/{:?}, flags 0x{:x}/0x{:x}, kind {:?}/{:?}",
                        t, section_type, fl.0, flags.0, k, kind
                    ),
                });
            }
            return Ok(existing.clone());
        }
        log::trace!("creating ELF section {name}");
        let section = Section::Elf {
            name: name.to_string(),
            section_type,
            flags,
            kind,
        };
        self.sections.insert(name.to_string(), section.clone());
        Ok(section)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
