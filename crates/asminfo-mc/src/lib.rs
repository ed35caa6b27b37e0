//! Symbol, expression and section primitives for assembly descriptors.
//!
//! These are the pieces of the machine-code layer that per-target descriptors
//! touch when they build something on behalf of the assembly printer:
//! - **Symbols:** named handles uniqued by an [`McContext`]
//! - **Expressions:** relocatable expression trees ([`Expr`])
//! - **Sections:** object-file sections with type, flags and kind
//! - **Pointer encodings:** DWARF `DW_EH_PE_*` bytes used in unwind tables

pub mod context;
pub mod encoding;
pub mod error;
pub mod expr;
pub mod section;
pub mod symbol;

pub use context::McContext;
pub use encoding::PointerEncoding;
pub use error::{McError, Result};
pub use expr::{BinaryOp, Expr};
pub use section::{ElfSectionFlags, ElfSectionType, Section, SectionKind};
pub use symbol::{Symbol, SymbolRefKind};
