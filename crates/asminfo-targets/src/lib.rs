//! Per-target x86 assembly syntax and ABI descriptors.
//!
//! Given a target triple and the process configuration, builds an immutable
//! [`X86AsmInfo`] describing how assembly for that target is written:
//! - **Naming:** comment marker, symbol prefixes, location-counter token
//! - **Data:** directive spellings, including assemblers that lack `.quad`
//! - **Unwinding:** exception model, personality references, entry CFI state
//! - **Inline asm:** constraint aliases and the configured dialect
//!
//! Four object-format variants exist (Mach-O, ELF, Microsoft COFF, GNU COFF);
//! see [`X86AsmFlavor`].

pub mod asm_info;
pub mod config;
pub mod constraints;
pub mod error;
pub mod fingerprint;
pub mod flavor;
pub mod frame;
pub mod hooks;
pub mod syntax;
pub mod triple;

pub use asm_info::{ExceptionHandling, X86AsmInfo};
pub use config::{load_config_toml, parse_config_toml, AsmInfoConfig};
pub use constraints::{lookup_constraint, translate_constraints, ConstraintSpelling, X86_ASM_TABLE};
pub use error::{AsmInfoError, Result};
pub use fingerprint::{hash_hex, ContentHash};
pub use flavor::X86AsmFlavor;
pub use frame::CfiInstruction;
pub use hooks::AsmHooks;
pub use syntax::AsmSyntax;
pub use triple::{Arch, Environment, ObjectFormat, Os, Triple, Vendor};
