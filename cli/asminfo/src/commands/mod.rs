//! CLI command implementations.

pub mod describe;
pub mod emit;
pub mod inline_asm;
