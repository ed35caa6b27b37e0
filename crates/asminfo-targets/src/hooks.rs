//! Extension points a descriptor variant may provide.
//!
//! Each variant carries an [`AsmHooks`] record; an absent hook means the
//! operation does not apply to that object format.

use asminfo_mc::{
    ElfSectionFlags, ElfSectionType, Expr, McContext, PointerEncoding, Section, SectionKind,
    Symbol, SymbolRefKind,
};

use crate::error::Result;
use crate::flavor::X86AsmFlavor;

/// Builds the expression that references a personality routine from a CIE.
pub type PersonalityExprFn = fn(&Symbol, PointerEncoding, &mut McContext) -> Result<Expr>;

/// Builds the section telling the loader the stack need not be executable.
pub type NonexecutableStackSectionFn = fn(&mut McContext) -> Result<Section>;

/// Capability record attached to a descriptor variant.
#[derive(Debug, Clone, Copy)]
pub struct AsmHooks {
    pub personality_expr: Option<PersonalityExprFn>,
    pub nonexecutable_stack_section: Option<NonexecutableStackSectionFn>,
}

impl AsmHooks {
    /// No overrides.
    pub const BASE: AsmHooks = AsmHooks {
        personality_expr: None,
        nonexecutable_stack_section: None,
    };

    pub fn for_flavor(flavor: X86AsmFlavor) -> Self {
        match flavor {
            X86AsmFlavor::Darwin64 => AsmHooks {
                personality_expr: Some(darwin64_personality_expr),
                ..Self::BASE
            },
            X86AsmFlavor::Elf => AsmHooks {
                nonexecutable_stack_section: Some(elf_nonexecutable_stack_section),
                ..Self::BASE
            },
            X86AsmFlavor::Darwin32 | X86AsmFlavor::Microsoft | X86AsmFlavor::GnuCoff => {
                Self::BASE
            }
        }
    }
}

/// `sym@GOTPCREL + 4`.
///
/// The unwinder on x86-64 Darwin resolves the personality pointer relative
/// to the end of the 4-byte field, hence the fixed addend.
fn darwin64_personality_expr(
    symbol: &Symbol,
    _encoding: PointerEncoding,
    ctx: &mut McContext,
) -> Result<Expr> {
    let expr = Expr::add(
        Expr::symbol_ref(symbol.clone(), SymbolRefKind::GotPcRel),
        Expr::constant(4),
    );
    ctx.record_uses(&expr);
    Ok(expr)
}

fn elf_nonexecutable_stack_section(ctx: &mut McContext) -> Result<Section> {
    let section = ctx.get_elf_section(
        ".note.GNU-stack",
        ElfSectionType::ProgBits,
        ElfSectionFlags::NONE,
        SectionKind::Metadata,
    )?;
    Ok(section)
}
