//! The x86 assembly descriptor.
//!
//! A descriptor is built once per target from a [`Triple`] and the process
//! configuration, then only read. Construction is a shared skeleton (pointer
//! size, alias table, dialect, fill byte) followed by object-format defaults
//! and the variant's own adjustments.
//!
//! The variant and triple are private: hooks are derived from the variant,
//! so changing either after construction would leave the other fields stale.

use asminfo_mc::{Expr, McContext, PointerEncoding, Section, Symbol};
use serde::Serialize;

use crate::config::AsmInfoConfig;
use crate::constraints::{self, ConstraintSpelling, X86_ASM_TABLE};
use crate::error::{AsmInfoError, Result};
use crate::flavor::X86AsmFlavor;
use crate::hooks::AsmHooks;
use crate::syntax::AsmSyntax;
use crate::triple::{Arch, Os, Triple};

/// x86 single-byte `nop`.
pub const X86_NOP: u8 = 0x90;

/// How exception-handling metadata is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExceptionHandling {
    None,
    /// Table-based unwinding from DWARF call-frame information.
    DwarfCfi,
}

/// Assembly syntax and ABI parameters for one x86 target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct X86AsmInfo {
    /// Which variant built this descriptor.
    flavor: X86AsmFlavor,
    /// Pointer size in bytes (4 or 8).
    pub pointer_size: u32,
    /// Size of one callee-saved register slot on the stack.
    pub callee_save_stack_slot_size: u32,
    /// Starts a comment that runs to the end of the line.
    pub comment_string: &'static str,
    /// Byte used to pad alignment gaps in code sections.
    pub text_align_fill_value: u8,
    /// Prefix marking assembler-local symbols that never reach the object file.
    pub private_global_prefix: &'static str,
    /// Prefix prepended to every global symbol name.
    pub global_prefix: &'static str,
    /// Token for the current location counter.
    pub pc_symbol: &'static str,
    /// Directive declaring a weak reference; `None` if the format has none.
    pub weak_ref_directive: Option<&'static str>,
    pub data8_directive: &'static str,
    pub data16_directive: &'static str,
    pub data32_directive: &'static str,
    /// `None` when a 64-bit value must be emitted as two 32-bit halves.
    pub data64_directive: Option<&'static str>,
    /// Whether the assembler accepts `.uleb128`/`.sleb128`.
    pub has_leb128: bool,
    pub supports_debug_information: bool,
    /// Mach-O convention: DWARF inline info lives in its own section.
    pub dwarf_uses_inline_info_section: bool,
    pub exception_handling: ExceptionHandling,
    pub assembler_dialect: AsmSyntax,
    /// The triple it was built for.
    triple: Triple,
    #[serde(skip)]
    pub asm_translation_table: &'static [(&'static str, &'static str)],
}

impl X86AsmInfo {
    /// Select the variant for `triple` and build its descriptor.
    pub fn for_triple(triple: &Triple, config: &AsmInfoConfig) -> Self {
        Self::with_flavor(X86AsmFlavor::select(triple), triple, config)
    }

    /// Build a specific variant. Never fails: anything the variant does not
    /// recognize keeps its default.
    ///
    /// The two Darwin variants differ only in width, so either one is
    /// resolved against `triple.arch`.
    pub fn with_flavor(flavor: X86AsmFlavor, triple: &Triple, config: &AsmInfoConfig) -> Self {
        let flavor = match flavor {
            X86AsmFlavor::Darwin32 | X86AsmFlavor::Darwin64 if triple.arch.is_64bit() => {
                X86AsmFlavor::Darwin64
            }
            X86AsmFlavor::Darwin32 | X86AsmFlavor::Darwin64 => X86AsmFlavor::Darwin32,
            other => other,
        };
        let info = Self::common(flavor, triple, config);
        let info = match flavor {
            X86AsmFlavor::Darwin32 | X86AsmFlavor::Darwin64 => info.macho_defaults().darwin(),
            X86AsmFlavor::Elf => info.elf(),
            X86AsmFlavor::Microsoft => info.coff_defaults().microsoft(),
            X86AsmFlavor::GnuCoff => info.coff_defaults().gnu_coff(),
        };
        log::debug!(
            "built {} descriptor for {} (pointer size {}, dialect {})",
            flavor,
            triple,
            info.pointer_size,
            info.assembler_dialect
        );
        info
    }

    /// Target-independent defaults plus the steps every x86 variant shares.
    fn common(flavor: X86AsmFlavor, triple: &Triple, config: &AsmInfoConfig) -> Self {
        let pointer_size = if triple.arch.is_64bit() { 8 } else { 4 };
        Self {
            flavor,
            pointer_size,
            callee_save_stack_slot_size: pointer_size,
            comment_string: "#",
            text_align_fill_value: X86_NOP,
            private_global_prefix: "L",
            global_prefix: "",
            pc_symbol: "$",
            weak_ref_directive: None,
            data8_directive: "\t.byte\t",
            data16_directive: "\t.short\t",
            data32_directive: "\t.long\t",
            data64_directive: Some("\t.quad\t"),
            has_leb128: false,
            supports_debug_information: false,
            dwarf_uses_inline_info_section: false,
            exception_handling: ExceptionHandling::None,
            assembler_dialect: config.asm_syntax(),
            triple: triple.clone(),
            asm_translation_table: X86_ASM_TABLE,
        }
    }

    fn macho_defaults(mut self) -> Self {
        self.global_prefix = "_";
        self.weak_ref_directive = Some("\t.weak_reference ");
        self
    }

    fn coff_defaults(mut self) -> Self {
        self.global_prefix = "_";
        self
    }

    fn darwin(mut self) -> Self {
        if !self.triple.arch.is_64bit() {
            // The 32-bit Darwin assembler cannot emit a 64-bit data unit.
            self.data64_directive = None;
        }
        // `##` survives the C preprocessor, which `clang foo.s` runs.
        self.comment_string = "##";
        self.pc_symbol = ".";
        self.supports_debug_information = true;
        self.dwarf_uses_inline_info_section = true;
        self.exception_handling = ExceptionHandling::DwarfCfi;
        self
    }

    fn elf(mut self) -> Self {
        self.private_global_prefix = ".L";
        self.weak_ref_directive = Some("\t.weak\t");
        self.pc_symbol = ".";
        self.has_leb128 = true;
        self.supports_debug_information = true;
        self.exception_handling = ExceptionHandling::DwarfCfi;
        // OpenBSD's assembler mishandles `.quad` in 32-bit mode.
        if self.triple.os == Os::OpenBsd && self.triple.arch == Arch::X86 {
            self.data64_directive = None;
        }
        self
    }

    fn microsoft(mut self) -> Self {
        if self.triple.arch.is_64bit() {
            self.global_prefix = "";
            self.private_global_prefix = ".L";
        }
        self
    }

    fn gnu_coff(self) -> Self {
        let mut info = self.microsoft();
        info.exception_handling = ExceptionHandling::DwarfCfi;
        info
    }

    pub fn flavor(&self) -> X86AsmFlavor {
        self.flavor
    }

    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    pub fn has_64bit_data_directive(&self) -> bool {
        self.data64_directive.is_some()
    }

    pub fn hooks(&self) -> AsmHooks {
        AsmHooks::for_flavor(self.flavor)
    }

    pub fn supports_personality_expr(&self) -> bool {
        self.hooks().personality_expr.is_some()
    }

    pub fn has_nonexecutable_stack_section(&self) -> bool {
        self.hooks().nonexecutable_stack_section.is_some()
    }

    /// Expression referencing `symbol` as a personality routine in a CIE.
    ///
    /// Only Darwin x86-64 needs a target-specific form; everything else is
    /// [`AsmInfoError::Unsupported`] and callers fall back to a plain
    /// symbol reference with the requested encoding.
    pub fn personality_expr(
        &self,
        symbol: &Symbol,
        encoding: PointerEncoding,
        ctx: &mut McContext,
    ) -> Result<Expr> {
        match self.hooks().personality_expr {
            Some(build) => build(symbol, encoding, ctx),
            None => Err(self.unsupported("personality expression")),
        }
    }

    /// The section marking the stack non-executable; ELF only.
    pub fn nonexecutable_stack_section(&self, ctx: &mut McContext) -> Result<Section> {
        match self.hooks().nonexecutable_stack_section {
            Some(build) => build(ctx),
            None => Err(self.unsupported("non-executable stack section")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> AsmInfoError {
        AsmInfoError::Unsupported {
            operation,
            flavor: self.flavor,
        }
    }

    /// Resolve an inline-asm constraint name through this descriptor's table.
    pub fn lookup_constraint(&self, name: &str) -> Result<ConstraintSpelling> {
        constraints::lookup_constraint(self.asm_translation_table, name)
    }

    /// Translate a clobber list, dropping constraints with no native spelling.
    pub fn translate_constraints<'a, I>(&self, names: I) -> Result<Vec<&'static str>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        constraints::translate_constraints(self.asm_translation_table, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::ObjectFormat;

    fn build(triple: &str) -> X86AsmInfo {
        X86AsmInfo::for_triple(&Triple::parse(triple), &AsmInfoConfig::default())
    }

    #[test]
    fn darwin32_fields() {
        let info = build("i386-apple-darwin10");
        assert_eq!(info.flavor, X86AsmFlavor::Darwin32);
        assert_eq!(info.pointer_size, 4);
        assert_eq!(info.comment_string, "##");
        assert_eq!(info.pc_symbol, ".");
        assert_eq!(info.global_prefix, "_");
        assert_eq!(info.private_global_prefix, "L");
        assert!(!info.has_64bit_data_directive());
        assert!(info.supports_debug_information);
        assert!(info.dwarf_uses_inline_info_section);
        assert_eq!(info.exception_handling, ExceptionHandling::DwarfCfi);
        assert_eq!(info.text_align_fill_value, 0x90);
    }

    #[test]
    fn darwin64_differs_only_in_width() {
        let info = build("x86_64-apple-darwin10");
        assert_eq!(info.flavor, X86AsmFlavor::Darwin64);
        assert_eq!(info.pointer_size, 8);
        assert_eq!(info.callee_save_stack_slot_size, 8);
        assert!(info.has_64bit_data_directive());
        assert_eq!(info.comment_string, "##");
        assert!(info.dwarf_uses_inline_info_section);
    }

    #[test]
    fn elf_fields() {
        let info = build("x86_64-unknown-linux-gnu");
        assert_eq!(info.flavor, X86AsmFlavor::Elf);
        assert_eq!(info.pointer_size, 8);
        assert_eq!(info.comment_string, "#");
        assert_eq!(info.private_global_prefix, ".L");
        assert_eq!(info.global_prefix, "");
        assert_eq!(info.weak_ref_directive, Some("\t.weak\t"));
        assert!(info.has_leb128);
        assert!(info.supports_debug_information);
        assert!(!info.dwarf_uses_inline_info_section);
        assert_eq!(info.exception_handling, ExceptionHandling::DwarfCfi);
    }

    #[test]
    fn openbsd_i386_has_no_quad() {
        assert!(!build("i386-unknown-openbsd").has_64bit_data_directive());
        assert!(build("x86_64-unknown-openbsd").has_64bit_data_directive());
        assert!(build("i386-unknown-freebsd").has_64bit_data_directive());
    }

    #[test]
    fn microsoft_prefixes_by_width() {
        let info32 = build("i686-pc-win32");
        assert_eq!(info32.global_prefix, "_");
        assert_eq!(info32.private_global_prefix, "L");
        let info64 = build("x86_64-pc-win32");
        assert_eq!(info64.global_prefix, "");
        assert_eq!(info64.private_global_prefix, ".L");
        assert_eq!(info64.exception_handling, ExceptionHandling::None);
        assert!(!info64.supports_debug_information);
        assert_eq!(info64.weak_ref_directive, None);
    }

    #[test]
    fn gnu_coff_adds_dwarf_cfi() {
        let info = build("x86_64-w64-mingw32");
        assert_eq!(info.flavor, X86AsmFlavor::GnuCoff);
        assert_eq!(info.global_prefix, "");
        assert_eq!(info.private_global_prefix, ".L");
        assert_eq!(info.exception_handling, ExceptionHandling::DwarfCfi);
    }

    #[test]
    fn darwin_flavor_follows_triple_width() {
        let config = AsmInfoConfig::default();
        let i386 = Triple::parse("i386-apple-darwin10");
        let info = X86AsmInfo::with_flavor(X86AsmFlavor::Darwin64, &i386, &config);
        assert_eq!(info.flavor(), X86AsmFlavor::Darwin32);
        assert_eq!(info.pointer_size, 4);
        assert!(!info.supports_personality_expr());
        assert_eq!(info, build("i386-apple-darwin10"));

        let x86_64 = Triple::parse("x86_64-apple-darwin10");
        let info = X86AsmInfo::with_flavor(X86AsmFlavor::Darwin32, &x86_64, &config);
        assert_eq!(info.flavor(), X86AsmFlavor::Darwin64);
        assert!(info.has_64bit_data_directive());
        assert!(info.supports_personality_expr());
        assert_eq!(info, build("x86_64-apple-darwin10"));
    }

    #[test]
    fn hooks_follow_object_format() {
        for triple in [
            "i386-apple-darwin10",
            "x86_64-unknown-linux-gnu",
            "x86_64-pc-win32",
            "x86_64-w64-mingw32",
        ] {
            let info = build(triple);
            assert_eq!(
                info.has_nonexecutable_stack_section(),
                info.flavor().object_format() == ObjectFormat::Elf,
                "{triple}"
            );
            assert_eq!(
                info.triple().object_format(),
                info.flavor().object_format(),
                "{triple}"
            );
        }
    }

    #[test]
    fn dialect_comes_from_config() {
        let triple = Triple::parse("x86_64-unknown-linux-gnu");
        let intel = AsmInfoConfig::with_syntax(AsmSyntax::Intel);
        assert_eq!(
            X86AsmInfo::for_triple(&triple, &intel).assembler_dialect,
            AsmSyntax::Intel
        );
        assert_eq!(
            X86AsmInfo::for_triple(&triple, &AsmInfoConfig::default()).assembler_dialect,
            AsmSyntax::Att
        );
    }

    #[test]
    fn unsupported_hooks_report_flavor() {
        let info = build("i686-pc-win32");
        let mut ctx = McContext::new();
        let err = info.nonexecutable_stack_section(&mut ctx).unwrap_err();
        assert!(matches!(
            err,
            AsmInfoError::Unsupported {
                flavor: X86AsmFlavor::Microsoft,
                ..
            }
        ));
        assert_eq!(ctx.section_count(), 0);
    }

    #[test]
    fn constraint_lookup_through_descriptor() {
        let info = build("x86_64-apple-darwin10");
        assert_eq!(
            info.lookup_constraint("{cx}").unwrap(),
            ConstraintSpelling::Native("c")
        );
        assert_eq!(
            info.translate_constraints(["{cc}", "{fpcr}"]).unwrap(),
            vec!["cc"]
        );
    }
}
