//! `asminfo describe`, `select` and `fingerprint`.

use std::fmt;

use anyhow::{bail, Result};

use asminfo_targets::{hash_hex, AsmInfoConfig, Triple, X86AsmFlavor, X86AsmInfo};

/// Describe the descriptor for a triple.
pub fn describe(triple: &str, config: &AsmInfoConfig, format: Option<&str>) -> Result<()> {
    let info = X86AsmInfo::for_triple(&Triple::parse(triple), config);
    print!("{}", render(&info, format)?);
    Ok(())
}

/// Render a descriptor in the requested format (default: text).
pub fn render(info: &X86AsmInfo, format: Option<&str>) -> Result<String> {
    match format.unwrap_or("text") {
        "text" => Ok(DescriptorReport(info).to_string()),
        "toml" => Ok(toml::to_string_pretty(info)?),
        "json" => Ok(serde_json::to_string_pretty(info)? + "\n"),
        other => bail!("unknown format: '{other}' (expected text, toml, or json)"),
    }
}

/// Sectioned, human-readable view of a descriptor.
pub struct DescriptorReport<'a>(pub &'a X86AsmInfo);

impl fmt::Display for DescriptorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.0;
        writeln!(f, "=== Descriptor: {} ===", info.triple())?;
        writeln!(f, "Flavor:        {}", info.flavor())?;
        writeln!(f, "Object format: {:?}", info.flavor().object_format())?;
        writeln!(f)?;

        writeln!(f, "--- Naming ---")?;
        writeln!(f, "  Comment:        {:?}", info.comment_string)?;
        writeln!(f, "  Global prefix:  {:?}", info.global_prefix)?;
        writeln!(f, "  Private prefix: {:?}", info.private_global_prefix)?;
        writeln!(f, "  PC symbol:      {:?}", info.pc_symbol)?;
        match info.weak_ref_directive {
            Some(d) => writeln!(f, "  Weak reference: {d:?}")?,
            None => writeln!(f, "  Weak reference: (none)")?,
        }
        writeln!(f)?;

        writeln!(f, "--- Data ---")?;
        writeln!(f, "  Pointer size: {} bytes", info.pointer_size)?;
        writeln!(f, "  Align fill:   0x{:02X}", info.text_align_fill_value)?;
        writeln!(f, "  8-bit:        {:?}", info.data8_directive)?;
        writeln!(f, "  16-bit:       {:?}", info.data16_directive)?;
        writeln!(f, "  32-bit:       {:?}", info.data32_directive)?;
        match info.data64_directive {
            Some(d) => writeln!(f, "  64-bit:       {d:?}")?,
            None => writeln!(f, "  64-bit:       (split into two 32-bit units)")?,
        }
        writeln!(f, "  LEB128:       {}", yes_no(info.has_leb128))?;
        writeln!(f)?;

        writeln!(f, "--- Debug & unwinding ---")?;
        writeln!(
            f,
            "  Debug info:          {}",
            yes_no(info.supports_debug_information)
        )?;
        writeln!(
            f,
            "  Inline info section: {}",
            yes_no(info.dwarf_uses_inline_info_section)
        )?;
        writeln!(f, "  Exceptions:          {:?}", info.exception_handling)?;
        writeln!(f, "  Entry CFI:")?;
        for cfi in info.initial_frame_state() {
            writeln!(f, "  {}", cfi.directive().trim_start())?;
        }
        writeln!(f)?;

        writeln!(f, "--- Inline asm ---")?;
        writeln!(
            f,
            "  Dialect: {} ({}): {}",
            info.assembler_dialect,
            info.assembler_dialect.dialect_index(),
            info.assembler_dialect.description()
        )?;
        writeln!(f, "  Constraint aliases:")?;
        for (symbolic, native) in info.asm_translation_table {
            if native.is_empty() {
                writeln!(f, "    {symbolic:<10} (omitted)")?;
            } else {
                writeln!(f, "    {symbolic:<10} {native}")?;
            }
        }
        Ok(())
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Print the variant a triple selects.
pub fn select(triple: &str) -> Result<()> {
    let parsed = Triple::parse(triple);
    let flavor = X86AsmFlavor::select(&parsed);
    println!("{parsed}: {flavor} ({:?})", flavor.object_format());
    Ok(())
}

/// Print the content fingerprint of a triple's descriptor.
pub fn fingerprint(triple: &str, config: &AsmInfoConfig) -> Result<()> {
    let info = X86AsmInfo::for_triple(&Triple::parse(triple), config);
    println!("{}", hash_hex(&info.fingerprint()?));
    Ok(())
}
