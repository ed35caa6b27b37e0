//! `asminfo personality` and `asminfo stack-note`.

use anyhow::{Context, Result};

use asminfo_mc::{McContext, PointerEncoding};
use asminfo_targets::{AsmInfoConfig, Triple, X86AsmInfo};

/// Encoding the exception-table writer requests for personality pointers.
const PERSONALITY_ENCODING: PointerEncoding = PointerEncoding::INDIRECT
    .with(PointerEncoding::PCREL)
    .with(PointerEncoding::SDATA4);

/// Print the personality reference for `symbol` on `triple`.
pub fn personality(triple: &str, symbol: &str, config: &AsmInfoConfig) -> Result<()> {
    let info = X86AsmInfo::for_triple(&Triple::parse(triple), config);
    println!("{}", render_personality(&info, symbol)?);
    Ok(())
}

fn render_personality(info: &X86AsmInfo, symbol: &str) -> Result<String> {
    let mut ctx = McContext::new();
    let sym = ctx.get_or_create_symbol(symbol)?;
    if !info.supports_personality_expr() {
        // Plain reference; the printer applies the encoding itself.
        return Ok(format!(
            "{sym} (encoding {PERSONALITY_ENCODING}, no target-specific form for {})",
            info.flavor()
        ));
    }
    let expr = info
        .personality_expr(&sym, PERSONALITY_ENCODING, &mut ctx)
        .with_context(|| format!("building personality reference for {}", info.triple()))?;
    Ok(format!("{expr} (encoding {PERSONALITY_ENCODING})"))
}

/// Print the non-executable stack section directive for `triple`.
pub fn stack_note(triple: &str, config: &AsmInfoConfig) -> Result<()> {
    let info = X86AsmInfo::for_triple(&Triple::parse(triple), config);
    let mut ctx = McContext::new();
    let section = info.nonexecutable_stack_section(&mut ctx)?;
    println!("{section}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(triple: &str) -> X86AsmInfo {
        X86AsmInfo::for_triple(&Triple::parse(triple), &AsmInfoConfig::default())
    }

    #[test]
    fn darwin64_personality() {
        let text = render_personality(&info("x86_64-apple-darwin10"), "___gxx_personality_v0")
            .unwrap();
        assert_eq!(text, "___gxx_personality_v0@GOTPCREL+4 (encoding 0x9b)");
    }

    #[test]
    fn plain_personality_elsewhere() {
        let text =
            render_personality(&info("x86_64-unknown-linux-gnu"), "__gxx_personality_v0").unwrap();
        assert!(text.starts_with("__gxx_personality_v0 "));
        assert!(text.contains("elf"));
    }

    #[test]
    fn empty_symbol_rejected() {
        assert!(render_personality(&info("x86_64-apple-darwin10"), "").is_err());
    }

    #[test]
    fn stack_note_only_on_elf() {
        let config = AsmInfoConfig::default();
        assert!(stack_note("x86_64-unknown-linux-gnu", &config).is_ok());
        let err = stack_note("x86_64-apple-darwin10", &config).unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }
}
