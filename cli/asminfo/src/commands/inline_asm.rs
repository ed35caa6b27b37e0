//! `asminfo constraint`: inline-asm constraint translation.

use anyhow::Result;

use asminfo_targets::{lookup_constraint, ConstraintSpelling, X86_ASM_TABLE};

/// Print the native spelling of each constraint; fails on the first unknown.
pub fn constraint(names: &[String]) -> Result<()> {
    for line in render(names)? {
        println!("{line}");
    }
    Ok(())
}

fn render(names: &[String]) -> Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            let line = match lookup_constraint(X86_ASM_TABLE, name)? {
                ConstraintSpelling::Native(spelling) => format!("{name} -> {spelling}"),
                ConstraintSpelling::Omit => format!("{name} -> (omitted)"),
            };
            Ok(line)
        })
        .collect()
}
