//! Inline-assembly constraint aliases.
//!
//! Maps the symbolic register and clobber names used in inline-asm
//! constraint strings to the spelling the native toolchain accepts. An empty
//! spelling means the constraint is valid but has no native counterpart and
//! is dropped from emitted operand and clobber lists.

use crate::error::{AsmInfoError, Result};

/// `(symbolic, native)` pairs shared by every x86 descriptor.
pub static X86_ASM_TABLE: &[(&str, &str)] = &[
    ("{si}", "S"),
    ("{di}", "D"),
    ("{ax}", "a"),
    ("{cx}", "c"),
    ("{memory}", "memory"),
    ("{flags}", ""),
    ("{dirflag}", ""),
    ("{fpsr}", ""),
    ("{fpcr}", ""),
    ("{cc}", "cc"),
];

/// Outcome of a successful constraint lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSpelling {
    /// Emit this spelling.
    Native(&'static str),
    /// Accepted, but drop it from the emitted list.
    Omit,
}

/// Look up `name` in `table`.
///
/// Names absent from the table are malformed operands and come back as
/// [`AsmInfoError::UnknownConstraint`].
pub fn lookup_constraint(
    table: &'static [(&'static str, &'static str)],
    name: &str,
) -> Result<ConstraintSpelling> {
    let spelling = table
        .iter()
        .find(|(symbolic, _)| *symbolic == name)
        .map(|(_, native)| *native)
        .ok_or_else(|| AsmInfoError::UnknownConstraint {
            name: name.to_string(),
        })?;
    log::trace!("constraint {name} -> {spelling:?}");
    if spelling.is_empty() {
        Ok(ConstraintSpelling::Omit)
    } else {
        Ok(ConstraintSpelling::Native(spelling))
    }
}

/// Translate a list of constraint names, dropping omitted entries.
///
/// Stops at the first unknown name.
pub fn translate_constraints<'a, I>(
    table: &'static [(&'static str, &'static str)],
    names: I,
) -> Result<Vec<&'static str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for name in names {
        if let ConstraintSpelling::Native(spelling) = lookup_constraint(table, name)? {
            out.push(spelling);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_spellings() {
        assert_eq!(
            lookup_constraint(X86_ASM_TABLE, "{ax}").unwrap(),
            ConstraintSpelling::Native("a")
        );
        assert_eq!(
            lookup_constraint(X86_ASM_TABLE, "{si}").unwrap(),
            ConstraintSpelling::Native("S")
        );
        assert_eq!(
            lookup_constraint(X86_ASM_TABLE, "{memory}").unwrap(),
            ConstraintSpelling::Native("memory")
        );
    }

    #[test]
    fn omitted_constraints() {
        for name in ["{flags}", "{dirflag}", "{fpsr}", "{fpcr}"] {
            assert_eq!(
                lookup_constraint(X86_ASM_TABLE, name).unwrap(),
                ConstraintSpelling::Omit,
                "{name}"
            );
        }
    }

    #[test]
    fn unknown_constraint_is_an_error() {
        let err = lookup_constraint(X86_ASM_TABLE, "{bx}").unwrap_err();
        assert!(matches!(err, AsmInfoError::UnknownConstraint { ref name } if name == "{bx}"));
    }

    #[test]
    fn lookup_requires_braces() {
        assert!(lookup_constraint(X86_ASM_TABLE, "ax").is_err());
    }

    #[test]
    fn translate_drops_omitted() {
        let out = translate_constraints(
            X86_ASM_TABLE,
            ["{memory}", "{dirflag}", "{fpsr}", "{flags}", "{cc}"],
        )
        .unwrap();
        assert_eq!(out, vec!["memory", "cc"]);
    }

    #[test]
    fn translate_fails_on_unknown() {
        let err = translate_constraints(X86_ASM_TABLE, ["{memory}", "{xmm0}"]).unwrap_err();
        assert!(err.to_string().contains("{xmm0}"));
    }

    #[test]
    fn table_order_is_stable() {
        assert_eq!(X86_ASM_TABLE.len(), 10);
        assert_eq!(X86_ASM_TABLE[0], ("{si}", "S"));
        assert_eq!(X86_ASM_TABLE[9], ("{cc}", "cc"));
    }
}
