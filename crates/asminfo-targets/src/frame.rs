//! Call-frame state at function entry.
//!
//! Right after a `call`, the return address sits at the top of the stack:
//! the CFA is the stack pointer plus one slot and the return address is
//! saved one slot below the CFA.

use serde::Serialize;

use crate::asm_info::X86AsmInfo;
use crate::flavor::X86AsmFlavor;

/// A DWARF call-frame instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "op")]
pub enum CfiInstruction {
    /// `CFA = register + offset`.
    DefCfa { register: u16, offset: i32 },
    /// `register` is saved at `CFA + offset`.
    Offset { register: u16, offset: i32 },
}

impl CfiInstruction {
    /// Spelling as a `.cfi_*` directive.
    pub fn directive(&self) -> String {
        match self {
            CfiInstruction::DefCfa { register, offset } => {
                format!("\t.cfi_def_cfa {register}, {offset}")
            }
            CfiInstruction::Offset { register, offset } => {
                format!("\t.cfi_offset {register}, {offset}")
            }
        }
    }
}

/// DWARF EH register numbers for the stack pointer and return address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EhRegisters {
    pub stack_pointer: u16,
    pub return_address: u16,
}

impl EhRegisters {
    pub fn for_descriptor(info: &X86AsmInfo) -> Self {
        if info.triple().arch.is_64bit() {
            // %rsp, %rip
            EhRegisters {
                stack_pointer: 7,
                return_address: 16,
            }
        } else if info.flavor() == X86AsmFlavor::Darwin32 {
            // Darwin i386 EH tables swap the %ebp/%esp numbers.
            EhRegisters {
                stack_pointer: 5,
                return_address: 8,
            }
        } else {
            EhRegisters {
                stack_pointer: 4,
                return_address: 8,
            }
        }
    }
}

impl X86AsmInfo {
    /// CFI instructions every frame starts with.
    pub fn initial_frame_state(&self) -> Vec<CfiInstruction> {
        let regs = EhRegisters::for_descriptor(self);
        let slot = self.callee_save_stack_slot_size as i32;
        vec![
            CfiInstruction::DefCfa {
                register: regs.stack_pointer,
                offset: slot,
            },
            CfiInstruction::Offset {
                register: regs.return_address,
                offset: -slot,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AsmInfoConfig;
    use crate::triple::Triple;

    fn frame(triple: &str) -> Vec<CfiInstruction> {
        X86AsmInfo::for_triple(&Triple::parse(triple), &AsmInfoConfig::default())
            .initial_frame_state()
    }

    #[test]
    fn x86_64_entry_state() {
        assert_eq!(
            frame("x86_64-unknown-linux-gnu"),
            vec![
                CfiInstruction::DefCfa {
                    register: 7,
                    offset: 8
                },
                CfiInstruction::Offset {
                    register: 16,
                    offset: -8
                },
            ]
        );
    }

    #[test]
    fn i386_elf_entry_state() {
        assert_eq!(
            frame("i686-pc-linux-gnu"),
            vec![
                CfiInstruction::DefCfa {
                    register: 4,
                    offset: 4
                },
                CfiInstruction::Offset {
                    register: 8,
                    offset: -4
                },
            ]
        );
    }

    #[test]
    fn darwin_i386_uses_swapped_numbering() {
        let state = frame("i386-apple-darwin10");
        assert_eq!(
            state[0],
            CfiInstruction::DefCfa {
                register: 5,
                offset: 4
            }
        );
    }

    #[test]
    fn directive_text() {
        let state = frame("x86_64-apple-darwin10");
        assert_eq!(state[0].directive(), "\t.cfi_def_cfa 7, 8");
        assert_eq!(state[1].directive(), "\t.cfi_offset 16, -8");
    }
}
