// IPPcode18 instruction signatures: mnemonic -> operand roles, in order.

use crate::operand::Role::{self, Label, Symb, Type, Var};

pub struct InstructionEntry {
    pub mnemonic: &'static str,
    pub operands: &'static [Role],
}

const fn entry(mnemonic: &'static str, operands: &'static [Role]) -> InstructionEntry {
    InstructionEntry { mnemonic, operands }
}

/// Sorted by mnemonic.
pub static INSTRUCTION_TABLE: &[InstructionEntry] = &[
    entry("ADD", &[Var, Symb, Symb]),
    entry("AND", &[Var, Symb, Symb]),
    entry("BREAK", &[]),
    entry("CALL", &[Label]),
    entry("CONCAT", &[Var, Symb, Symb]),
    entry("CREATEFRAME", &[]),
    entry("DEFVAR", &[Var]),
    entry("DPRINT", &[Symb]),
    entry("EQ", &[Var, Symb, Symb]),
    entry("GETCHAR", &[Var, Symb, Symb]),
    entry("GT", &[Var, Symb, Symb]),
    entry("IDIV", &[Var, Symb, Symb]),
    entry("INT2CHAR", &[Var, Symb]),
    entry("JUMP", &[Label]),
    entry("JUMPIFEQ", &[Label, Symb, Symb]),
    entry("JUMPIFNEQ", &[Label, Symb, Symb]),
    entry("LABEL", &[Label]),
    entry("LT", &[Var, Symb, Symb]),
    entry("MOVE", &[Var, Symb]),
    entry("MUL", &[Var, Symb, Symb]),
    entry("NOT", &[Var, Symb]),
    entry("OR", &[Var, Symb, Symb]),
    entry("POPFRAME", &[]),
    entry("POPS", &[Var]),
    entry("PUSHFRAME", &[]),
    entry("PUSHS", &[Symb]),
    entry("READ", &[Var, Type]),
    entry("RETURN", &[]),
    entry("SETCHAR", &[Var, Symb, Symb]),
    entry("STRI2INT", &[Var, Symb, Symb]),
    entry("STRLEN", &[Var, Symb]),
    entry("SUB", &[Var, Symb, Symb]),
    entry("TYPE", &[Var, Symb]),
    entry("WRITE", &[Symb]),
];

/// Operand roles for an upper-case mnemonic.
pub fn signature(mnemonic: &str) -> Option<&'static [Role]> {
    INSTRUCTION_TABLE
        .binary_search_by(|e| e.mnemonic.cmp(mnemonic))
        .ok()
        .map(|i| INSTRUCTION_TABLE[i].operands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_table_is_sorted_by_mnemonic() {
        for pair in INSTRUCTION_TABLE.windows(2) {
            assert!(
                pair[0].mnemonic < pair[1].mnemonic,
                "instruction table out of order: {} before {}",
                pair[0].mnemonic,
                pair[1].mnemonic
            );
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(signature("MOVE"), Some(&[Var, Symb][..]));
        assert_eq!(signature("JUMPIFEQ"), Some(&[Label, Symb, Symb][..]));
        assert_eq!(signature("READ"), Some(&[Var, Type][..]));
        assert_eq!(signature("BREAK"), Some(&[][..]));
        assert_eq!(signature("move"), None);
        assert_eq!(signature("FOO"), None);
    }
}
