//! Stack-machine instruction definitions.

use std::fmt;

use crate::{ExprError, Operator, Symbol};

/// One stack-machine opcode
///
/// `PushSymbol` keeps the shared symbol handle rather than a copied value, so a
/// compiled program reads the symbol's binding at the moment it runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Push the current value of a symbol
    PushSymbol(Symbol),
    /// Push a numeric literal
    PushConst(f64),
    /// Pop `b`, pop `a`, push `a + b`
    Add,
    /// Pop `b`, pop `a`, push `a - b`
    Sub,
    /// Pop `b`, pop `a`, push `a * b`
    Mult,
}

impl Instruction {
    /// Parse an operator mnemonic (`ADD`, `SUB`, `MULT`)
    ///
    /// # Errors
    ///
    /// `UnrecognizedOperator` for any other text.
    pub fn from_mnemonic(mnemonic: &str) -> Result<Self, ExprError> {
        match mnemonic {
            "ADD" => Ok(Instruction::Add),
            "SUB" => Ok(Instruction::Sub),
            "MULT" => Ok(Instruction::Mult),
            other => Err(ExprError::UnrecognizedOperator {
                op: other.to_owned(),
            }),
        }
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::PushSymbol(_) | Instruction::PushConst(_) => "PUSH",
            Instruction::Add => "ADD",
            Instruction::Sub => "SUB",
            Instruction::Mult => "MULT",
        }
    }

    /// The arithmetic operator this instruction applies, if any
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Instruction::Add => Some(Operator::Add),
            Instruction::Sub => Some(Operator::Sub),
            Instruction::Mult => Some(Operator::Mul),
            Instruction::PushSymbol(_) | Instruction::PushConst(_) => None,
        }
    }

    /// Net change in stack depth after executing this instruction
    pub(crate) const fn stack_effect(&self) -> isize {
        match self {
            Instruction::PushSymbol(_) | Instruction::PushConst(_) => 1,
            Instruction::Add | Instruction::Sub | Instruction::Mult => -1,
        }
    }
}

impl From<Operator> for Instruction {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Instruction::Add,
            Operator::Sub => Instruction::Sub,
            Operator::Mul => Instruction::Mult,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushSymbol(s) => write!(f, "PUSH {s}"),
            Instruction::PushConst(n) => write!(f, "PUSH {n}"),
            op => write!(f, "{}", op.mnemonic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scalar, sym};

    #[test]
    fn test_display() {
        assert_eq!(Instruction::PushSymbol(sym("a")).to_string(), "PUSH a");
        assert_eq!(Instruction::PushSymbol(scalar(3)).to_string(), "PUSH 3");
        assert_eq!(Instruction::PushConst(7.0).to_string(), "PUSH 7");
        assert_eq!(Instruction::PushConst(0.5).to_string(), "PUSH 0.5");
        assert_eq!(Instruction::Add.to_string(), "ADD");
        assert_eq!(Instruction::Sub.to_string(), "SUB");
        assert_eq!(Instruction::Mult.to_string(), "MULT");
    }

    #[test]
    fn test_mnemonic_round_trip() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul] {
            let instr = Instruction::from(op);
            assert_eq!(instr.mnemonic(), op.mnemonic());
            assert_eq!(Instruction::from_mnemonic(op.mnemonic()), Ok(instr.clone()));
            assert_eq!(instr.operator(), Some(op));
        }
    }

    #[test]
    fn test_unrecognized_mnemonic() {
        assert_eq!(
            Instruction::from_mnemonic("DIV"),
            Err(ExprError::UnrecognizedOperator {
                op: "DIV".to_owned()
            })
        );
        // PUSH carries an operand and is not an operator mnemonic
        assert!(Instruction::from_mnemonic("PUSH").is_err());
    }
}
