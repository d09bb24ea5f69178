//! Stack-machine execution of compiled assembly.
//!
//! `PUSH` resolves its operand at the moment it executes, so running the same
//! [`Assembly`] after rebinding a symbol reflects the new value. Operators pop
//! the right operand first, then the left, and push `left op right`.

use tracing::{debug, trace};

use super::Assembly;
use super::instruction::Instruction;
use crate::ExprError;

impl Assembly {
    /// Run the program on a fresh stack and return the single remaining value.
    ///
    /// # Errors
    ///
    /// `UnboundSymbol` if a pushed symbol has no value at execution time.
    ///
    /// # Example
    ///
    /// ```
    /// use symb_stack::sym;
    ///
    /// let a = sym("a");
    /// let program = (3 + &a).compile().unwrap();
    ///
    /// a.set_value(0.5);
    /// assert_eq!(program.evaluate().unwrap(), 3.5);
    /// a.set_value(4);
    /// assert_eq!(program.evaluate().unwrap(), 7.0);
    /// ```
    pub fn evaluate(&self) -> Result<f64, ExprError> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.stack_size);
        self.evaluate_with_stack(&mut stack)
    }

    /// Run the program using an existing stack buffer (avoids allocation).
    ///
    /// The buffer is cleared before use.
    ///
    /// # Errors
    ///
    /// See [`Assembly::evaluate`].
    pub fn evaluate_with_stack(&self, stack: &mut Vec<f64>) -> Result<f64, ExprError> {
        stack.clear();

        for (index, instr) in self.instructions.iter().enumerate() {
            match instr {
                Instruction::PushSymbol(s) => stack.push(s.resolve()?),
                Instruction::PushConst(n) => stack.push(*n),
                Instruction::Add | Instruction::Sub | Instruction::Mult => {
                    let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                        return Err(ExprError::StackUnderflow { index });
                    };
                    let op = instr
                        .operator()
                        .ok_or_else(|| ExprError::UnrecognizedOperator {
                            op: instr.mnemonic().to_owned(),
                        })?;
                    stack.push(op.apply(left, right));
                }
            }
            trace!(index, instruction = %instr, stack = ?stack, "step");
        }

        match stack.as_slice() {
            [result] => {
                debug!(result, "assembly evaluated");
                Ok(*result)
            }
            other => Err(ExprError::UnbalancedProgram { depth: other.len() }),
        }
    }
}
