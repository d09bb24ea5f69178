//! Compilation to stack-machine assembly and evaluation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌────────────┐    ┌──────────────────┐
//! │    Expr     │ -> │  Compiler  │ -> │     Assembly     │
//! │   (Tree)    │    │ (post-ord) │    │ (Stack Machine)  │
//! └─────────────┘    └────────────┘    └──────────────────┘
//!        │                                      │
//!        ▼                                      ▼
//!  ┌────────────┐                        ┌────────────┐
//!  │  evaluate  │   ==  same result  ==  │  evaluate  │
//!  │  (direct)  │                        │  (stack)   │
//!  └────────────┘                        └────────────┘
//! ```
//!
//! # Modules
//!
//! - [`instruction`]: Instruction definitions and mnemonics
//! - [`compiler`]: Expression-to-instruction compilation
//! - [`execution`]: Stack-machine execution
//! - [`direct`]: Recursive tree evaluation

mod compiler;
mod direct;
mod execution;
mod instruction;

pub use compiler::Compiler;
pub use instruction::Instruction;

use std::fmt;

use crate::{Assembler, Expr, ExprError};

/// A compiled, re-runnable stack-machine program
///
/// Holds symbol handles rather than values, so the same `Assembly` can be
/// evaluated again after symbols are rebound.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// Instructions in execution order
    instructions: Box<[Instruction]>,
    /// Required stack depth for evaluation
    stack_size: usize,
}

impl Assembly {
    /// Wrap compiler output; the compiler guarantees the program is balanced.
    pub(crate) fn from_parts(instructions: Vec<Instruction>, stack_size: usize) -> Self {
        Self {
            instructions: instructions.into_boxed_slice(),
            stack_size,
        }
    }

    /// Build a program from hand-written instructions.
    ///
    /// # Errors
    ///
    /// - `StackUnderflow`: an operator runs with fewer than two values on the stack
    /// - `UnbalancedProgram`: the program does not finish with exactly one value
    ///
    /// # Example
    /// ```
    /// use symb_stack::{Assembly, Instruction};
    ///
    /// let program = Assembly::from_instructions(vec![
    ///     Instruction::PushConst(2.0),
    ///     Instruction::PushConst(5.0),
    ///     Instruction::Sub,
    /// ])
    /// .unwrap();
    /// assert_eq!(program.evaluate().unwrap(), -3.0);
    /// ```
    pub fn from_instructions(instructions: Vec<Instruction>) -> Result<Self, ExprError> {
        let mut depth: usize = 0;
        let mut max_depth: usize = 0;

        for (index, instr) in instructions.iter().enumerate() {
            if instr.operator().is_some() && depth < 2 {
                return Err(ExprError::StackUnderflow { index });
            }
            depth = depth
                .checked_add_signed(instr.stack_effect())
                .ok_or(ExprError::StackUnderflow { index })?;
            max_depth = max_depth.max(depth);
        }

        if depth != 1 {
            return Err(ExprError::UnbalancedProgram { depth });
        }
        Ok(Self::from_parts(instructions, max_depth))
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the required stack size for this program
    pub fn stack_size(&self) -> usize {
        self.stack_size
    }

    /// Get number of instructions (for debugging/profiling)
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }
}

/// One instruction per line, each line terminated by `\n`
impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}

impl Expr {
    /// Compile into stack-machine assembly without size or depth limits.
    ///
    /// Use [`Assembler`] to opt into limits.
    ///
    /// # Errors
    ///
    /// None without limits; the `Result` matches [`Assembler::assemble`].
    pub fn compile(&self) -> Result<Assembly, ExprError> {
        Assembler::new().assemble(self)
    }

    /// Text rendering of the compiled program, one instruction per line.
    ///
    /// # Errors
    ///
    /// See [`Expr::compile`].
    ///
    /// # Example
    /// ```
    /// use symb_stack::{scalar, sym};
    ///
    /// let a = sym("a");
    /// let z = scalar(3) + &a;
    /// assert_eq!(z.assembly().unwrap(), "PUSH 3\nPUSH a\nADD\n");
    /// ```
    pub fn assembly(&self) -> Result<String, ExprError> {
        Ok(self.compile()?.to_string())
    }
}
