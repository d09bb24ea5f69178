//! Expression compiler for the stack machine.
//!
//! Compiles an [`Expr`] tree into a flat list of [`Instruction`]s by
//! post-order traversal: left operand, right operand, then the node's
//! operator. The tree shape already encodes evaluation order, so no
//! precedence handling happens here.
//!
//! # Stack Depth Tracking
//!
//! The compiler tracks stack depth while emitting so the resulting
//! [`Assembly`](super::Assembly) can pre-allocate the exact stack it needs.

use tracing::trace;

use super::instruction::Instruction;
use crate::{Expr, ExprError, Operand};

/// Internal compiler state for transforming expressions to instructions
pub struct Compiler {
    /// Emitted instructions
    instructions: Vec<Instruction>,
    /// Current stack depth during compilation
    current_stack: usize,
    /// Maximum stack depth seen during compilation
    max_stack: usize,
    /// Deepest expression nesting accepted, if limited
    max_depth: Option<usize>,
}

impl Compiler {
    /// Create a compiler; `Some(n)` rejects trees nested deeper than `n` nodes.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            instructions: Vec::with_capacity(16),
            current_stack: 0,
            max_stack: 0,
            max_depth,
        }
    }

    #[inline]
    fn push(&mut self) {
        self.current_stack += 1;
        self.max_stack = self.max_stack.max(self.current_stack);
    }

    /// Two operands -> one result
    #[inline]
    fn pop(&mut self) {
        self.current_stack = self.current_stack.saturating_sub(1);
    }

    #[inline]
    fn emit(&mut self, instr: Instruction) {
        trace!(instruction = %instr, depth = self.current_stack, "emit");
        self.instructions.push(instr);
    }

    /// Emit instructions for `expr`, which sits at nesting level `depth` (root = 1).
    ///
    /// # Errors
    ///
    /// `MaxDepthExceeded` if a limit is set and the tree nests deeper than it.
    pub fn compile_expr(&mut self, expr: &Expr, depth: usize) -> Result<(), ExprError> {
        if let Some(limit) = self.max_depth.filter(|&limit| depth > limit) {
            return Err(ExprError::MaxDepthExceeded { limit });
        }

        for operand in expr.operands() {
            self.compile_operand(operand, depth)?;
        }
        self.emit(Instruction::from(expr.op()));
        self.pop();
        Ok(())
    }

    fn compile_operand(&mut self, operand: &Operand, depth: usize) -> Result<(), ExprError> {
        match operand {
            Operand::Expr(inner) => self.compile_expr(inner, depth + 1)?,
            Operand::Symbol(s) => {
                self.emit(Instruction::PushSymbol(s.clone()));
                self.push();
            }
            Operand::Number(n) => {
                self.emit(Instruction::PushConst(*n));
                self.push();
            }
        }
        Ok(())
    }

    /// Consume the compiler and return the instructions and required stack size
    pub(crate) fn into_parts(self) -> (Vec<Instruction>, usize) {
        (self.instructions, self.max_stack)
    }

    #[cfg(test)]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[cfg(test)]
    pub const fn max_stack(&self) -> usize {
        self.max_stack
    }
}
