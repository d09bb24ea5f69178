//! Builder pattern API for compilation
//!
//! Provides a fluent interface for configuring limits before compiling an
//! expression to assembly.
//!
//! # Example
//! ```
//! use symb_stack::{sym, Assembler};
//!
//! let a = sym("a");
//! let expr = (&a + 1) * &a;
//!
//! let program = Assembler::new()
//!     .max_depth(8)
//!     .max_nodes(64)
//!     .assemble(&expr)
//!     .unwrap();
//! assert_eq!(program.instruction_count(), 5);
//! ```

use tracing::debug;

use crate::evaluator::{Assembly, Compiler};
use crate::visitor::{NodeCounter, walk_expr};
use crate::{Expr, ExprError};

/// Builder for compiling expressions with explicit limits
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    max_depth: Option<usize>,
    max_nodes: Option<usize>,
}

impl Assembler {
    /// Create a new assembler with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum expression nesting depth (unlimited unless set)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set maximum node count (unlimited unless set)
    pub fn max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    /// Compile `expr` into assembly.
    ///
    /// # Errors
    ///
    /// - `MaxNodesExceeded`: the tree has more nodes than `max_nodes`
    /// - `MaxDepthExceeded`: the tree nests deeper than `max_depth`
    pub fn assemble(&self, expr: &Expr) -> Result<Assembly, ExprError> {
        if let Some(limit) = self.max_nodes {
            let mut counter = NodeCounter::default();
            walk_expr(expr, &mut counter);
            if counter.count > limit {
                return Err(ExprError::MaxNodesExceeded { limit });
            }
        }

        let mut compiler = Compiler::new(self.max_depth);
        compiler.compile_expr(expr, 1)?;
        let (instructions, stack_size) = compiler.into_parts();

        debug!(
            instructions = instructions.len(),
            stack_size, "compiled expression"
        );
        Ok(Assembly::from_parts(instructions, stack_size))
    }
}
