//! Direct recursive evaluation over the expression tree.
//!
//! Produces the same numbers as running the compiled assembly, without
//! materialising an instruction list. Symbols are re-read on every call.

use tracing::debug;

use crate::{Expr, ExprError, Operand};

impl Operand {
    /// Resolve this operand to a number using current symbol bindings.
    ///
    /// # Errors
    ///
    /// `UnboundSymbol` if a named symbol without a value is reached.
    pub fn evaluate(&self) -> Result<f64, ExprError> {
        match self {
            Operand::Number(n) => Ok(*n),
            Operand::Symbol(s) => s.resolve(),
            Operand::Expr(e) => e.eval_node(),
        }
    }
}

impl Expr {
    /// Evaluate the expression with the values symbols hold right now.
    ///
    /// # Errors
    ///
    /// `UnboundSymbol` naming the first unbound symbol reached, left to right.
    ///
    /// # Example
    /// ```
    /// use symb_stack::sym;
    ///
    /// let a = sym("a");
    /// let b = sym("b");
    /// let c = sym("c");
    /// let z = (&a + &b) * &c + 7;
    ///
    /// a.set_value(1);
    /// b.set_value(2);
    /// c.set_value(3);
    /// assert_eq!(z.evaluate().unwrap(), 16.0);
    /// ```
    pub fn evaluate(&self) -> Result<f64, ExprError> {
        let result = self.eval_node()?;
        debug!(result, "expression evaluated");
        Ok(result)
    }

    fn eval_node(&self) -> Result<f64, ExprError> {
        let left = self.left().evaluate()?;
        let right = self.right().evaluate()?;
        Ok(self.op().apply(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sym;

    #[test]
    fn test_nested_expression() {
        let a = sym("a");
        let b = sym("b");
        let z = (&a * &b + (&a + &b + &a)) * (&a - 3);
        a.set_value(0.5);
        b.set_value(1.5);
        assert_eq!(z.evaluate(), Ok(-8.125));
    }

    #[test]
    fn test_liveness_after_rebinding() {
        let a = sym("a");
        let z = 3 + &a;
        a.set_value(0.5);
        assert_eq!(z.evaluate(), Ok(3.5));
        a.set_value(4);
        assert_eq!(z.evaluate(), Ok(7.0));
    }

    #[test]
    fn test_unbound_reports_first_symbol_left_to_right() {
        let a = sym("a");
        let b = sym("b");
        let z = (&a + 1) * &b;
        assert_eq!(z.evaluate(), Err(ExprError::unbound("a")));
        a.set_value(1);
        assert_eq!(z.evaluate(), Err(ExprError::unbound("b")));
    }

    #[test]
    fn test_operand_evaluate() {
        assert_eq!(Operand::Number(2.5).evaluate(), Ok(2.5));
        let a = sym("a");
        a.set_value(-1);
        assert_eq!(Operand::from(&a).evaluate(), Ok(-1.0));
    }
}
