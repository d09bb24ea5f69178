// Display formatting for expression trees
use std::fmt;

use crate::{Expr, Operand, Operator};

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Symbol(s) => write!(f, "{s}"),
            Operand::Expr(e) => write!(f, "{e}"),
        }
    }
}

/// Infix rendering with the minimal parentheses that preserve the tree shape.
///
/// `(a + b) * c + 7` prints exactly that; `a - (b - c)` keeps its grouping
/// because subtraction does not associate to the right.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.op().precedence();

        // Left child only needs parentheses when it binds looser
        match self.left() {
            Operand::Expr(l) if l.op().precedence() < prec => write!(f, "({l})")?,
            left => write!(f, "{left}")?,
        }

        write!(f, " {} ", self.op())?;

        // Right child also needs them at equal precedence, except for `+`/`*`
        // over the same operator where regrouping is value-preserving
        match self.right() {
            Operand::Expr(r)
                if r.op().precedence() < prec
                    || (r.op().precedence() == prec
                        && (r.op() != self.op() || self.op() == Operator::Sub)) =>
            {
                write!(f, "({r})")
            }
            Operand::Number(n) if *n < 0.0 => write!(f, "({n})"),
            Operand::Symbol(s) if !s.is_named() && s.value().is_some_and(|v| v < 0.0) => {
                write!(f, "({s})")
            }
            right => write!(f, "{right}"),
        }
    }
}
