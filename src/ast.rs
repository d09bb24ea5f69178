//! Expression tree for arithmetic over shared symbols

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::{ExprError, Symbol};

/// Binary operators an expression node can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    /// Source notation of the operator (`+`, `-`, `*`)
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
        }
    }

    /// Stack-machine mnemonic (`ADD`, `SUB`, `MULT`)
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mul => "MULT",
        }
    }

    /// Combine two values, `left` first
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
        }
    }

    /// Binding strength for infix display (higher binds tighter)
    pub(crate) const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul => 2,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = ExprError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            other => Err(ExprError::InvalidOperator {
                op: other.to_string(),
            }),
        }
    }
}

impl FromStr for Operator {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::try_from(c),
            _ => Err(ExprError::InvalidOperator { op: s.to_owned() }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Child of an expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Shared leaf, read at evaluation time
    Symbol(Symbol),
    /// Nested binary operation
    Expr(Rc<Expr>),
    /// Raw numeric literal
    Number(f64),
}

impl Operand {
    /// Convert a dynamically typed value into an operand.
    ///
    /// Accepts `Symbol`, `Expr`, `Operand` and the primitive integer and float
    /// types (`i128`/`u128` excluded). 64-bit and pointer-sized integers round
    /// to the nearest `f64`. Anything else fails with `InvalidOperand` carrying
    /// the Rust type name.
    #[allow(
        clippy::cast_precision_loss,
        reason = "64-bit integers above 2^53 round like any other float literal"
    )]
    pub fn try_from_any<T: Any>(value: T) -> Result<Self, ExprError> {
        let any: &dyn Any = &value;

        if let Some(s) = any.downcast_ref::<Symbol>() {
            return Ok(Operand::Symbol(s.clone()));
        }
        if let Some(e) = any.downcast_ref::<Expr>() {
            return Ok(Operand::from(e));
        }
        if let Some(e) = any.downcast_ref::<Rc<Expr>>() {
            return Ok(Operand::Expr(Rc::clone(e)));
        }
        if let Some(o) = any.downcast_ref::<Operand>() {
            return Ok(o.clone());
        }
        if let Some(n) = any.downcast_ref::<f64>() {
            return Ok(Operand::Number(*n));
        }

        macro_rules! numeric {
            (lossless: $($t:ty),*) => {
                $(
                    if let Some(n) = any.downcast_ref::<$t>() {
                        return Ok(Operand::Number(f64::from(*n)));
                    }
                )*
            };
            (rounded: $($t:ty),*) => {
                $(
                    if let Some(n) = any.downcast_ref::<$t>() {
                        return Ok(Operand::Number(*n as f64));
                    }
                )*
            };
        }
        numeric!(lossless: f32, i8, i16, i32, u8, u16, u32);
        numeric!(rounded: i64, u64, isize, usize);

        Err(ExprError::invalid_operand::<T>())
    }

    /// Nested expression, if this operand is one
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Operand::Expr(e) => Some(e),
            _ => None,
        }
    }

    /// Symbol handle, if this operand is one
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Operand::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

/// Binary expression node
///
/// The shape (operator and both operands) never changes after construction;
/// only values reachable through contained symbols do.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    op: Operator,
    left: Operand,
    right: Operand,
}

impl Expr {
    /// Create a node from an operator and two operands, in written order
    pub fn new(op: Operator, left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Expr {
            op,
            left: left.into(),
            right: right.into(),
        }
    }

    /// Build a node from an operator tag and dynamically typed operands.
    ///
    /// # Errors
    ///
    /// `InvalidOperator` if `op` is not exactly one of `+`, `-`, `*`;
    /// `InvalidOperand` if either operand is not a Symbol, Expr or number.
    ///
    /// This accepts a wider set of numeric types than the operator overloads,
    /// which take `f64` and `i32` only; see [`Operand::try_from_any`].
    ///
    /// # Example
    /// ```
    /// use symb_stack::{sym, Expr, ExprError};
    ///
    /// let a = sym("a");
    /// let ok = Expr::try_build("-", a.clone(), 3);
    /// assert!(ok.is_ok());
    ///
    /// let bad = Expr::try_build("+", a, "b");
    /// assert!(matches!(bad, Err(ExprError::InvalidOperand { .. })));
    /// ```
    pub fn try_build<L: Any, R: Any>(op: &str, left: L, right: R) -> Result<Self, ExprError> {
        let op: Operator = op.parse()?;
        let left = Operand::try_from_any(left)?;
        let right = Operand::try_from_any(right)?;
        Ok(Expr::new(op, left, right))
    }

    #[inline]
    pub const fn op(&self) -> Operator {
        self.op
    }

    #[inline]
    pub const fn left(&self) -> &Operand {
        &self.left
    }

    #[inline]
    pub const fn right(&self) -> &Operand {
        &self.right
    }

    /// Both operands in written order
    #[inline]
    pub const fn operands(&self) -> [&Operand; 2] {
        [&self.left, &self.right]
    }
}
