//! Shared symbols and operator overloading for ergonomic expression building
//!
//! # Example
//! ```
//! use symb_stack::sym;
//!
//! let a = sym("a");
//! let b = sym("b");
//! let expr = (&a + &b) * 2;
//!
//! a.set_value(1.0);
//! b.set_value(2.0);
//! assert_eq!(expr.evaluate().unwrap(), 6.0);
//! ```

use std::cell::Cell;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::rc::Rc;

use crate::{Expr, Operand, Operator};

/// Leaf value of an expression tree
///
/// A `Symbol` is a cheap handle onto a single shared slot. Cloning the handle
/// (or passing `&symbol` into an operator) never copies the slot, so every
/// expression built from the same symbol observes every later `set_value`.
#[derive(Clone)]
pub struct Symbol(Rc<Slot>);

struct Slot {
    name: Option<Rc<str>>,
    value: Cell<Option<f64>>,
}

impl Symbol {
    /// Create a named symbol with no bound value
    pub fn new(name: impl Into<Rc<str>>) -> Self {
        Symbol(Rc::new(Slot {
            name: Some(name.into()),
            value: Cell::new(None),
        }))
    }

    /// Create an anonymous symbol holding a numeric value
    ///
    /// Takes any type with a lossless conversion to `f64`. 64-bit integers
    /// need an explicit `as f64`, while [`Expr::try_build`] rounds them itself.
    pub fn scalar(value: impl Into<f64>) -> Self {
        Symbol(Rc::new(Slot {
            name: None,
            value: Cell::new(Some(value.into())),
        }))
    }

    /// Get the name of the symbol (None for scalar symbols)
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// Current bound value, read at call time
    pub fn value(&self) -> Option<f64> {
        self.0.value.get()
    }

    /// Bind (or rebind) the value of this symbol.
    ///
    /// Every expression referencing this symbol sees the new value on its
    /// next evaluation. Scalar symbols accept rebinding as well; their
    /// rendered assembly then shows the new value.
    pub fn set_value(&self, value: impl Into<f64>) {
        self.0.value.set(Some(value.into()));
    }

    /// Remove the bound value, leaving the symbol unbound
    pub fn clear_value(&self) {
        self.0.value.set(None);
    }

    pub fn is_named(&self) -> bool {
        self.0.name.is_some()
    }

    pub fn is_bound(&self) -> bool {
        self.0.value.get().is_some()
    }

    /// Check whether two handles share the same slot
    pub fn ptr_eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared slot, stable for the symbol's lifetime
    pub(crate) fn identity(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Value of the symbol, or `UnboundSymbol` naming it
    pub(crate) fn resolve(&self) -> Result<f64, crate::ExprError> {
        self.value()
            .ok_or_else(|| crate::ExprError::unbound(self.name().unwrap_or("<scalar>")))
    }
}

// Identity, not content: two distinct symbols named "a" are different leaves
impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

/// Named symbols render as their name, scalars as their current value
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self.value()) {
            (Some(name), _) => write!(f, "{name}"),
            (None, Some(value)) => write!(f, "{value}"),
            (None, None) => write!(f, "<unbound>"),
        }
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::new(name)
    }
}

// ===== Operand conversions =====

impl From<Symbol> for Operand {
    fn from(s: Symbol) -> Self {
        Operand::Symbol(s)
    }
}

impl From<&Symbol> for Operand {
    fn from(s: &Symbol) -> Self {
        Operand::Symbol(s.clone())
    }
}

impl From<Expr> for Operand {
    fn from(e: Expr) -> Self {
        Operand::Expr(Rc::new(e))
    }
}

impl From<&Expr> for Operand {
    fn from(e: &Expr) -> Self {
        Operand::Expr(Rc::new(e.clone()))
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Number(f64::from(n))
    }
}

// ===== Macro for generating operator implementations =====
// Every impl keeps the written order: `3 - a` is SUB(3, a), never SUB(a, 3).
// Number operands are `f64` and `i32`; other widths go through `Expr::try_build`.

macro_rules! impl_binary_ops {
    (@op $lhs:ty, $rhs:ty, $trait:ident, $method:ident, $op:expr) => {
        impl $trait<$rhs> for $lhs {
            type Output = Expr;
            fn $method(self, rhs: $rhs) -> Expr {
                Expr::new($op, Operand::from(self), Operand::from(rhs))
            }
        }
    };
    ($lhs:ty => $($rhs:ty),+ $(,)?) => {
        $(
            impl_binary_ops!(@op $lhs, $rhs, Add, add, Operator::Add);
            impl_binary_ops!(@op $lhs, $rhs, Sub, sub, Operator::Sub);
            impl_binary_ops!(@op $lhs, $rhs, Mul, mul, Operator::Mul);
        )+
    };
}

// Symbol on the left
impl_binary_ops!(Symbol => Symbol, &Symbol, Expr, &Expr, f64, i32);
impl_binary_ops!(&Symbol => Symbol, &Symbol, Expr, &Expr, f64, i32);

// Expr on the left
impl_binary_ops!(Expr => Symbol, &Symbol, Expr, &Expr, f64, i32);
impl_binary_ops!(&Expr => Symbol, &Symbol, Expr, &Expr, f64, i32);

// Numbers on the left
impl_binary_ops!(f64 => Symbol, &Symbol, Expr, &Expr);
impl_binary_ops!(i32 => Symbol, &Symbol, Expr, &Expr);

/// Convenience function to create a named Symbol
pub fn sym(name: &str) -> Symbol {
    Symbol::new(name)
}

/// Convenience function to create a scalar Symbol
pub fn scalar(value: impl Into<f64>) -> Symbol {
    Symbol::scalar(value)
}
