//! Symbolic Stack-Machine Expressions
//!
//! Build arithmetic expressions out of shared symbols and numbers with
//! ordinary Rust operators, compile them to stack-machine assembly, and
//! evaluate them against the values the symbols hold at that moment.
//!
//! # Features
//! - **Operator overloading** builds the tree: Rust's own precedence decides its shape
//! - **Live symbols**: rebinding a symbol changes every expression that uses it
//! - **Post-order compilation** to `PUSH` / `ADD` / `SUB` / `MULT` assembly
//! - **Two evaluation paths** (direct recursion and stack machine) that always agree
//!
//! # Usage Examples
//!
//! ```
//! use symb_stack::sym;
//!
//! let a = sym("a");
//! let b = sym("b");
//! let c = sym("c");
//!
//! let z = (&a + &b) * &c + 7;
//! assert_eq!(
//!     z.assembly().unwrap(),
//!     "PUSH a\nPUSH b\nADD\nPUSH c\nMULT\nPUSH 7\nADD\n"
//! );
//!
//! a.set_value(1);
//! b.set_value(2);
//! c.set_value(3);
//! assert_eq!(z.evaluate().unwrap(), 16.0);
//! assert_eq!(z.compile().unwrap().evaluate().unwrap(), 16.0);
//! ```
//!
//! ## Dynamic construction
//! ```
//! use symb_stack::{sym, Expr, ExprError};
//!
//! let a = sym("a");
//! let e = Expr::try_build("*", a, 2.5).unwrap();
//! assert_eq!(e.to_string(), "a * 2.5");
//!
//! assert!(matches!(
//!     Expr::try_build("/", 1, 2),
//!     Err(ExprError::InvalidOperator { .. })
//! ));
//! ```

mod ast;
mod builder;
mod display;
mod error;
mod evaluator;
mod symbol;
pub mod visitor;


// Re-export key types for easier usage
pub use ast::{Expr, Operand, Operator};
pub use builder::Assembler;
pub use error::ExprError;
pub use evaluator::{Assembly, Instruction};
pub use symbol::{Symbol, scalar, sym};
