#![allow(
    clippy::unwrap_used,
    clippy::print_stdout,
    reason = "Essential for examples: unwrap for simplicity, stdout for demonstration"
)]
//! Stack Machine Walkthrough
//!
//! Builds the classic expressions, prints their infix form and assembly,
//! then evaluates them through both paths while rebinding symbols.
//!
//! Run with: `RUST_LOG=symb_stack=trace cargo run --example stack_machine`

use symb_stack::{Expr, scalar, sym};
use tracing_subscriber::EnvFilter;

fn show(label: &str, expr: &Expr) {
    println!("=== {label} ===");
    println!("Expression: {expr}");
    print!("{}", expr.assembly().unwrap());
    match (expr.evaluate(), expr.compile().unwrap().evaluate()) {
        (Ok(direct), Ok(stacked)) => println!("Direct: {direct}  Stack: {stacked}"),
        (Err(e), _) | (_, Err(e)) => println!("Error: {e}"),
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let a = sym("a");
    let b = sym("b");
    let c = sym("c");

    let z = (&a + &b) * &c + 7;
    show("Unbound", &z);

    a.set_value(1);
    b.set_value(2);
    c.set_value(3);
    show("a=1 b=2 c=3", &z);

    let z = (&a * &b + (&a + &b + &a)) * (&a - 3);
    a.set_value(0.5);
    b.set_value(1.5);
    show("a=0.5 b=1.5", &z);

    let z = scalar(3) + &a;
    show("Scalar plus a=0.5", &z);
    a.set_value(4);
    show("Same expression, a=4", &z);
}
