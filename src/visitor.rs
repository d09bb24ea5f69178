//! Expression visitor pattern for tree traversal
//!
//! Provides a clean interface for walking the expression tree without
//! manually handling the recursive operand structure.

use rustc_hash::FxHashSet;

use crate::{Expr, Operand, Operator, Symbol};

/// Trait for visiting expression nodes
///
/// Each method returns a boolean indicating whether to continue visiting children.
///
/// # Example
/// ```
/// use symb_stack::{sym, Expr, Operator, Symbol};
/// use symb_stack::visitor::{ExprVisitor, walk_expr};
///
/// struct Subtractions(usize);
///
/// impl ExprVisitor for Subtractions {
///     fn visit_number(&mut self, _n: f64) -> bool { true }
///     fn visit_symbol(&mut self, _s: &Symbol) -> bool { true }
///     fn visit_binary(&mut self, op: Operator, _expr: &Expr) -> bool {
///         if op == Operator::Sub { self.0 += 1; }
///         true
///     }
/// }
///
/// let a = sym("a");
/// let expr = (&a - 1) * (&a - 2);
/// let mut v = Subtractions(0);
/// walk_expr(&expr, &mut v);
/// assert_eq!(v.0, 2);
/// ```
pub trait ExprVisitor {
    /// Visit a number literal, returns true to continue visiting
    fn visit_number(&mut self, n: f64) -> bool;

    /// Visit a symbol leaf, returns true to continue visiting
    fn visit_symbol(&mut self, symbol: &Symbol) -> bool;

    /// Visit a binary operation node, returns true to visit operands
    fn visit_binary(&mut self, op: Operator, expr: &Expr) -> bool;
}

/// Walk an expression tree with a visitor
///
/// Visits nodes in pre-order (parent before children, left before right).
pub fn walk_expr<V: ExprVisitor>(expr: &Expr, visitor: &mut V) {
    if visitor.visit_binary(expr.op(), expr) {
        for operand in expr.operands() {
            walk_operand(operand, visitor);
        }
    }
}

fn walk_operand<V: ExprVisitor>(operand: &Operand, visitor: &mut V) {
    match operand {
        Operand::Number(n) => {
            visitor.visit_number(*n);
        }
        Operand::Symbol(s) => {
            visitor.visit_symbol(s);
        }
        Operand::Expr(e) => walk_expr(e, visitor),
    }
}

/// A simple visitor that counts nodes
#[derive(Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl ExprVisitor for NodeCounter {
    fn visit_number(&mut self, _n: f64) -> bool {
        self.count += 1;
        true
    }

    fn visit_symbol(&mut self, _symbol: &Symbol) -> bool {
        self.count += 1;
        true
    }

    fn visit_binary(&mut self, _op: Operator, _expr: &Expr) -> bool {
        self.count += 1;
        true
    }
}

/// A visitor that collects each distinct named symbol once, in first-seen order
///
/// Distinctness is by identity: two separate symbols that share a name are
/// both collected.
#[derive(Default)]
pub struct SymbolCollector {
    pub symbols: Vec<Symbol>,
    seen: FxHashSet<*const ()>,
}

impl ExprVisitor for SymbolCollector {
    fn visit_number(&mut self, _n: f64) -> bool {
        true
    }

    fn visit_symbol(&mut self, symbol: &Symbol) -> bool {
        if symbol.is_named() && self.seen.insert(symbol.identity()) {
            self.symbols.push(symbol.clone());
        }
        true
    }

    fn visit_binary(&mut self, _op: Operator, _expr: &Expr) -> bool {
        true
    }
}

impl Expr {
    /// Number of nodes in the tree (operators and leaves)
    pub fn node_count(&self) -> usize {
        let mut counter = NodeCounter::default();
        walk_expr(self, &mut counter);
        counter.count
    }

    /// Nesting depth counted in operator nodes (a single node has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .operands()
            .into_iter()
            .filter_map(Operand::as_expr)
            .map(Expr::depth)
            .max()
            .unwrap_or(0)
    }

    /// Distinct named symbols referenced by the tree, in first-seen order
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut collector = SymbolCollector::default();
        walk_expr(self, &mut collector);
        collector.symbols
    }

    /// Named symbols that currently have no value
    pub fn unbound_symbols(&self) -> Vec<Symbol> {
        self.symbols()
            .into_iter()
            .filter(|s| !s.is_bound())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scalar, sym};

    #[test]
    fn test_node_counter() {
        let a = sym("a");
        let b = sym("b");
        let expr = (&a + &b) * 2; // *, +, a, b, 2
        let mut counter = NodeCounter::default();
        walk_expr(&expr, &mut counter);
        assert_eq!(counter.count, 5);
        assert_eq!(expr.node_count(), 5);
    }

    #[test]
    fn test_symbol_collector_deduplicates_by_identity() {
        let a = sym("a");
        let b = sym("b");
        let shadow_a = sym("a");
        let expr = (&a * &b + (&a + &b + &a)) * (&shadow_a - scalar(3));

        let symbols = expr.symbols();
        assert_eq!(symbols.len(), 3);
        assert!(symbols[0].ptr_eq(&a));
        assert!(symbols[1].ptr_eq(&b));
        assert!(symbols[2].ptr_eq(&shadow_a));
    }

    #[test]
    fn test_unbound_symbols() {
        let a = sym("a");
        let b = sym("b");
        let expr = &a + &b;
        assert_eq!(expr.unbound_symbols().len(), 2);
        a.set_value(1);
        let unbound = expr.unbound_symbols();
        assert_eq!(unbound.len(), 1);
        assert_eq!(unbound[0].name(), Some("b"));
    }

    #[test]
    fn test_depth() {
        let a = sym("a");
        assert_eq!((&a + 1).depth(), 1);
        assert_eq!(((&a + 1) * 2 + 7).depth(), 3);
        assert_eq!((&a * (&a - (&a - 1))).depth(), 3);
    }

    #[test]
    fn test_walk_can_skip_children() {
        struct RootOnly(usize);
        impl ExprVisitor for RootOnly {
            fn visit_number(&mut self, _n: f64) -> bool {
                self.0 += 1;
                true
            }
            fn visit_symbol(&mut self, _s: &Symbol) -> bool {
                self.0 += 1;
                true
            }
            fn visit_binary(&mut self, _op: Operator, _expr: &Expr) -> bool {
                self.0 += 1;
                false
            }
        }

        let a = sym("a");
        let mut v = RootOnly(0);
        walk_expr(&((&a + 1) * 2), &mut v);
        assert_eq!(v.0, 1);
    }
}
