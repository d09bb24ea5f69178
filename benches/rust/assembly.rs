//! Compilation and Evaluation Benchmark
//!
//! Compares direct recursive evaluation against stack-machine execution on
//! wide and deep expressions built through operator overloading.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use symb_stack::{Expr, Symbol, sym};

// =============================================================================
// Expression Generators
// =============================================================================

/// Sum of `n` mixed product terms over a small symbol pool, combined pairwise
/// so the tree stays shallow
fn generate_wide(pool: &[Symbol], n: usize) -> Expr {
    let mut terms: Vec<Expr> = (0..n)
        .map(|i| {
            let s = &pool[i % pool.len()];
            // Mix term types based on index
            match i % 3 {
                0 => s * 3,
                1 => s + 1.5,
                _ => s * &pool[(i + 1) % pool.len()],
            }
        })
        .collect();

    while terms.len() > 1 {
        let mut next = Vec::with_capacity(terms.len().div_ceil(2));
        let mut iter = terms.into_iter();
        while let Some(left) = iter.next() {
            next.push(match iter.next() {
                Some(right) if next.len() % 2 == 0 => left + right,
                Some(right) => left - right,
                None => left,
            });
        }
        terms = next;
    }
    terms.pop().unwrap_or_else(|| &pool[0] * 0)
}

/// Right-leaning chain, the worst case for stack depth
fn generate_deep(pool: &[Symbol], n: usize) -> Expr {
    let mut expr = &pool[0] - 1;
    for i in 1..n {
        expr = &pool[i % pool.len()] - expr;
    }
    expr
}

fn bench_assembly(c: &mut Criterion) {
    let pool: Vec<Symbol> = ["a", "b", "c", "d"].into_iter().map(sym).collect();
    for (s, value) in pool.iter().zip([0.25, 0.5, 0.75, 1.0]) {
        s.set_value(value);
    }

    let wide = generate_wide(&pool, 300);
    let deep = generate_deep(&pool, 250);

    let mut group = c.benchmark_group("assembly");

    group.bench_function("compile/wide_300", |b| {
        b.iter(|| black_box(&wide).compile());
    });
    group.bench_function("compile/deep_250", |b| {
        b.iter(|| black_box(&deep).compile());
    });

    group.bench_function("evaluate_direct/wide_300", |b| {
        b.iter(|| black_box(&wide).evaluate());
    });

    let wide_program = wide.compile().expect("wide expression compiles");
    group.bench_function("evaluate_stack/wide_300", |b| {
        b.iter(|| black_box(&wide_program).evaluate());
    });

    let deep_program = deep.compile().expect("deep expression compiles");
    let mut stack = Vec::with_capacity(deep_program.stack_size());
    group.bench_function("evaluate_stack_reused/deep_250", |b| {
        b.iter(|| black_box(&deep_program).evaluate_with_stack(&mut stack));
    });

    group.finish();
}

criterion_group!(benches, bench_assembly);
criterion_main!(benches);
