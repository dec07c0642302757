//! Benchmarks for the backtracking search.
//!
//! Compares recording the full trace against counting steps only.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nqueens_solver::{BacktrackSolver, StepCounter};

const SIZES: [usize; 4] = [4, 8, 12, 16];

fn bench_solve_full_trace(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    for n in SIZES {
        c.bench_with_input(BenchmarkId::new("solve_full_trace", n), &n, |b, &n| {
            b.iter(|| {
                let result = solver.solve(hint::black_box(n)).unwrap();
                hint::black_box(result)
            });
        });
    }
}

fn bench_solve_counted(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    for n in SIZES {
        c.bench_with_input(BenchmarkId::new("solve_counted", n), &n, |b, &n| {
            b.iter(|| {
                let mut counter = StepCounter::default();
                let summary = solver
                    .solve_into(hint::black_box(n), &mut counter)
                    .unwrap();
                hint::black_box((summary, counter))
            });
        });
    }
}

criterion_group!(benches, bench_solve_full_trace, bench_solve_counted);
criterion_main!(benches);
