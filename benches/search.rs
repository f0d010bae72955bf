//! Benchmarks for the twister chain solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twister::geometry::{Direction, Face, Orientation};
use twister::report::format_solution;
use twister::search::candidate_orientations;
use twister::solver::{solve, solve_from, solve_parallel};

/// Benchmark the complete sequential search over all starting placements.
fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve", |b| b.iter(|| black_box(solve())));
}

/// Benchmark the search with starting placements spread over the rayon pool.
fn bench_solve_parallel(c: &mut Criterion) {
    c.bench_function("solve_parallel", |b| b.iter(|| black_box(solve_parallel())));
}

/// Benchmark exhausting a starting placement that has no fold.
fn bench_exhausted_start(c: &mut Criterion) {
    c.bench_function("solve_from_exhausted", |b| {
        b.iter(|| solve_from(black_box(1)))
    });
}

/// Benchmark generating the four twists of a turning joint.
fn bench_candidates(c: &mut Criterion) {
    c.bench_function("candidate_orientations", |b| {
        b.iter(|| {
            candidate_orientations(
                black_box(Direction::PosY),
                black_box(Face::F0),
                black_box(Some(Face::F1)),
            )
        })
    });
}

/// Benchmark a full turn of quarter rotations.
fn bench_rotation(c: &mut Criterion) {
    c.bench_function("right_hand_rotate_x4", |b| {
        b.iter(|| {
            let mut orientation = black_box(Orientation::CANONICAL);
            for _ in 0..4 {
                orientation = orientation.right_hand_rotate(black_box(Face::F1));
            }
            orientation
        })
    });
}

/// Benchmark formatting a solution for display.
fn bench_format_solution(c: &mut Criterion) {
    let Some(solution) = solve().into_solution() else {
        return;
    };

    c.bench_function("format_solution", |b| {
        b.iter(|| format_solution(black_box(&solution)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_parallel,
    bench_exhausted_start,
    bench_candidates,
    bench_rotation,
    bench_format_solution
);
criterion_main!(benches);
