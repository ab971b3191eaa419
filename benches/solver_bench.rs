//! Criterion benchmarks for the timetable solver.
//!
//! Uses synthetic seeded catalogs to measure search and shortlist
//! overhead independent of any real course data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_timetable::models::{Course, Session, WeekGrid, DAY_COUNT, SLOTS_PER_DAY};
use u_timetable::solver::{SolverConfig, TimetableRequest, TimetableSolver};

// ===========================================================================
// Synthetic catalogs
// ===========================================================================

fn random_span(rng: &mut StdRng) -> WeekGrid {
    let day = rng.random_range(0..DAY_COUNT);
    let first = rng.random_range(0..SLOTS_PER_DAY - 4);
    let len = rng.random_range(2..5);
    WeekGrid::new().with_span(day, first, len)
}

fn random_request(seed: u64, courses: usize, sessions: usize) -> TimetableRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    let catalog = (0..courses)
        .map(|c| {
            let mut course = Course::new(format!("C{c}"));
            for s in 0..sessions {
                course = course.with_session(Session::new(
                    (c * 100 + s) as i64,
                    format!("C{c}S{s}"),
                    random_span(&mut rng),
                ));
            }
            course
        })
        .collect();
    let leisure = random_span(&mut rng).union(&random_span(&mut rng));
    TimetableRequest::new(catalog).with_leisure(leisure)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_solver_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_scaling");
    group.sample_size(10);

    for (courses, sessions) in [(3usize, 4usize), (5, 4), (7, 4)] {
        let request = random_request(42, courses, sessions);
        group.bench_with_input(
            BenchmarkId::new(format!("c{courses}_s{sessions}"), courses),
            &request,
            |b, request| {
                let solver = TimetableSolver::new();
                b.iter(|| {
                    let result = solver.solve(black_box(request));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_bound_pruning(c: &mut Criterion) {
    let mut group = c.benchmark_group("bound_pruning");
    group.sample_size(10);

    let request = random_request(7, 6, 4);
    for (label, enabled) in [("pruned", true), ("exhaustive", false)] {
        let solver = TimetableSolver::new()
            .with_config(SolverConfig::default().with_bound_pruning(enabled));
        group.bench_with_input(BenchmarkId::from_parameter(label), &solver, |b, solver| {
            b.iter(|| {
                let result = solver.solve(black_box(&request));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_top_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_n");
    group.sample_size(10);

    let request = random_request(11, 5, 4);
    for &top_n in &[1usize, 5, 50] {
        let solver =
            TimetableSolver::new().with_config(SolverConfig::default().with_top_n(top_n));
        group.bench_with_input(BenchmarkId::from_parameter(top_n), &solver, |b, solver| {
            b.iter(|| {
                let result = solver.solve(black_box(&request));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solver_scaling, bench_bound_pruning, bench_top_n);
criterion_main!(benches);
