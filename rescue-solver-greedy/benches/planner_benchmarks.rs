//! Criterion benchmarks for the greedy planner.
//!
//! Measures plan time across lattice sizes with and without search-tree reuse
//! to track performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package rescue-solver-greedy
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rescue_core::Planner;
use rescue_solver_greedy::{GreedyPlanner, GreedyPlannerConfig};


use bench_support::{BENCHMARK_SEED, build_benchmark_request};

/// Lattice side lengths and survivor counts to benchmark.
const PROBLEM_SIZES: &[(i64, usize)] = &[(10, 10), (20, 25), (30, 50)];

fn planners() -> [(&'static str, GreedyPlanner); 2] {
    [
        ("tree_reuse", GreedyPlanner::new()),
        (
            "per_pair",
            GreedyPlanner::with_config(GreedyPlannerConfig {
                reuse_search_trees: false,
                ..GreedyPlannerConfig::default()
            }),
        ),
    ]
}

/// Benchmark plan times for each lattice size and search strategy.
///
/// Inputs are generated once per size outside the measured loop.
fn bench_plan_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_time");
    group.sample_size(30);

    for &(side, survivors) in PROBLEM_SIZES {
        let request = build_benchmark_request(side, survivors, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(survivors as u64));

        for (label, planner) in planners() {
            group.bench_with_input(
                BenchmarkId::new(label, format!("{side}x{side}/{survivors}")),
                &request,
                |b, request| {
                    b.iter(|| {
                        planner
                            .plan(black_box(request))
                            .map(|response| response.routes.len())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_plan_times);
criterion_main!(benches);
