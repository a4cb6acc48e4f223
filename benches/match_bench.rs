//! Benchmarks for the scoring hot path.
//!
//! Simulates realistic pool sizes:
//! - Small directory:  ~10 researchers (single department)
//! - Medium directory: ~100 researchers (institution)
//! - Large directory:  ~1000 researchers (consortium)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use clinmatch::testing::{make_problem, make_researcher};
use clinmatch::{match_problem_to_researchers, Researcher};

const POOL_SIZES: &[usize] = &[10, 100, 1000];

/// Clinical vocabulary for realistic profile content.
const CLINICAL_WORDS: &[&str] = &[
    "cardiology",
    "oncology",
    "readmission",
    "telemedicine",
    "diabetes",
    "adherence",
    "geriatrics",
    "pulmonary",
    "rehabilitation",
    "infection",
    "prevention",
    "surgical",
    "chronic",
    "behavioral",
    "screening",
    "immunotherapy",
    "protocol",
    "discharge",
    "monitoring",
    "outcomes",
];

/// Deterministic pseudo-random profile text (no rand dependency needed).
fn profile_text(seed: usize, words: usize) -> String {
    (0..words)
        .map(|i| CLINICAL_WORDS[(seed.wrapping_mul(31).wrapping_add(i * 7)) % CLINICAL_WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_pool(size: usize) -> Vec<Researcher> {
    (0..size)
        .map(|i| make_researcher(&format!("Dr. {}", i), &profile_text(i, 60), &[]))
        .collect()
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_problem_to_researchers");
    let problem = make_problem(
        "reducing 30-day readmission rates for chronic heart failure patients \
         through discharge protocols and remote monitoring",
    );

    for &size in POOL_SIZES {
        let pool = build_pool(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &pool, |b, pool| {
            b.iter(|| match_problem_to_researchers(black_box(&problem), black_box(pool), 5))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
