use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use selection_sort_rs::selection::{double_ended, standard};
use selection_sort_rs::PerformanceTracker;
use sort_test_tools::{patterns, Sort};

fn i32_lt(a: &i32, b: &i32) -> bool {
    a < b
}

const SIZES: [usize; 4] = [20, 100, 500, 1_000];

fn pin_thread() {
    // Keeps the measurements on one core, migrations show up as noise in the quadratic scans.
    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core);
    }
}

fn bench_patterns<S: Sort>(c: &mut Criterion) {
    let inputs: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("random_d10", |len| patterns::random_uniform(len, 0..10)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
    ];

    for (pattern_name, pattern_fn) in inputs {
        let mut group = c.benchmark_group(format!("{}-{pattern_name}", S::name()));
        for len in SIZES {
            let input = pattern_fn(len);
            group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |v| S::sort(black_box(v.as_mut_slice())),
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

fn bench_instrumented(c: &mut Criterion) {
    let mut group = c.benchmark_group("instrumented-early_exit-ascending");
    for len in SIZES {
        let input = patterns::ascending(len);

        group.bench_with_input(BenchmarkId::new("standard", len), &input, |b, input| {
            b.iter_batched_ref(
                || (input.clone(), PerformanceTracker::new()),
                |(v, tracker)| {
                    standard::sort_instrumented(v.as_mut_slice(), &mut i32_lt, tracker, true)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("double", len), &input, |b, input| {
            b.iter_batched_ref(
                || (input.clone(), PerformanceTracker::new()),
                |(v, tracker)| {
                    double_ended::sort_instrumented(v.as_mut_slice(), &mut i32_lt, tracker, true)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn benches(c: &mut Criterion) {
    pin_thread();

    bench_patterns::<standard::SortImpl>(c);
    bench_patterns::<double_ended::SortImpl>(c);
    bench_instrumented(c);
}

criterion_group!(bench_group, benches);
criterion_main!(bench_group);
