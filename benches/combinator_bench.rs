//! Benchmark for combinator pipelines against hand-written equivalents.
//!
//! Measures the overhead of building iterator stages from pointfree
//! combinators instead of inline closures.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pointfree::prelude::*;
use std::hint::black_box;

// =============================================================================
// Predicate Benchmarks
// =============================================================================

fn benchmark_predicate_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicate_filter");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("combinator", size), &values, |bencher, values| {
            bencher.iter(|| {
                let in_range = both(greater_than_equal_to(10), less_than(900));
                let count = values.iter().filter(|value| in_range(*value)).count();
                black_box(count)
            });
        });

        group.bench_with_input(BenchmarkId::new("inline", size), &values, |bencher, values| {
            bencher.iter(|| {
                let count = values
                    .iter()
                    .filter(|value| **value >= 10 && **value < 900)
                    .count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn benchmark_all_pass(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all_pass");
    let values: Vec<i64> = (0..1_000).collect();

    for predicate_count in [2_i64, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("predicates", predicate_count),
            &predicate_count,
            |bencher, &predicate_count| {
                bencher.iter(|| {
                    let bounds: Vec<BoxedPredicate<'_, i64>> = (0..predicate_count)
                        .map(|bound| Box::new(greater_than(-bound)) as BoxedPredicate<'_, i64>)
                        .collect();
                    let every = all_pass(bounds);
                    black_box(values.iter().filter(|value| every(*value)).count())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Flow Benchmarks
// =============================================================================

fn benchmark_cond(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cond");
    let values: Vec<u32> = (1..=1_000).collect();

    group.bench_function("fizzbuzz_table", |bencher| {
        bencher.iter(|| {
            let cases: Vec<Case<'_, u32, &str>> = vec![
                (Box::new(|n: &u32| n.is_multiple_of(15)), Box::new(|_| "FizzBuzz")),
                (Box::new(|n: &u32| n.is_multiple_of(3)), Box::new(|_| "Fizz")),
                (Box::new(|n: &u32| n.is_multiple_of(5)), Box::new(|_| "Buzz")),
            ];
            let label = cond_default(cases, || "-");
            black_box(values.iter().copied().map(&label).filter(|text| *text != "-").count())
        });
    });

    group.bench_function("fizzbuzz_match", |bencher| {
        bencher.iter(|| {
            let label = |n: u32| match (n.is_multiple_of(3), n.is_multiple_of(5)) {
                (true, true) => "FizzBuzz",
                (true, false) => "Fizz",
                (false, true) => "Buzz",
                (false, false) => "-",
            };
            black_box(values.iter().copied().map(label).filter(|text| *text != "-").count())
        });
    });

    group.finish();
}

fn benchmark_until(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("until");

    for target in [10_u64, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("unbounded", target), &target, |bencher, &target| {
            let count_up = until(greater_than_equal_to(target), adding(1));
            bencher.iter(|| black_box(count_up(black_box(0))));
        });

        group.bench_with_input(BenchmarkId::new("bounded", target), &target, |bencher, &target| {
            let count_up = until_bounded(greater_than_equal_to(target), adding(1), usize::MAX);
            bencher.iter(|| black_box(count_up(black_box(0))));
        });
    }

    group.finish();
}

// =============================================================================
// List Benchmarks
// =============================================================================

fn benchmark_deduplicate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deduplicate_consecutive");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i32> = (0..size).map(|index| index / 4).collect();

        group.bench_with_input(BenchmarkId::new("combinator", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(deduplicate_consecutive_items_by(|value: &i32| *value, values.clone()))
            });
        });

        group.bench_with_input(BenchmarkId::new("vec_dedup", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut copy = values.clone();
                copy.dedup();
                black_box(copy)
            });
        });
    }

    group.finish();
}

fn benchmark_partition_while(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition_while");
    let values: Vec<i32> = (0..10_000).collect();

    group.bench_function("owned", |bencher| {
        bencher.iter(|| black_box(partition_while(less_than(5_000), values.clone())));
    });

    group.bench_function("borrowed", |bencher| {
        bencher.iter(|| black_box(split_while(less_than(5_000), &values)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_predicate_filter,
    benchmark_all_pass,
    benchmark_cond,
    benchmark_until,
    benchmark_deduplicate,
    benchmark_partition_while
);
criterion_main!(benches);
