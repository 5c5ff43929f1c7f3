use criterion::{criterion_group, criterion_main, Criterion};
use listfold::{
    filter_via_fold, map_via_fold, reduce, test_utils::Rvg, word_histogram_default,
};
use proptest::collection::vec;

pub fn fold_benchmark(c: &mut Criterion) {
    let mut rvg = Rvg::deterministic();
    let numbers = rvg.sample(&vec(0..100i64, 10_000));

    c.bench_function("map_via_fold", |b| {
        b.iter(|| map_via_fold(numbers.iter(), |x| x * x))
    });

    c.bench_function("filter_via_fold", |b| {
        b.iter(|| filter_via_fold(numbers.iter(), |x| *x % 2 == 0))
    });

    c.bench_function("reduce", |b| {
        b.iter(|| reduce(numbers.iter().copied(), |x, acc| acc + x))
    });
}

pub fn histogram_benchmark(c: &mut Criterion) {
    let mut rvg = Rvg::deterministic();
    let lines = rvg.sample_lines(1_000);

    c.bench_function("word_histogram", |b| {
        b.iter(|| word_histogram_default(&lines))
    });
}

criterion_group!(benches, fold_benchmark, histogram_benchmark);
criterion_main!(benches);
