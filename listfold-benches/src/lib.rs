//! Benchmarks for listfold. See `benches/`.
