use proptest::{
    collection::vec,
    strategy::{Strategy, ValueTree},
    test_runner::{Config, TestRunner},
};

/// A random value generator backed by proptest strategies.
#[derive(Debug)]
pub struct Rvg {
    runner: TestRunner,
}

impl Rvg {
    pub fn new() -> Self {
        Self {
            runner: TestRunner::new(Config::default()),
        }
    }

    /// Same seed on every run, for benchmarks.
    pub fn deterministic() -> Self {
        Self {
            runner: TestRunner::deterministic(),
        }
    }

    pub fn sample<S: Strategy>(&mut self, strategy: &S) -> S::Value {
        // Generation only fails when a strategy rejects too many values.
        match strategy.new_tree(&mut self.runner) {
            Ok(tree) => tree.current(),
            Err(e) => panic!("Failed to sample from strategy: {e}"),
        }
    }

    /// Lines of words drawn from a small vocabulary, so counts collide.
    /// "alpha" also appears capitalized.
    pub fn sample_lines(&mut self, lines: usize) -> Vec<String> {
        let word = proptest::sample::select(vec!["alpha", "beta", "gamma", "delta", "Alpha"]);
        let line = vec(word, 0..12).prop_map(|words| words.join(" "));

        self.sample(&vec(line, lines))
    }
}

impl Default for Rvg {
    fn default() -> Self {
        Self::new()
    }
}
