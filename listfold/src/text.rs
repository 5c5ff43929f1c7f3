//! Word counting over lines of text.

use crate::{
    fold::{flat_map_via_fold, map_via_fold},
    histogram::Histogram,
};

/// Splits a line into tokens.
pub trait Tokenize {
    fn tokenize(&self, line: &str) -> Vec<String>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// Canonicalizes a token so that equivalent tokens compare equal.
pub trait Normalize {
    fn normalize(&self, token: &str) -> String;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, token: &str) -> String {
        self(token)
    }
}

/// Splits on Unicode whitespace, never yielding empty tokens.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Whitespace;

impl Tokenize for Whitespace {
    fn tokenize(&self, line: &str) -> Vec<String> {
        line.split_whitespace().map(ToOwned::to_owned).collect()
    }
}

/// Trims surrounding whitespace, then lowercases.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrimLowercase;

impl Normalize for TrimLowercase {
    fn normalize(&self, token: &str) -> String {
        token.trim().to_lowercase()
    }
}

/// Counts normalized tokens across `lines`, highest count first.
///
/// Tokens with equal counts are ordered by where they first appear in the
/// input, reading lines top to bottom and tokens left to right.
pub fn word_histogram<L, T, N>(lines: L, tokenize: T, normalize: N) -> Vec<(String, usize)>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
    T: Tokenize,
    N: Normalize,
{
    let words = flat_map_via_fold(lines, |line| tokenize.tokenize(line.as_ref()));
    let cleaned = map_via_fold(words, |word| normalize.normalize(&word));

    tracing::debug!(tokens = cleaned.len(), "counting words");

    cleaned.into_iter().collect::<Histogram<_>>().into_sorted()
}

/// [`word_histogram`] with [`Whitespace`] tokens and [`TrimLowercase`]
/// normalization.
pub fn word_histogram_default<L>(lines: L) -> Vec<(String, usize)>
where
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    word_histogram(lines, Whitespace, TrimLowercase)
}
