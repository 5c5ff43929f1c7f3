//! Everyday list functions expressed through the fold primitives.

use std::ops::{Add, Mul, Rem};

use anyhow::Result;
use num_traits::Zero;

use crate::{
    fold::{filter_via_fold, fold, map_via_fold, reduce},
    kernel::math,
};

/// Character count of each string.
pub fn lengths<S>(strings: impl IntoIterator<Item = S>) -> Vec<usize>
where
    S: AsRef<str>,
{
    map_via_fold(strings, |s| s.as_ref().chars().count())
}

pub fn squares<T>(numbers: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    map_via_fold(numbers, |x| x * x)
}

pub fn evens<T>(numbers: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Copy + Zero + Rem<Output = T> + From<u8>,
{
    filter_via_fold(numbers, |x| (*x % T::from(2u8)).is_zero())
}

/// Strings containing `needle`.
pub fn containing<S>(strings: impl IntoIterator<Item = S>, needle: &str) -> Vec<S>
where
    S: AsRef<str>,
{
    filter_via_fold(strings, |s| s.as_ref().contains(needle))
}

/// Largest element. Fails on empty input.
pub fn max_of<T: Ord>(numbers: impl IntoIterator<Item = T>) -> Result<T> {
    reduce(numbers, math::max)
}

/// Smallest element. Fails on empty input.
pub fn min_of<T: Ord>(numbers: impl IntoIterator<Item = T>) -> Result<T> {
    reduce(numbers, math::min)
}

pub fn sum_of<T>(numbers: impl IntoIterator<Item = T>) -> T
where
    T: Zero + Add<Output = T>,
{
    fold(numbers, T::zero(), math::sum)
}
