//! Left folds and the sequence operations derived from them.

use anyhow::Result;

use crate::error::{error, Error};

/// Folds `sequence` from left to right into a single value.
///
/// The accumulator starts at `initial` and each element replaces it with
/// `combine(element, accumulator)`. An empty sequence returns `initial`.
pub fn fold<T, A, F>(sequence: impl IntoIterator<Item = T>, initial: A, mut combine: F) -> A
where
    F: FnMut(T, A) -> A,
{
    let mut acc = initial;

    for elem in sequence {
        acc = combine(elem, acc);
    }

    acc
}

/// Like [`fold`], but `combine` may fail. The first error stops the fold and
/// is returned as is.
pub fn try_fold<T, A, E, F>(
    sequence: impl IntoIterator<Item = T>,
    initial: A,
    mut combine: F,
) -> Result<A, E>
where
    F: FnMut(T, A) -> Result<A, E>,
{
    let mut acc = initial;

    for elem in sequence {
        acc = combine(elem, acc)?;
    }

    Ok(acc)
}

/// Folds `sequence` seeded by its first element.
///
/// Fails with [`Error::EmptyInput`] when the sequence is empty.
pub fn reduce<T, F>(sequence: impl IntoIterator<Item = T>, combine: F) -> Result<T>
where
    F: FnMut(T, T) -> T,
{
    let mut iter = sequence.into_iter();

    match iter.next() {
        Some(first) => Ok(fold(iter, first, combine)),
        None => {
            tracing::debug!("reduce over an empty sequence");

            error(Error::EmptyInput)
        }
    }
}

pub fn map_via_fold<T, U, F>(sequence: impl IntoIterator<Item = T>, mut transform: F) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    fold(sequence, Vec::new(), |elem, mut mapped| {
        mapped.push(transform(elem));
        mapped
    })
}

pub fn filter_via_fold<T, F>(sequence: impl IntoIterator<Item = T>, mut predicate: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    fold(sequence, Vec::new(), |elem, mut filtered| {
        if predicate(&elem) {
            filtered.push(elem);
        }

        filtered
    })
}

/// Maps every element to a sequence and concatenates the results in order.
pub fn flat_map_via_fold<T, U, I, F>(sequence: impl IntoIterator<Item = T>, mut f: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(T) -> I,
{
    fold(sequence, Vec::new(), |elem, mut flattened| {
        flattened.extend(f(elem));
        flattened
    })
}
