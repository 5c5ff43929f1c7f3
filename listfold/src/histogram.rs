use std::{collections::HashSet, hash::Hash};

use indexmap::IndexMap;

use crate::{aggregation::Aggregate, fold::filter_via_fold};

/// Occurrence counts per distinct key.
///
/// Keys remember the order in which they were first inserted; that order
/// breaks ties when sorting by count.
#[derive(Clone, Debug)]
pub struct Histogram<K> {
    counts: IndexMap<K, usize>,
}

impl<K> Histogram<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of inserted keys, counting repeats.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> + '_ {
        self.counts.iter().map(|(key, count)| (key, *count))
    }

    /// Borrowed entries sorted by count, highest first. Equal counts keep
    /// their first-encounter order.
    pub fn sorted(&self) -> Vec<(&K, usize)> {
        by_count(self.iter().collect())
    }

    /// Owned entries in the same order as [`Histogram::sorted`].
    pub fn into_sorted(self) -> Vec<(K, usize)> {
        by_count(self.counts.into_iter().collect())
    }
}

fn by_count<T>(mut entries: Vec<(T, usize)>) -> Vec<(T, usize)> {
    // sort_by is stable
    entries.sort_by(|(_, a), (_, b)| b.cmp(a));

    tracing::trace!(entries = entries.len(), "sorted histogram");

    entries
}

impl<K> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::default(),
        }
    }
}

impl<K> Extend<K> for Histogram<K>
where
    K: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Histogram<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}

impl<K> Aggregate for Histogram<K>
where
    K: Eq + Hash + Clone,
{
    type Input = K;
    type Output = Vec<(K, usize)>;

    fn step(&mut self, key: K) {
        self.insert(key);
    }

    fn finalize(&self) -> Option<Self::Output> {
        Some(self.clone().into_sorted())
    }
}

/// Returns every element that occurs more than once.
pub fn find_duplicates<T>(sequence: impl IntoIterator<Item = T>) -> HashSet<T>
where
    T: Eq + Hash,
{
    let histogram: Histogram<T> = sequence.into_iter().collect();

    filter_via_fold(histogram.counts, |(_, count)| *count > 1)
        .into_iter()
        .map(|(key, _)| key)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::aggregation::{aggregate, group_by};

    #[test]
    fn test_histogram() {
        let histogram: Histogram<char> = "mississippi".chars().collect();

        assert_eq!(4, histogram.len());
        assert_eq!(11, histogram.total());
        assert_eq!(4, histogram.count(&'s'));
        assert_eq!(0, histogram.count(&'z'));
        assert_eq!(
            vec![(&'m', 1), (&'i', 4), (&'s', 4), (&'p', 2)],
            histogram.iter().collect::<Vec<_>>()
        );
        assert_eq!(
            vec![('i', 4), ('s', 4), ('p', 2), ('m', 1)],
            histogram.into_sorted()
        );
    }

    #[test]
    fn test_sorted_matches_into_sorted() {
        let histogram: Histogram<&str> = ["x", "y", "y", "z", "x", "w"].into_iter().collect();

        assert_eq!(
            vec![(&"x", 2), (&"y", 2), (&"z", 1), (&"w", 1)],
            histogram.sorted()
        );
        assert_eq!(
            vec![("x", 2), ("y", 2), ("z", 1), ("w", 1)],
            histogram.into_sorted()
        );
    }

    #[test]
    fn test_find_duplicates_without_clone() {
        #[derive(Debug, Eq, Hash, PartialEq)]
        struct Token(&'static str);

        let duplicates = find_duplicates([Token("a"), Token("b"), Token("a")]);

        assert_eq!(HashSet::from([Token("a")]), duplicates);
    }

    #[test]
    fn test_empty_histogram() {
        let histogram = Histogram::<u8>::new();

        assert!(histogram.is_empty());
        assert_eq!(0, histogram.total());
        assert_eq!(Vec::<(u8, usize)>::new(), histogram.into_sorted());
    }

    #[test]
    fn test_histogram_aggregate() {
        assert_eq!(
            Some(vec![(2, 2), (1, 1)]),
            aggregate::<Histogram<i32>>([1, 2, 2])
        );
        assert_eq!(
            vec![("even", vec![(2, 1), (4, 1)]), ("odd", vec![(3, 2)])],
            group_by::<Histogram<i32>, _>(
                [2, 3, 4, 3].map(|x| (if x % 2 == 0 { "even" } else { "odd" }, x))
            )
        );
    }

    #[test]
    fn test_find_duplicates() {
        assert_eq!(
            HashSet::from([1, 4]),
            find_duplicates([1, 1, 2, 3, 4, 4, 5, 6, 7])
        );
        assert_eq!(HashSet::<i32>::new(), find_duplicates(Vec::<i32>::new()));
        assert_eq!(HashSet::<i32>::new(), find_duplicates([1, 2, 3]));
        assert_eq!(
            HashSet::from(["b"]),
            find_duplicates(["a", "b", "b", "b", "c"])
        );
    }
}
