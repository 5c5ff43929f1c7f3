use std::hash::Hash;

use indexmap::IndexMap;

use crate::fold::fold;

/// A stateful accumulator, stepped once per input and finalized into an
/// output.
pub trait Aggregate: Sized + Default {
    type Input;
    type Output;

    fn step(&mut self, input: Self::Input);
    fn finalize(&self) -> Option<Self::Output>;
}

impl<T> Aggregate for Box<T>
where
    T: Aggregate,
{
    type Input = T::Input;
    type Output = T::Output;

    fn step(&mut self, input: Self::Input) {
        (**self).step(input);
    }

    fn finalize(&self) -> Option<Self::Output> {
        T::finalize(self)
    }
}

/// Runs a single aggregate over `sequence`.
pub fn aggregate<G>(sequence: impl IntoIterator<Item = G::Input>) -> Option<G::Output>
where
    G: Aggregate,
{
    fold(sequence, G::default(), |input, mut agg| {
        agg.step(input);
        agg
    })
    .finalize()
}

/// Runs one aggregate per distinct key.
///
/// Groups are returned in the order their keys were first seen. Groups whose
/// aggregate finalizes to `None` are left out.
pub fn group_by<G, K>(sequence: impl IntoIterator<Item = (K, G::Input)>) -> Vec<(K, G::Output)>
where
    G: Aggregate,
    K: Eq + Hash,
{
    let groups = fold(sequence, IndexMap::<K, G>::new(), |(key, input), mut groups| {
        groups.entry(key).or_default().step(input);
        groups
    });

    tracing::trace!(groups = groups.len(), "finalizing groups");

    groups
        .into_iter()
        .filter_map(|(key, group)| Some((key, group.finalize()?)))
        .collect()
}
