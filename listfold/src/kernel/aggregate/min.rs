use crate::{aggregation::Aggregate, fold::fold, kernel::math};

/// Smallest input seen. `None` until the first step, like
/// [`reduce`](crate::reduce()) on an empty sequence.
#[derive(Debug)]
pub struct Min<T>(Option<T>);

impl<T> Default for Min<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Clone + Ord> Aggregate for Min<T> {
    type Input = T;
    type Output = T;

    fn step(&mut self, t: T) {
        // The current minimum, if any, is folded into the new input.
        self.0 = Some(fold(self.0.take(), t, math::min));
    }

    fn finalize(&self) -> Option<Self::Output> {
        self.0.clone()
    }
}
