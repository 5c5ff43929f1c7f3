use crate::{aggregation::Aggregate, fold::fold, kernel::math};

/// Largest input seen, `None` until the first step.
#[derive(Debug)]
pub struct Max<T>(Option<T>);

impl<T> Default for Max<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Clone + Ord> Aggregate for Max<T> {
    type Input = T;
    type Output = T;

    fn step(&mut self, t: T) {
        self.0 = Some(fold(self.0.take(), t, math::max));
    }

    fn finalize(&self) -> Option<Self::Output> {
        self.0.clone()
    }
}
