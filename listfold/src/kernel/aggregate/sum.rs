use std::{mem, ops::Add};

use num_traits::Zero;

use crate::{aggregation::Aggregate, kernel::math};

/// Running total, zero when nothing was stepped.
#[derive(Debug)]
pub struct Sum<T>(T);

impl<T> Default for Sum<T>
where
    T: Clone + Add<Output = T> + Zero,
{
    fn default() -> Self {
        Self(Zero::zero())
    }
}

impl<T> Aggregate for Sum<T>
where
    T: Clone + Add<Output = T> + Zero,
{
    type Input = T;
    type Output = T;

    fn step(&mut self, t: T) {
        let acc = mem::replace(&mut self.0, T::zero());
        self.0 = math::sum(t, acc);
    }

    fn finalize(&self) -> Option<Self::Output> {
        Some(self.0.clone())
    }
}
