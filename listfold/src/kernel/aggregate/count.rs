use std::{mem, ops::Add};

use num_traits::{One, Zero};

use crate::{aggregation::Aggregate, kernel::math};

/// Number of steps taken. The input carries no data.
#[derive(Debug)]
pub struct Count<T>(T);

impl<T> Default for Count<T>
where
    T: Clone + Add<Output = T> + One + Zero,
{
    fn default() -> Self {
        Self(Zero::zero())
    }
}

impl<T> Aggregate for Count<T>
where
    T: Clone + Add<Output = T> + One + Zero,
{
    type Input = ();
    type Output = T;

    fn step(&mut self, input: ()) {
        let acc = mem::replace(&mut self.0, T::zero());
        self.0 = math::count(input, acc);
    }

    fn finalize(&self) -> Option<Self::Output> {
        Some(self.0.clone())
    }
}
