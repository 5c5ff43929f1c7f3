use std::{
    mem,
    ops::{Add, Div},
};

use num_traits::{One, Zero};

use crate::{aggregation::Aggregate, kernel::math};

/// Arithmetic mean. Finalizes to `None` when nothing was stepped.
#[derive(Debug)]
pub struct Mean<T>(T, T);

impl<T> Default for Mean<T>
where
    T: Clone + Add<Output = T> + Zero + One + Div<Output = T>,
{
    fn default() -> Self {
        Self(Zero::zero(), Zero::zero())
    }
}

impl<T> Aggregate for Mean<T>
where
    T: Clone + Add<Output = T> + Zero + One + Div<Output = T>,
{
    type Input = T;
    type Output = <T as Div>::Output;

    fn step(&mut self, t: T) {
        self.0 = math::sum(t, mem::replace(&mut self.0, T::zero()));
        self.1 = math::count((), mem::replace(&mut self.1, T::zero()));
    }

    fn finalize(&self) -> Option<Self::Output> {
        if self.1.is_zero() {
            return None;
        }

        Some(self.0.clone() / self.1.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::aggregation::aggregate;

    #[test]
    fn test_integer_mean_truncates() {
        assert_eq!(Some(2), aggregate::<Mean<i64>>([1, 2, 4]));
        assert_eq!(None, aggregate::<Mean<i64>>([]));
    }
}
