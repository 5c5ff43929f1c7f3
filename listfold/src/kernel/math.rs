//! Combining functions shaped for [`fold`](crate::fold()) and
//! [`reduce`](crate::reduce()): the element comes first, the accumulator second.

use std::{cmp, ops::Add};

use num_traits::One;

pub fn count<Arg, Acc>(_: Arg, acc: Acc) -> Acc
where
    Acc: Add<Output = Acc> + One,
{
    acc + One::one()
}

pub fn sum<Arg, Acc>(arg: Arg, acc: Acc) -> Acc
where
    Acc: Add<Arg, Output = Acc>,
{
    acc + arg
}

pub fn min<Arg>(arg: Arg, acc: Arg) -> Arg
where
    Arg: Ord,
{
    cmp::min(acc, arg)
}

pub fn max<Arg>(arg: Arg, acc: Arg) -> Arg
where
    Arg: Ord,
{
    cmp::max(acc, arg)
}
