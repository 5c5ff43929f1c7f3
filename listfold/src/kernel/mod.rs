//! Ready-made combining functions and aggregates.

pub mod aggregate;
pub mod math;
