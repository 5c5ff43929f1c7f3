#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! listfold
//!
//! List processing built on a single left fold. [`fold()`] is the primitive;
//! [`reduce()`], [`map_via_fold`], [`filter_via_fold`] and the rest are derived
//! from it.

pub mod aggregation;
pub mod derived;
pub mod error;
pub mod fold;
pub mod histogram;
pub mod kernel;
pub mod pretty;
pub mod source;
pub mod text;

pub use aggregation::{aggregate, group_by, Aggregate};
pub use fold::{filter_via_fold, flat_map_via_fold, fold, map_via_fold, reduce, try_fold};
pub use histogram::{find_duplicates, Histogram};
pub use text::{word_histogram, word_histogram_default, Normalize, Tokenize};

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;
