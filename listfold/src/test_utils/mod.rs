/// Random value generator for sampling data.
mod rvg;

pub use rvg::*;

/// A few lines of text with repeated words in mixed case, for word counting.
pub const SAMPLE_LINES: &[&str] = &[
    "The quick brown fox",
    "jumps over the lazy dog",
    "  THE dog sleeps  ",
    "",
    "quick quick",
];

#[macro_export]
macro_rules! assert_empty_input {
    ($result:expr) => {
        match $result {
            std::result::Result::Ok(v) => {
                panic!("Expected an empty input error, got: {:?}", v);
            }
            std::result::Result::Err(e) => {
                assert_eq!(
                    std::option::Option::Some(&$crate::error::Error::EmptyInput),
                    e.downcast_ref::<$crate::error::Error>()
                );
            }
        }
    };
}
