//! listfold errors

use anyhow::Result;
use thiserror::Error;

/// listfold errors.
#[derive(Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("Attempted to reduce an empty sequence")]
    EmptyInput,
}

pub fn error<T>(err: impl std::error::Error + Send + Sync + 'static) -> Result<T> {
    Err(err.into())
}
