//! Line sources feeding [`word_histogram`](crate::word_histogram).

use std::io::BufRead;

use anyhow::Result;

pub trait LineSource {
    fn lines(self) -> Result<Vec<String>>;
}

impl LineSource for Vec<String> {
    fn lines(self) -> Result<Vec<String>> {
        Ok(self)
    }
}

impl LineSource for &[String] {
    fn lines(self) -> Result<Vec<String>> {
        Ok(self.to_vec())
    }
}

impl LineSource for &[&str] {
    fn lines(self) -> Result<Vec<String>> {
        Ok(self.iter().map(|line| (*line).to_owned()).collect())
    }
}

/// Reads lines from any buffered reader, such as a file or an in-memory
/// cursor. Line terminators are stripped.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn lines(self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        for line in self.reader.lines() {
            lines.push(line?);
        }

        tracing::debug!(lines = lines.len(), "read line source");

        Ok(lines)
    }
}
