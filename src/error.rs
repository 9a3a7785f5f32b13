//! Error types for directory loading.
//!
//! A benchmark run is one-shot: every error aborts the run and propagates
//! to the caller. Nothing is retried and no malformed line is silently
//! skipped, since a dropped record would corrupt the match counts the run
//! exists to measure.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dialdex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Primary error type for dialdex.
#[derive(Error, Debug)]
pub enum Error {
    /// A directory line produced no tokens, so no record can be built
    /// from it. Lines are numbered from 1.
    #[error("malformed record at line {line}: no tokens")]
    MalformedRecord { line: usize },

    /// The record or query source could not be read, or the sorted
    /// directory could not be written.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
