//! Error types for the sort kernels and the benchmark generators.
//!
//! Both enums derive [`thiserror::Error`] so they compose with `?` and carry a
//! useful [`std::fmt::Display`] without hand-written boilerplate.

use std::path::PathBuf;

/// Precondition violations raised by the public sort entry points.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    /// The caller passed `None` where an array was required.
    #[error("sort called with a null/absent array")]
    NullArray,
}

/// Failures raised while generating a benchmark workload.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The backing file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file has fewer lines than the requested data size.
    #[error("{path} has {available} lines, fewer than the {requested} requested")]
    InsufficientLines {
        path: PathBuf,
        available: usize,
        requested: usize,
    },
}
