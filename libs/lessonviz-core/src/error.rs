//! Error types for lessonviz-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building widget state.
#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate term {term:?}")]
    DuplicateTerm { term: String },

    #[error("a match board needs at least one pair")]
    EmptyBoard,

    #[error("unknown algorithm {name:?}")]
    UnknownAlgorithm { name: String },
}
