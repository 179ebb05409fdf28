//! Errors surfaced by the solver library.

use thiserror::Error;

/// Everything the library can fail with.
///
/// An impossible feedback pattern is not an error: it simply matches no words.
#[derive(Debug, Error)]
pub enum Error {
    /// Lengths of a guess, a pattern, or known positions disagree.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not a word: {0:?}")]
    InvalidWord(String),

    /// No word is consistent with the feedback recorded so far.
    #[error("no words remain that are consistent with the feedback")]
    VocabularyExhausted,

    #[error("all {0} rounds have been played")]
    RoundsExhausted(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
