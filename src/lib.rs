//! # Wordle Solver
//!
//! Picks guesses for Wordle-style games by expected information gain.
//!
//! The [`matcher`] decides which words are consistent with a guess and its
//! feedback, handling repeated letters the way the game colors them. The
//! [`goodness`] estimator tries every feedback pattern a guess could receive
//! and averages the [`entropy`] of the split each one induces. The
//! [`Solver`] plays the best-scoring word each round and shrinks the
//! [`Vocabulary`] with the feedback it gets back.

pub mod config;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod goodness;
pub mod matcher;
pub mod solver;
pub mod vocabulary;
pub mod word;

pub use config::SolverConfig;
pub use entropy::entropy;
pub use error::{Error, Result};
pub use feedback::{Feedback, FeedbackPattern, ParseFeedbackError};
pub use goodness::{Estimator, GoodnessCalculator, KnownPositions};
pub use matcher::{count_matching, matching_words};
pub use solver::{Ranked, Solver};
pub use vocabulary::Vocabulary;
pub use word::Word;

/// Word length for standard Wordle
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Letters `a` through `z`.
pub const ALPHABET_SIZE: usize = 26;
