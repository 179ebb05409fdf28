use crate::error::{Error, Result};
use crate::DEFAULT_WORD_LENGTH;

/// Rounds the game allows by default.
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Settings for one solving session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_length: usize,
    pub max_rounds: usize,
    /// Score candidates on the rayon pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_rounds: DEFAULT_MAX_ROUNDS,
            parallel: true,
        }
    }
}

impl SolverConfig {
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(Error::InvalidConfig("word length must be positive".into()));
        }
        if self.max_rounds == 0 {
            return Err(Error::InvalidConfig("at least one round is required".into()));
        }
        Ok(())
    }
}
