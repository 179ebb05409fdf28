//! Feedback symbols and patterns.
//!
//! This module covers the per-letter feedback the game reports for a guess,
//! the text encoding used to enter it (`G`, `Y`, `-`), and the game-side rule
//! that produces a pattern from a guess and a known target.

use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};
use crate::word::{letter_index, Word};
use crate::ALPHABET_SIZE;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Match,
    /// Letter occurs in the target, but not here (yellow)
    Present,
    /// Letter does not occur, at least not this many times (gray)
    Absent,
}

impl Feedback {
    /// Character used when entering or printing feedback
    pub fn symbol(self) -> char {
        match self {
            Feedback::Match => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => '-',
        }
    }

    pub fn emoji(self) -> char {
        match self {
            Feedback::Match => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (G/g = green, Y/y = yellow, - = gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' => Some(Feedback::Match),
            'Y' | 'y' => Some(Feedback::Present),
            '-' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// Why a line of user input is not a feedback pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFeedbackError {
    #[error("exactly {expected} colors are required, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("'{0}' is not a valid color")]
    InvalidSymbol(char),
}

/// One feedback symbol per letter of a guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    pub fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// The winning pattern for words of `len` letters.
    pub fn all_match(len: usize) -> Self {
        Self(vec![Feedback::Match; len])
    }

    /// Calculate the feedback pattern the game emits for a guess against a target.
    ///
    /// Matches are credited first. Remaining guess letters are then credited
    /// left to right as `Present` while unmatched copies remain in the target,
    /// so of several equivalent colorings only the canonical one is produced.
    pub fn score(guess: &Word, target: &Word) -> Result<Self> {
        if guess.len() != target.len() {
            return Err(Error::InvalidArgument(format!(
                "guess {guess} and target {target} differ in length"
            )));
        }
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.as_bytes();

        let mut feedback = vec![Feedback::Absent; guess.len()];
        let mut target_remaining = [0u8; ALPHABET_SIZE];

        for i in 0..guess_bytes.len() {
            if guess_bytes[i] == target_bytes[i] {
                feedback[i] = Feedback::Match;
            } else {
                target_remaining[letter_index(target_bytes[i])] += 1;
            }
        }

        for i in 0..guess_bytes.len() {
            if feedback[i] != Feedback::Match {
                let idx = letter_index(guess_bytes[i]);
                if target_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Ok(Self(feedback))
    }

    /// Check if this pattern represents a win (all Match)
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Match)
    }

    /// Parse a pattern like "--Y-G" for words of `len` letters.
    pub fn parse(s: &str, len: usize) -> Result<Self, ParseFeedbackError> {
        let s = s.trim();
        let found = s.chars().count();
        if found != len {
            return Err(ParseFeedbackError::WrongLength {
                expected: len,
                found,
            });
        }
        s.chars()
            .map(|c| Feedback::from_char(c).ok_or(ParseFeedbackError::InvalidSymbol(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl Deref for FeedbackPattern {
    type Target = [Feedback];

    fn deref(&self) -> &[Feedback] {
        &self.0
    }
}

impl From<Vec<Feedback>> for FeedbackPattern {
    fn from(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }
}

impl FromIterator<Feedback> for FeedbackPattern {
    fn from_iter<I: IntoIterator<Item = Feedback>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}
