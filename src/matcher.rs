//! Finds the words that could have produced a feedback pattern.
//!
//! A pattern is read left to right while tallying, per letter, how many
//! occurrences the target is known to have and whether that count is final:
//!
//! - `Absent` freezes the letter's count at what has been credited so far.
//! - `Present` credits one more occurrence, unless the letter is already
//!   frozen. A `Present` after an `Absent` of the same letter is never what
//!   the game emits (it credits the leftmost copies first), so such a
//!   pattern matches nothing.
//! - `Match` always credits one more occurrence.
//!
//! Letter counts are checked before positions, since the per-position
//! exclusions alone would wrongly reject words with repeated letters.

use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::word::{letter_index, Word};
use crate::ALPHABET_SIZE;

/// How many times a letter must occur in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occurrence {
    AtLeast(usize),
    Exactly(usize),
}

/// The restrictions a guess and its feedback place on the target word.
#[derive(Debug, Clone)]
pub struct Constraints {
    letters: Vec<(usize, Occurrence)>,
    positions: Vec<(usize, u8, bool)>,
}

impl Constraints {
    /// Compile a guess and pattern.
    ///
    /// Returns `Ok(None)` when the pattern is not in canonical form and so
    /// can match no word.
    pub fn compile(guess: &Word, pattern: &[Feedback]) -> Result<Option<Self>> {
        if guess.len() != pattern.len() {
            return Err(Error::InvalidArgument(format!(
                "guess {guess} has {} letters but the pattern has {} colors",
                guess.len(),
                pattern.len()
            )));
        }

        let mut occurrence = [0usize; ALPHABET_SIZE];
        let mut frozen = [false; ALPHABET_SIZE];
        for (&letter, &feedback) in guess.as_bytes().iter().zip(pattern) {
            let idx = letter_index(letter);
            match feedback {
                Feedback::Absent => frozen[idx] = true,
                Feedback::Present if frozen[idx] => return Ok(None),
                Feedback::Present | Feedback::Match => occurrence[idx] += 1,
            }
        }

        let letters = (0..ALPHABET_SIZE)
            .filter_map(|idx| match (occurrence[idx], frozen[idx]) {
                (0, false) => None,
                (n, true) => Some((idx, Occurrence::Exactly(n))),
                (n, false) => Some((idx, Occurrence::AtLeast(n))),
            })
            .collect();

        let positions = guess
            .as_bytes()
            .iter()
            .zip(pattern)
            .enumerate()
            .map(|(i, (&letter, &feedback))| (i, letter, feedback == Feedback::Match))
            .collect();

        Ok(Some(Self { letters, positions }))
    }

    /// Whether `word` could be the target.
    pub fn admits(&self, word: &Word) -> bool {
        let counts_fit = self.letters.iter().all(|&(idx, occurrence)| {
            let count = word.count_by_index(idx);
            match occurrence {
                Occurrence::Exactly(n) => count == n,
                Occurrence::AtLeast(n) => count >= n,
            }
        });
        counts_fit
            && self
                .positions
                .iter()
                .all(|&(i, letter, must_match)| (word.letter_at(i) == Some(letter)) == must_match)
    }
}

/// The words in `pool` for which playing `guess` yields `pattern`.
///
/// Pool order is preserved. An impossible pattern yields an empty list.
pub fn matching_words<'a, I>(guess: &Word, pattern: &[Feedback], pool: I) -> Result<Vec<Word>>
where
    I: IntoIterator<Item = &'a Word>,
{
    Ok(match Constraints::compile(guess, pattern)? {
        Some(constraints) => pool
            .into_iter()
            .filter(|word| constraints.admits(word))
            .cloned()
            .collect(),
        None => Vec::new(),
    })
}

/// Like [`matching_words`], but only counts.
pub fn count_matching<'a, I>(guess: &Word, pattern: &[Feedback], pool: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Word>,
{
    Ok(match Constraints::compile(guess, pattern)? {
        Some(constraints) => pool
            .into_iter()
            .filter(|word| constraints.admits(word))
            .count(),
        None => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Feedback::{Absent, Match, Present};

    #[test]
    fn present_after_absent_is_not_canonical() {
        let guess = Word::new("cca").unwrap();
        assert!(Constraints::compile(&guess, &[Absent, Present, Present])
            .unwrap()
            .is_none());
        assert!(Constraints::compile(&guess, &[Present, Absent, Present])
            .unwrap()
            .is_some());
    }

    #[test]
    fn match_after_absent_sets_exact_count() {
        let guess = Word::new("bba").unwrap();
        let constraints = Constraints::compile(&guess, &[Absent, Match, Present])
            .unwrap()
            .unwrap();
        assert!(constraints
            .letters
            .contains(&(letter_index(b'b'), Occurrence::Exactly(1))));
        assert!(constraints
            .letters
            .contains(&(letter_index(b'a'), Occurrence::AtLeast(1))));
    }
}
