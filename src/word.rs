//! Words and their per-letter counts.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::ALPHABET_SIZE;

/// Index of a lowercase ASCII letter in the alphabet.
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// A lowercase word.
///
/// The number of times each letter occurs is computed once on construction,
/// so occurrence checks during matching never rescan the word.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    letters: Box<str>,
    counts: [u8; ALPHABET_SIZE],
}

impl Word {
    /// Build a word from ASCII letters, lowercasing them.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidWord(text.to_string()));
        }
        let letters: Box<str> = text.to_ascii_lowercase().into_boxed_str();
        let mut counts = [0u8; ALPHABET_SIZE];
        for b in letters.bytes() {
            counts[letter_index(b)] = counts[letter_index(b)].saturating_add(1);
        }
        Ok(Self { letters, counts })
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.letters.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at `position`, if the word is that long.
    #[inline]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.as_bytes().get(position).copied()
    }

    /// How many times `letter` occurs in the word.
    #[inline]
    pub fn count(&self, letter: u8) -> usize {
        self.counts[letter_index(letter)] as usize
    }

    #[inline]
    pub(crate) fn count_by_index(&self, index: usize) -> usize {
        self.counts[index] as usize
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.count(letter) > 0
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let word = Word::new("geese").unwrap();
        assert_eq!(word.count(b'e'), 3);
        assert_eq!(word.count(b'g'), 1);
        assert_eq!(word.count(b'z'), 0);
        assert!(word.contains(b's'));
    }

    #[test]
    fn lowercases_input() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.letter_at(0), Some(b'c'));
        assert_eq!(word.letter_at(5), None);
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(Word::new("it's"), Err(Error::InvalidWord(_))));
        assert!(matches!(Word::new(""), Err(Error::InvalidWord(_))));
        assert!(matches!(Word::new("naïve"), Err(Error::InvalidWord(_))));
    }
}
