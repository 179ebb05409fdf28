//! The set of words still in play.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::word::Word;

/// Unique words of one fixed length, iterated in insertion order.
///
/// A vocabulary never grows after it is built; it only shrinks through
/// [`intersect`](Vocabulary::intersect).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_length: usize,
    words: Vec<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates after their first occurrence.
    ///
    /// Every word must have `word_length` letters.
    pub fn new<I>(word_length: usize, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for word in words {
            if word.len() != word_length {
                return Err(Error::InvalidArgument(format!(
                    "{word} does not have {word_length} letters"
                )));
            }
            if seen.insert(word.clone()) {
                kept.push(word);
            }
        }
        Ok(Self {
            word_length,
            words: kept,
        })
    }

    /// Convenience constructor from string slices.
    pub fn from_strs<I, S>(word_length: usize, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(word_length, words)
    }

    /// Read one word per line, keeping only lines that pass [`is_playable`].
    ///
    /// Lines that are not valid UTF-8 are skipped.
    pub fn from_reader<R: BufRead>(word_length: usize, reader: R) -> Result<Self> {
        let mut words = Vec::new();
        let mut skipped = 0usize;
        for (number, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = match std::str::from_utf8(&raw) {
                Ok(line) => line.trim(),
                Err(_) => {
                    debug!("skipping line {} of the dictionary: not UTF-8", number + 1);
                    skipped += 1;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            if !is_playable(line, word_length) {
                skipped += 1;
                continue;
            }
            words.push(Word::new(line)?);
        }
        debug!("skipped {skipped} unplayable dictionary entries");
        let vocabulary = Self::new(word_length, words)?;
        info!(
            "vocabulary has {} {}-letter words",
            vocabulary.len(),
            word_length
        );
        Ok(vocabulary)
    }

    pub fn load(word_length: usize, path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(word_length, BufReader::new(file))
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in insertion order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Keep only the words that are also in `keep`, preserving order.
    pub fn intersect(&mut self, keep: &HashSet<Word>) {
        self.words.retain(|word| keep.contains(word));
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Whether a raw dictionary entry is a playable word of `word_length` letters.
///
/// Proper nouns (leading capital) and anything with punctuation, such as
/// possessives, are rejected.
pub fn is_playable(entry: &str, word_length: usize) -> bool {
    entry.len() == word_length
        && entry.bytes().all(|b| b.is_ascii_alphabetic())
        && !entry.starts_with(|c: char| c.is_ascii_uppercase())
}
