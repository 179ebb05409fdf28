//! Expected information gain of a guess.
//!
//! Since the target is unknown, every feedback pattern a guess could receive
//! is tried. Each pattern splits the candidates into the words it matches and
//! the rest; the entropy of that split is how much seeing (or not seeing) the
//! pattern tells us. A guess's goodness is the mean over all patterns.

use crate::entropy::entropy;
use crate::error::{Error, Result};
use crate::feedback::{Feedback, FeedbackPattern};
use crate::matcher::count_matching;
use crate::word::Word;

/// Positions already known to be `Match` from earlier rounds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnownPositions(Vec<bool>);

impl KnownPositions {
    /// Nothing known yet for words of `len` letters.
    pub fn none(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// Pin the `Match` positions of a pattern.
    pub fn from_pattern(pattern: &[Feedback]) -> Self {
        Self(pattern.iter().map(|&f| f == Feedback::Match).collect())
    }

    /// Also pin the `Match` positions of `pattern`.
    pub fn merge(&mut self, pattern: &[Feedback]) -> Result<()> {
        if pattern.len() != self.0.len() {
            return Err(Error::InvalidArgument(format!(
                "pattern has {} colors but {} positions are tracked",
                pattern.len(),
                self.0.len()
            )));
        }
        for (pinned, &feedback) in self.0.iter_mut().zip(pattern) {
            *pinned |= feedback == Feedback::Match;
        }
        Ok(())
    }

    pub fn is_pinned(&self, position: usize) -> bool {
        self.0.get(position).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pinned_count(&self) -> usize {
        self.0.iter().filter(|&&p| p).count()
    }
}

/// A single letter cannot be elsewhere in the word when every other
/// position already holds its correct letter.
fn is_reachable(pattern: &[Feedback]) -> bool {
    let matches = pattern.iter().filter(|&&f| f == Feedback::Match).count();
    let present = pattern.iter().any(|&f| f == Feedback::Present);
    !(matches + 1 == pattern.len() && present)
}

fn walk<F>(known: &KnownPositions, index: usize, outcome: &mut [Feedback], visit: &mut F)
where
    F: FnMut(&[Feedback]),
{
    if index == outcome.len() {
        if is_reachable(outcome) {
            visit(outcome);
        }
        return;
    }

    if known.is_pinned(index) {
        walk(known, index + 1, outcome, visit);
        return;
    }

    for feedback in [Feedback::Present, Feedback::Match, Feedback::Absent] {
        outcome[index] = feedback;
        walk(known, index + 1, outcome, visit);
    }
}

/// Call `visit` with every pattern a guess could receive.
///
/// Pinned positions stay `Match`; every other position takes each of
/// `Present`, `Match` and `Absent`. Patterns with exactly one non-`Match`
/// position that is `Present` are skipped.
pub fn for_each_outcome<F>(known: &KnownPositions, mut visit: F)
where
    F: FnMut(&[Feedback]),
{
    let mut outcome: Vec<Feedback> = (0..known.len())
        .map(|i| {
            if known.is_pinned(i) {
                Feedback::Match
            } else {
                Feedback::Absent
            }
        })
        .collect();
    walk(known, 0, &mut outcome, &mut visit);
}

/// All the patterns [`for_each_outcome`] visits, in visiting order.
pub fn outcomes(known: &KnownPositions) -> Vec<FeedbackPattern> {
    let mut all = Vec::new();
    for_each_outcome(known, |outcome| all.push(FeedbackPattern::new(outcome.to_vec())));
    all
}

/// Scores candidate guesses against a pool of possible targets.
pub trait Estimator: Sync {
    /// Expected information, in bits, from playing `guess` when the target is
    /// one of `pool` and the `known` positions are already solved.
    fn goodness(&self, guess: &Word, known: &KnownPositions, pool: &[Word]) -> Result<f64>;
}

/// The mean-entropy estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodnessCalculator;

impl GoodnessCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Entropy of every reachable pattern for `guess`, in enumeration order.
    ///
    /// `pool_size` is the number of equally likely targets; it is normally
    /// `pool.len()`.
    pub fn entropies(
        &self,
        guess: &Word,
        known: &KnownPositions,
        pool: &[Word],
        pool_size: usize,
    ) -> Result<Vec<f64>> {
        if known.len() != guess.len() {
            return Err(Error::InvalidArgument(format!(
                "guess {guess} has {} letters but {} positions are tracked",
                guess.len(),
                known.len()
            )));
        }

        let mut entropies = Vec::new();
        let mut failure = None;
        for_each_outcome(known, |outcome| {
            if failure.is_some() {
                return;
            }
            match count_matching(guess, outcome, pool) {
                Ok(matching) => entropies.push(entropy(matching, pool_size)),
                Err(e) => failure = Some(e),
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(entropies),
        }
    }
}

impl Estimator for GoodnessCalculator {
    fn goodness(&self, guess: &Word, known: &KnownPositions, pool: &[Word]) -> Result<f64> {
        let entropies = self.entropies(guess, known, pool, pool.len())?;
        if entropies.is_empty() {
            return Ok(0.0);
        }
        Ok(entropies.iter().sum::<f64>() / entropies.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Feedback::{Absent, Match, Present};

    #[test]
    fn last_free_letter_cannot_be_present() {
        assert!(!is_reachable(&[Match, Match, Present]));
        assert!(is_reachable(&[Match, Match, Absent]));
        assert!(is_reachable(&[Match, Present, Present]));
        assert!(!is_reachable(&[Present]));
    }

    #[test]
    fn merge_accumulates_pins() {
        let mut known = KnownPositions::none(3);
        known.merge(&[Match, Absent, Absent]).unwrap();
        known.merge(&[Absent, Absent, Match]).unwrap();
        assert!(known.is_pinned(0));
        assert!(!known.is_pinned(1));
        assert!(known.is_pinned(2));
        assert!(known.merge(&[Match]).is_err());
    }
}
