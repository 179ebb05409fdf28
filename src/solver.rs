//! Round-by-round guess selection.
//!
//! Each round the solver scores every word still in the vocabulary with an
//! [`Estimator`] and plays the best one. The game's feedback then shrinks the
//! vocabulary to the words consistent with it, and the next round begins.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::feedback::FeedbackPattern;
use crate::goodness::{Estimator, GoodnessCalculator, KnownPositions};
use crate::matcher::matching_words;
use crate::vocabulary::Vocabulary;
use crate::word::Word;

/// A candidate guess with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub word: Word,
    pub goodness: f64,
}

/// The solver for one game.
#[derive(Debug, Clone)]
pub struct Solver<E = GoodnessCalculator> {
    config: SolverConfig,
    initial: Vocabulary,
    vocabulary: Vocabulary,
    known: KnownPositions,
    estimator: E,
    rounds_played: usize,
}

impl Solver<GoodnessCalculator> {
    pub fn new(config: SolverConfig, vocabulary: Vocabulary) -> Result<Self> {
        Self::with_estimator(config, vocabulary, GoodnessCalculator::new())
    }
}

impl<E: Estimator> Solver<E> {
    pub fn with_estimator(config: SolverConfig, vocabulary: Vocabulary, estimator: E) -> Result<Self> {
        config.validate()?;
        if vocabulary.word_length() != config.word_length {
            return Err(Error::InvalidArgument(format!(
                "vocabulary has {}-letter words but the solver is configured for {}",
                vocabulary.word_length(),
                config.word_length
            )));
        }
        Ok(Self {
            known: KnownPositions::none(config.word_length),
            initial: vocabulary.clone(),
            vocabulary,
            config,
            estimator,
            rounds_played: 0,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn remaining_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Rounds whose feedback has been applied.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn known_positions(&self) -> &KnownPositions {
        &self.known
    }

    /// Start a new game over the full vocabulary.
    pub fn reset(&mut self) {
        self.vocabulary = self.initial.clone();
        self.known = KnownPositions::none(self.config.word_length);
        self.rounds_played = 0;
    }

    /// True iff every symbol is `Match`.
    pub fn is_solved(&self, feedback: &FeedbackPattern) -> bool {
        feedback.is_solved()
    }

    /// The best opening guess.
    pub fn first_guess(&self) -> Result<Word> {
        self.pick()
    }

    /// Apply the feedback for `previous_guess`, then pick the next guess.
    pub fn next_guess(&mut self, previous_guess: &Word, feedback: &FeedbackPattern) -> Result<Word> {
        self.apply_feedback(previous_guess, feedback)?;
        if self.rounds_played >= self.config.max_rounds {
            return Err(Error::RoundsExhausted(self.config.max_rounds));
        }
        self.pick()
    }

    /// Shrink the vocabulary to the words consistent with `feedback`.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &FeedbackPattern) -> Result<()> {
        if guess.len() != self.config.word_length {
            return Err(Error::InvalidArgument(format!(
                "guess {guess} does not have {} letters",
                self.config.word_length
            )));
        }

        let keep: HashSet<Word> = matching_words(guess, feedback, &self.vocabulary)?
            .into_iter()
            .collect();
        self.known.merge(feedback)?;
        self.vocabulary.intersect(&keep);
        self.rounds_played += 1;

        info!(
            "round {}: {guess} {feedback}, {} word(s) remaining",
            self.rounds_played,
            self.vocabulary.len()
        );
        if self.vocabulary.len() <= 10 {
            debug!("remaining: {:?}", self.vocabulary.words());
        }

        if self.vocabulary.is_empty() {
            warn!("feedback {feedback} for {guess} left no candidate words");
            return Err(Error::VocabularyExhausted);
        }
        Ok(())
    }

    /// Goodness of every word in the vocabulary, in vocabulary order.
    pub fn scores(&self) -> Result<Vec<f64>> {
        let pool = self.vocabulary.words();
        let started = Instant::now();
        let scores = if self.config.parallel {
            pool.par_iter()
                .map(|guess| self.estimator.goodness(guess, &self.known, pool))
                .collect::<Result<Vec<_>>>()?
        } else {
            pool.iter()
                .map(|guess| self.estimator.goodness(guess, &self.known, pool))
                .collect::<Result<Vec<_>>>()?
        };
        debug!(
            "scored {} candidates with {} pinned position(s) in {:.2?}",
            pool.len(),
            self.known.pinned_count(),
            started.elapsed()
        );
        Ok(scores)
    }

    /// The word with the highest goodness; the first one wins ties.
    ///
    /// With a single word left it is returned without scoring anything.
    pub fn pick(&self) -> Result<Word> {
        match self.vocabulary.words() {
            [] => Err(Error::VocabularyExhausted),
            [only] => Ok(only.clone()),
            words => {
                let scores = self.scores()?;
                let mut best = 0;
                for (i, &score) in scores.iter().enumerate() {
                    if score > scores[best] {
                        best = i;
                    }
                }
                info!("best guess {} scores {:.4} bits", words[best], scores[best]);
                Ok(words[best].clone())
            }
        }
    }

    /// The `n` best guesses, highest goodness first.
    pub fn rank(&self, n: usize) -> Result<Vec<Ranked>> {
        let words = self.vocabulary.words();
        if words.len() == 1 {
            let mut ranked = vec![Ranked {
                word: words[0].clone(),
                goodness: 0.0,
            }];
            ranked.truncate(n);
            return Ok(ranked);
        }

        let mut ranked: Vec<Ranked> = words
            .iter()
            .cloned()
            .zip(self.scores()?)
            .map(|(word, goodness)| Ranked { word, goodness })
            .collect();
        ranked.sort_by(|a, b| {
            b.goodness
                .partial_cmp(&a.goodness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Play a whole game, asking `get_feedback` for the result of each guess.
    ///
    /// Stops when a guess is solved or the round budget is spent. Returns the
    /// guesses made with their feedback.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Vec<(Word, FeedbackPattern)>>
    where
        F: FnMut(&Word) -> Result<FeedbackPattern>,
    {
        let mut guesses = Vec::new();
        let mut guess = self.pick()?;

        loop {
            let pattern = get_feedback(&guess)?;
            let solved = pattern.is_solved();
            guesses.push((guess.clone(), pattern.clone()));

            if solved || guesses.len() >= self.config.max_rounds {
                break;
            }

            guess = self.next_guess(&guess, &pattern)?;
        }

        Ok(guesses)
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Result<Vec<(Word, FeedbackPattern)>> {
        self.solve_with_feedback(|guess| FeedbackPattern::score(guess, target))
    }
}
