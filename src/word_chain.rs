//! Word-chain puzzle: transform one word into another through a fixed
//! vocabulary, one move at a time.
//!
//! A move either substitutes a single letter or transposes two adjacent
//! letters; the result must be a different word contained in the
//! vocabulary.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;

/// A word-chain configuration: the word reached so far, the word aimed
/// for, and the vocabulary every intermediate word must belong to.
///
/// Words are lowercase; substitutions draw from `a..=z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordChainPuzzle {
    word: String,
    target: String,
    vocabulary: HashSet<String>,
}

impl WordChainPuzzle {
    pub fn new(word: String, target: String, vocabulary: HashSet<String>) -> Self {
        Self {
            word,
            target,
            vocabulary,
        }
    }

    /// The configuration reached by moving to `word`.
    fn step(&self, word: String) -> Self {
        Self {
            word,
            target: self.target.clone(),
            vocabulary: self.vocabulary.clone(),
        }
    }
}

impl Puzzle for WordChainPuzzle {
    fn is_solved(&self) -> bool {
        self.word == self.target
    }

    fn fail_fast(&self) -> bool {
        // moves preserve word length, so a length mismatch can never be
        // reconciled
        self.word.chars().count() != self.target.chars().count()
    }

    fn extensions(&self) -> Vec<Option<Self>> {
        let mut out = Vec::new();
        let letters: Vec<char> = self.word.chars().collect();

        // single-letter substitutions, position-major then a..=z
        for i in 0..letters.len() {
            for letter in 'a'..='z' {
                if letter == letters[i] {
                    continue;
                }
                let mut candidate = letters.clone();
                candidate[i] = letter;
                let word: String = candidate.into_iter().collect();
                if self.vocabulary.contains(&word) {
                    out.push(Some(self.step(word)));
                }
            }
        }

        // adjacent transpositions
        for i in 0..letters.len().saturating_sub(1) {
            let mut candidate = letters.clone();
            candidate.swap(i, i + 1);
            let word: String = candidate.into_iter().collect();
            if word != self.word && self.vocabulary.contains(&word) {
                out.push(Some(self.step(word)));
            }
        }

        out
    }

    fn signature(&self) -> String {
        self.word.clone()
    }
}
