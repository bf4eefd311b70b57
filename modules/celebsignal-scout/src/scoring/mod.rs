//! Per-text polarity scoring.
//!
//! The pipeline only depends on [`PolarityScorer`]; [`LexiconScorer`] is the
//! built-in implementation (word averaging with negation and intensifiers).

mod lexicon;

use std::collections::{HashMap, HashSet};

/// Scores a single (already normalized) text in `[-1.0, 1.0]`.
/// Must return the same value for the same input within a run.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            words: lexicon::WORDS
                .iter()
                .map(|(w, p)| (w.to_string(), *p))
                .collect(),
            intensifiers: lexicon::INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
            negations: lexicon::NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl LexiconScorer {
    /// Add or override a word's polarity (clamped to `[-1, 1]`).
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut hits: Vec<f64> = Vec::new();
        let mut multiplier: Option<f64> = None;
        let mut negated = false;

        for token in text.split_whitespace() {
            let word = token.to_lowercase();

            // A sentiment word wins over its modifier role ("super", "so good").
            if let Some(&polarity) = self.words.get(&word) {
                if multiplier.is_none() || !self.intensifiers.contains_key(&word) {
                    let mut value = polarity * multiplier.take().unwrap_or(1.0);
                    if negated {
                        value *= lexicon::NEGATION_FACTOR;
                        negated = false;
                    }
                    hits.push(value.clamp(-1.0, 1.0));
                    continue;
                }
            }

            if let Some(&m) = self.intensifiers.get(&word) {
                multiplier = Some(multiplier.unwrap_or(1.0) * m);
            } else if self.negations.contains(&word) {
                negated = !negated;
            }
        }

        if hits.is_empty() {
            return 0.0;
        }
        (hits.iter().sum::<f64>() / hits.len() as f64).clamp(-1.0, 1.0)
    }
}
