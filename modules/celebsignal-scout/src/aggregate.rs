use celebsignal_common::Label;

use crate::scoring::PolarityScorer;
use crate::text::normalize;

/// Per-polarity post counts for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    pub fn new(positive: u32, neutral: u32, negative: u32) -> Self {
        Self {
            positive,
            neutral,
            negative,
        }
    }

    pub fn record(&mut self, polarity: f64) {
        if polarity > 0.0 {
            self.positive += 1;
        } else if polarity == 0.0 {
            self.neutral += 1;
        } else {
            self.negative += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }

    /// Majority vote. Ties go to positive, then neutral.
    pub fn label(&self) -> Label {
        if self.positive >= self.neutral && self.positive >= self.negative {
            Label::Positive
        } else if self.neutral >= self.positive && self.neutral >= self.negative {
            Label::Neutral
        } else {
            Label::Negative
        }
    }
}

/// Outcome of scoring one subject's post batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub label: Label,
    pub counts: SentimentCounts,
}

/// Reduce a batch of post texts to a single label. An empty batch is `NA`
/// and nothing is scored.
pub fn aggregate<S, P>(posts: &[S], scorer: &P) -> Aggregate
where
    S: AsRef<str>,
    P: PolarityScorer + ?Sized,
{
    if posts.is_empty() {
        return Aggregate {
            label: Label::NotAvailable,
            counts: SentimentCounts::default(),
        };
    }

    let mut counts = SentimentCounts::default();
    for post in posts {
        counts.record(scorer.score(&normalize(post.as_ref())));
    }

    Aggregate {
        label: counts.label(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingScorer {
        calls: AtomicUsize,
    }

    impl PolarityScorer for CountingScorer {
        fn score(&self, _text: &str) -> f64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            0.0
        }
    }

    /// "up" scores positive, "down" negative, anything else zero.
    struct KeywordScorer;

    impl PolarityScorer for KeywordScorer {
        fn score(&self, text: &str) -> f64 {
            match text {
                "up" => 0.5,
                "down" => -0.5,
                _ => 0.0,
            }
        }
    }

    #[test]
    fn empty_batch_is_not_available_and_scores_nothing() {
        let scorer = CountingScorer {
            calls: AtomicUsize::new(0),
        };
        let posts: Vec<String> = Vec::new();
        let result = aggregate(&posts, &scorer);
        assert_eq!(result.label, Label::NotAvailable);
        assert_eq!(result.counts.total(), 0);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn tie_breaks_favor_positive_then_neutral() {
        assert_eq!(SentimentCounts::new(3, 3, 0).label(), Label::Positive);
        assert_eq!(SentimentCounts::new(0, 3, 3).label(), Label::Neutral);
        assert_eq!(SentimentCounts::new(3, 0, 3).label(), Label::Positive);
        assert_eq!(SentimentCounts::new(2, 2, 2).label(), Label::Positive);
    }

    #[test]
    fn clear_majorities_win() {
        assert_eq!(SentimentCounts::new(1, 5, 2).label(), Label::Neutral);
        assert_eq!(SentimentCounts::new(1, 2, 5).label(), Label::Negative);
        assert_eq!(SentimentCounts::new(4, 1, 3).label(), Label::Positive);
    }

    #[test]
    fn record_buckets_by_sign() {
        let mut counts = SentimentCounts::default();
        for p in [0.9, 0.0001, 0.0, -0.0, -0.2] {
            counts.record(p);
        }
        assert_eq!(counts, SentimentCounts::new(2, 2, 1));
    }

    #[test]
    fn posts_are_normalized_before_scoring() {
        let posts = ["@fan DOWN!!", "down https://t.co/x", "up"];
        // "DOWN" is not "down", so it lands as neutral.
        let result = aggregate(&posts, &KeywordScorer);
        assert_eq!(result.counts, SentimentCounts::new(1, 1, 1));
        assert_eq!(result.label, Label::Positive);
    }

    #[test]
    fn aggregate_is_deterministic() {
        let posts = vec!["up".to_string(), "down".to_string(), "down".to_string()];
        let first = aggregate(&posts, &KeywordScorer);
        let second = aggregate(&posts, &KeywordScorer);
        assert_eq!(first, second);
        assert_eq!(first.label, Label::Negative);
    }
}
