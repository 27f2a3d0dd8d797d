// crates/analytics/src/sentiment.rs
//! Sentiment inference from category balance.
//!
//! Classification is rule-based over the category distribution — no text
//! analysis. Bug and performance notes lean negative, feature requests lean
//! positive, ux/other carry no polarity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::{CategoryCounts, NoteCategory};

/// Overall mood of a session's feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "lowercase")]
pub enum SentimentIndicator {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentIndicator::Positive => "positive",
            SentimentIndicator::Negative => "negative",
            SentimentIndicator::Neutral => "neutral",
            SentimentIndicator::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for SentimentIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Polarity lean of a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Fixed polarity table for the five categories.
pub fn category_polarity(category: NoteCategory) -> Polarity {
    match category {
        NoteCategory::Bug | NoteCategory::Performance => Polarity::Negative,
        NoteCategory::Feature => Polarity::Positive,
        NoteCategory::Ux | NoteCategory::Other => Polarity::Neutral,
    }
}

/// Classification thresholds (can be tuned).
pub mod thresholds {
    /// One side must outweigh the other by this factor to win outright.
    pub const DOMINANCE_RATIO: f64 = 2.0;
    /// Below this many polarity-bearing notes the indicator stays neutral.
    pub const MIN_SIGNAL_NOTES: usize = 2;
}

/// Sentiment tuning, built once and passed by reference into the trends
/// engine.
#[derive(Debug, Clone, Copy)]
pub struct SentimentConfig {
    pub dominance_ratio: f64,
    pub min_signal_notes: usize,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            dominance_ratio: thresholds::DOMINANCE_RATIO,
            min_signal_notes: thresholds::MIN_SIGNAL_NOTES,
        }
    }
}

impl SentimentConfig {
    /// Derive the indicator from a category tally.
    ///
    /// Monotonic by construction: with the positive count fixed, adding
    /// negative-leaning notes can only move the result along
    /// neutral → mixed → negative, never toward positive (and symmetrically
    /// for the positive side).
    pub fn indicator(&self, counts: &CategoryCounts) -> SentimentIndicator {
        let mut negative = 0;
        let mut positive = 0;
        for category in NoteCategory::ALL {
            match category_polarity(category) {
                Polarity::Negative => negative += counts.get(category),
                Polarity::Positive => positive += counts.get(category),
                Polarity::Neutral => {}
            }
        }

        // Too little polarity signal — a tiny session, or one dominated by
        // ux/other notes — reads as neutral.
        if negative + positive < self.min_signal_notes {
            return SentimentIndicator::Neutral;
        }

        let neg = negative as f64;
        let pos = positive as f64;
        if neg >= pos * self.dominance_ratio {
            SentimentIndicator::Negative
        } else if pos >= neg * self.dominance_ratio {
            SentimentIndicator::Positive
        } else {
            SentimentIndicator::Mixed
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(bug: usize, feature: usize, ux: usize, performance: usize, other: usize) -> CategoryCounts {
        CategoryCounts { bug, feature, ux, performance, other }
    }

    fn indicator(c: CategoryCounts) -> SentimentIndicator {
        SentimentConfig::default().indicator(&c)
    }

    #[test]
    fn test_empty_is_neutral() {
        assert_eq!(indicator(CategoryCounts::default()), SentimentIndicator::Neutral);
    }

    #[test]
    fn test_single_leaning_note_is_neutral() {
        // One bug alone is below the signal floor.
        assert_eq!(indicator(counts(1, 0, 0, 0, 0)), SentimentIndicator::Neutral);
        assert_eq!(indicator(counts(0, 1, 0, 0, 0)), SentimentIndicator::Neutral);
    }

    #[test]
    fn test_ux_and_other_carry_no_polarity() {
        assert_eq!(indicator(counts(0, 0, 12, 0, 7)), SentimentIndicator::Neutral);
    }

    #[test]
    fn test_bug_and_performance_lean_negative() {
        assert_eq!(indicator(counts(2, 0, 0, 0, 0)), SentimentIndicator::Negative);
        assert_eq!(indicator(counts(1, 0, 0, 1, 0)), SentimentIndicator::Negative);
        assert_eq!(indicator(counts(4, 2, 0, 0, 0)), SentimentIndicator::Negative);
    }

    #[test]
    fn test_features_lean_positive() {
        assert_eq!(indicator(counts(0, 3, 0, 0, 0)), SentimentIndicator::Positive);
        assert_eq!(indicator(counts(1, 2, 5, 0, 0)), SentimentIndicator::Positive);
    }

    #[test]
    fn test_even_mix_is_mixed() {
        assert_eq!(indicator(counts(1, 1, 0, 0, 0)), SentimentIndicator::Mixed);
        assert_eq!(indicator(counts(3, 2, 0, 0, 0)), SentimentIndicator::Mixed);
    }

    #[test]
    fn test_monotonic_in_negative_share() {
        // Walking bug count upward with features fixed must never move the
        // indicator back toward positive.
        let rank = |s: SentimentIndicator| match s {
            SentimentIndicator::Positive => 0,
            SentimentIndicator::Neutral | SentimentIndicator::Mixed => 1,
            SentimentIndicator::Negative => 2,
        };

        let mut previous = 0;
        for bugs in 0..20 {
            let current = rank(indicator(counts(bugs, 3, 0, 0, 0)));
            assert!(
                current >= previous,
                "indicator regressed toward positive at bugs={bugs}"
            );
            previous = current;
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SentimentIndicator::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(SentimentIndicator::Negative.to_string(), "negative");
    }
}
