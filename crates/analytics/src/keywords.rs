// crates/analytics/src/keywords.rs
//! Keyword extraction from free-text transcripts.
//!
//! Tokenization is deliberately simple: lowercase, strip punctuation, split
//! on whitespace, drop short tokens and stop words. Frequency counting and
//! deduplication are the caller's job — the agreement and trends engines
//! count the same token stream differently on purpose.

use std::collections::HashSet;

/// Common-English structural words excluded from keyword analysis: articles,
/// pronouns, auxiliary verbs, and the filler vocabulary of spoken feedback
/// (transcripts drop apostrophes, hence `dont`, `im`, `theres`).
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
    "shall", "can", "need", "dare", "ought", "used", "it", "its", "this", "that",
    "these", "those", "i", "you", "he", "she", "we", "they", "what", "which", "who",
    "whom", "whose", "where", "when", "why", "how", "all", "each", "every", "both",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "just", "also", "now", "here", "there", "then",
    "once", "if", "because", "until", "while", "although", "though", "after", "before",
    "above", "below", "up", "down", "out", "off", "over", "under", "again", "further",
    "into", "through", "during", "about", "against", "between", "without", "being",
    "having", "doing", "said", "says", "like", "get", "got", "going", "goes", "went",
    "think", "know", "see", "come", "came", "make", "made", "take", "took", "want",
    "really", "thing", "things", "something", "anything", "everything", "nothing",
    "someone", "anyone", "everyone", "im", "dont", "doesnt", "didnt", "cant", "wont",
    "youre", "theyre", "hes", "shes", "thats", "whats", "theres",
];

/// Tokens shorter than this are noise ("ok", "a", "it") and are dropped.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Tokenizer configuration, built once and passed by reference into the
/// engines. Holds the stop-word set as an immutable value — no globals.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<&'static str>,
    min_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied().collect(), MIN_KEYWORD_LEN)
    }
}

impl KeywordExtractor {
    pub fn new(stop_words: HashSet<&'static str>, min_len: usize) -> Self {
        Self { stop_words, min_len }
    }

    /// Extract normalized keywords from `text`, in source order.
    ///
    /// Duplicates are preserved; identical input always yields identical
    /// output. Empty input yields an empty vec.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        // Strip punctuation rather than splitting on it, so contractions
        // collapse the same way the transcripts store them ("don't" → "dont").
        let normalized: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        normalized
            .split_whitespace()
            .filter(|word| {
                word.chars().count() >= self.min_len && !self.stop_words.contains(*word)
            })
            .map(str::to_string)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
