// crates/analytics/src/trends.rs
//! Corpus-wide keyword frequency, theme segmentation of the AI summary, and
//! the sentiment indicator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::{CategoryCounts, Session};

use crate::keywords::KeywordExtractor;
use crate::sentiment::{SentimentConfig, SentimentIndicator};

/// Trends fragment of the analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TrendsAndThemes {
    /// Raw occurrence counts over every note's effective text — deliberately
    /// not deduplicated per tester, unlike the agreement engine's counting.
    pub top_keywords: Vec<KeywordFrequency>,
    /// Discrete insight lines segmented out of the session's AI summary, in
    /// source order. Empty when no summary was supplied.
    pub themes: Vec<String>,
    pub sentiment_indicator: SentimentIndicator,
}

/// One keyword with its total occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct KeywordFrequency {
    pub word: String,
    pub count: usize,
}

/// Minimum characters for a summary line to count as a theme. Shorter lines
/// are headings, stray markers, or blank separators.
const MIN_THEME_LEN: usize = 10;

/// Compute the trends fragment for one session.
pub fn trends(
    session: &Session,
    extractor: &KeywordExtractor,
    sentiment: &SentimentConfig,
) -> TrendsAndThemes {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for note in &session.notes {
        for word in extractor.extract(note.effective_text()) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut top_keywords: Vec<KeywordFrequency> = counts
        .into_iter()
        .map(|(word, count)| KeywordFrequency { word, count })
        .collect();
    top_keywords.sort_by(|a, b| b.count.cmp(&a.count).then(a.word.cmp(&b.word)));

    let themes = session
        .ai_summary
        .as_deref()
        .map(segment_themes)
        .unwrap_or_default();

    let tally = CategoryCounts::tally(session.notes.iter().map(|n| n.category));

    TrendsAndThemes {
        top_keywords,
        themes,
        sentiment_indicator: sentiment.indicator(&tally),
    }
}

/// Segment an externally generated summary into discrete theme lines.
///
/// Structural only — lines are trimmed, stripped of a leading bullet or
/// number marker, and kept when they are long enough to carry content. No
/// text is generated or reworded.
pub fn segment_themes(summary: &str) -> Vec<String> {
    summary
        .lines()
        .filter_map(|line| {
            let line = strip_list_marker(line.trim());
            (line.chars().count() >= MIN_THEME_LEN).then(|| line.to_string())
        })
        .collect()
}

/// Strip a leading `- ` / `* ` / `• ` bullet or a `1.` / `2)` number marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', '•']).trim_start();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        if let Some(rest) = rest.strip_prefix(['.', ')']) {
            return rest.trim_start();
        }
    }
    line
}

// ============================================================================
// Tests
// ============================================================================
