// crates/analytics/src/quality.rs
//! Content quality and participation metrics: how substantial the collected
//! feedback is, and how much of the tester pool actually contributed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::Session;

/// Content quality fragment of the analytics payload. All rates are
/// percentages over the session's note count and are `0.0` for a session
/// without notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ContentQualityMetrics {
    /// Mean word count of the notes' effective text, rounded.
    pub average_note_length: u32,
    /// Share of notes whose category came from the upstream classifier.
    pub auto_classification_rate: f64,
    /// Share of notes with a recorded audio clip.
    pub audio_coverage: f64,
    /// Share of notes with a per-note AI summary.
    pub ai_summary_coverage: f64,
    /// Share of notes whose transcript the tester actually changed.
    pub edit_rate: f64,
    pub total_notes: usize,
}

impl ContentQualityMetrics {
    fn empty() -> Self {
        Self {
            average_note_length: 0,
            auto_classification_rate: 0.0,
            audio_coverage: 0.0,
            ai_summary_coverage: 0.0,
            edit_rate: 0.0,
            total_notes: 0,
        }
    }
}

/// Compute content quality metrics for one session.
pub fn content_quality(session: &Session) -> ContentQualityMetrics {
    let total_notes = session.notes.len();
    if total_notes == 0 {
        return ContentQualityMetrics::empty();
    }

    let total_words: usize = session
        .notes
        .iter()
        .map(|n| n.effective_text().split_whitespace().count())
        .sum();
    let average_note_length = (total_words as f64 / total_notes as f64).round() as u32;

    let rate = |count: usize| 100.0 * count as f64 / total_notes as f64;

    let auto_classified = session.notes.iter().filter(|n| n.auto_classified).count();
    let with_audio = session
        .notes
        .iter()
        .filter(|n| n.audio_url.as_deref().is_some_and(|u| !u.is_empty()))
        .count();
    let with_summary = session
        .notes
        .iter()
        .filter(|n| n.ai_summary.as_deref().is_some_and(|s| !s.is_empty()))
        .count();
    let edited = session.notes.iter().filter(|n| n.was_edited()).count();

    ContentQualityMetrics {
        average_note_length,
        auto_classification_rate: rate(auto_classified),
        audio_coverage: rate(with_audio),
        ai_summary_coverage: rate(with_summary),
        edit_rate: rate(edited),
        total_notes,
    }
}

/// Percentage of the session's testers who left at least one note; `0.0`
/// when the session has no testers.
pub fn participation_rate(session: &Session) -> f64 {
    if session.testers.is_empty() {
        return 0.0;
    }
    let active: HashSet<&str> = session.notes.iter().map(|n| n.tester_id.as_str()).collect();
    let contributed = session
        .testers
        .iter()
        .filter(|t| active.contains(t.id.as_str()))
        .count();
    100.0 * contributed as f64 / session.testers.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
