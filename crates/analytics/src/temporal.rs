// crates/analytics/src/temporal.rs
//! When in the session the feedback arrived: duration, quarter-by-quarter
//! note volume, and early-vs-late balance.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use notelens_types::{NoteCategory, Session};

/// Temporal fragment of the analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TemporalAnalytics {
    /// Whole minutes from start to first end; `None` when either bound is
    /// missing or unparseable.
    pub session_duration_minutes: Option<i64>,
    /// Human form of the duration ("1h 25m" / "45m"), `"N/A"` when unknown.
    pub session_duration_formatted: String,
    /// Four quarters of the session window, each with note and bug counts.
    /// Empty when the window is unknown or the session has no notes.
    pub notes_by_time_segment: Vec<TimeSegment>,
    /// Notes in the first half of the window.
    pub early_notes: usize,
    /// Notes in the second half of the window.
    pub late_notes: usize,
    /// Label of the busiest quarter; `None` when no note landed in any.
    pub peak_segment: Option<String>,
}

/// One quarter of the session window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct TimeSegment {
    pub segment: String,
    pub count: usize,
    pub bugs: usize,
}

const SEGMENT_LABELS: [&str; 4] = [
    "Q1 (0-25%)",
    "Q2 (25-50%)",
    "Q3 (50-75%)",
    "Q4 (75-100%)",
];

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

/// Compute the temporal fragment for one session.
///
/// The window runs from `started_at` to `first_ended_at` (sessions can be
/// restarted; the first end marks the real run), falling back to `ended_at`.
/// Notes stamped after the window clamp into Q4; notes stamped before the
/// start, or without a parseable timestamp, are skipped.
pub fn temporal_analytics(session: &Session) -> TemporalAnalytics {
    let start = session.started_at.as_deref().and_then(parse_timestamp);
    let end = session
        .first_ended_at
        .as_deref()
        .or(session.ended_at.as_deref())
        .and_then(parse_timestamp);

    let (session_duration_minutes, session_duration_formatted) = match (start, end) {
        (Some(s), Some(e)) if e >= s => {
            let minutes = ((e - s).num_seconds() as f64 / 60.0).round() as i64;
            (Some(minutes), format_minutes(minutes))
        }
        _ => (None, "N/A".to_string()),
    };

    let mut segment_counts = [(0usize, 0usize); 4];
    let mut bucketed_any = false;

    if let (Some(s), Some(e)) = (start, end) {
        let span_ms = (e - s).num_milliseconds();
        if span_ms > 0 && !session.notes.is_empty() {
            bucketed_any = true;
            let quarter_ms = span_ms as f64 / 4.0;

            for note in &session.notes {
                let Some(created) = note.created_at.as_deref().and_then(parse_timestamp) else {
                    warn!(note_id = %note.id, "note has no usable timestamp, skipping");
                    continue;
                };
                let elapsed_ms = (created - s).num_milliseconds();
                if elapsed_ms < 0 {
                    warn!(note_id = %note.id, "note predates the session window, skipping");
                    continue;
                }
                // Restarted sessions keep collecting past the first end;
                // those notes land in the final quarter.
                let quarter = ((elapsed_ms as f64 / quarter_ms) as usize).min(3);
                segment_counts[quarter].0 += 1;
                if note.category == NoteCategory::Bug {
                    segment_counts[quarter].1 += 1;
                }
            }
        }
    }

    let notes_by_time_segment: Vec<TimeSegment> = if bucketed_any {
        SEGMENT_LABELS
            .iter()
            .zip(segment_counts)
            .map(|(label, (count, bugs))| TimeSegment {
                segment: label.to_string(),
                count,
                bugs,
            })
            .collect()
    } else {
        Vec::new()
    };

    let early_notes = segment_counts[0].0 + segment_counts[1].0;
    let late_notes = segment_counts[2].0 + segment_counts[3].0;

    // Earliest quarter wins ties.
    let mut peak_segment = None;
    let mut peak_count = 0;
    for (i, (count, _)) in segment_counts.iter().enumerate() {
        if *count > peak_count {
            peak_count = *count;
            peak_segment = Some(SEGMENT_LABELS[i].to_string());
        }
    }

    TemporalAnalytics {
        session_duration_minutes,
        session_duration_formatted,
        notes_by_time_segment,
        early_notes,
        late_notes,
        peak_segment,
    }
}

/// "1h 25m" above an hour, "45m" below.
fn format_minutes(total: i64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

// ============================================================================
// Tests
// ============================================================================
