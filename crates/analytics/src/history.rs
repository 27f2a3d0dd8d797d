// crates/analytics/src/history.rs
//! Cross-session comparison: is this build buggier than the last one?
//!
//! Works over lightweight summary rows rather than full snapshots — past
//! sessions arrive pre-aggregated from the persistence layer.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::{NoteCategory, Session};

/// Direction of the bug count relative to the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "lowercase")]
pub enum BugTrend {
    Improving,
    Worsening,
    Stable,
}

impl BugTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            BugTrend::Improving => "improving",
            BugTrend::Worsening => "worsening",
            BugTrend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for BugTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bug count must move by more than this percentage to leave "stable".
pub const TREND_CHANGE_PERCENT: f64 = 10.0;

/// Pre-aggregated view of one session, as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub build_version: Option<String>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub total_notes: usize,
    pub bug_count: usize,
    pub tester_count: usize,
}

impl SessionSummary {
    /// Summarize a full snapshot.
    pub fn of(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            name: session.name.clone(),
            build_version: session.build_version.clone(),
            started_at: session.started_at.clone(),
            ended_at: session.ended_at.clone(),
            total_notes: session.notes.len(),
            bug_count: session
                .notes
                .iter()
                .filter(|n| n.category == NoteCategory::Bug)
                .count(),
            tester_count: session.testers.len(),
        }
    }

    /// Millisecond sort key: start time, else end time, else the epoch.
    fn sort_key(&self) -> i64 {
        self.started_at
            .as_deref()
            .or(self.ended_at.as_deref())
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }
}

/// Historical comparison fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct HistoricalComparison {
    /// Past sessions plus the current one, chronologically.
    pub sessions: Vec<SessionSummary>,
    pub bug_trend: BugTrend,
    /// Percent change vs the most recent past session; `None` without a
    /// comparable baseline.
    pub bug_change_percent: Option<f64>,
    pub average_bugs: f64,
}

/// Compare the current session's bug count against its history.
///
/// `past` is expected in storage order (oldest first); the most recent entry
/// is the baseline. The ±10% band around it reads as "stable".
pub fn historical_comparison(current: &Session, past: &[SessionSummary]) -> HistoricalComparison {
    let current_summary = SessionSummary::of(current);
    let current_bugs = current_summary.bug_count;

    let mut sessions: Vec<SessionSummary> = past.to_vec();
    sessions.push(current_summary);
    // Stable sort: rows without timestamps keep their incoming order.
    sessions.sort_by_key(SessionSummary::sort_key);

    let mut bug_trend = BugTrend::Stable;
    let mut bug_change_percent = None;

    if let Some(baseline) = past.last() {
        if baseline.bug_count > 0 {
            let change =
                100.0 * (current_bugs as f64 - baseline.bug_count as f64) / baseline.bug_count as f64;
            bug_change_percent = Some(change);
            if change < -TREND_CHANGE_PERCENT {
                bug_trend = BugTrend::Improving;
            } else if change > TREND_CHANGE_PERCENT {
                bug_trend = BugTrend::Worsening;
            }
        } else if current_bugs > 0 {
            // From zero bugs to some is a regression however it's measured.
            bug_trend = BugTrend::Worsening;
            bug_change_percent = Some(100.0);
        }
    }

    let total_bugs: usize = sessions.iter().map(|s| s.bug_count).sum();
    let average_bugs = total_bugs as f64 / sessions.len() as f64;

    HistoricalComparison {
        sessions,
        bug_trend,
        bug_change_percent,
        average_bugs,
    }
}

// ============================================================================
// Tests
// ============================================================================
