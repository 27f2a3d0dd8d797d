// crates/analytics/src/scenes.rs
//! Per-scene analytics: note volume, bug density, and tester reach for each
//! area of the product under test.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use notelens_types::{CategoryCounts, Session};

/// Analytics for one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SceneAnalytics {
    pub scene_id: String,
    pub scene_name: String,
    pub total_notes: usize,
    pub bug_count: usize,
    /// Percentage of the scene's notes categorized as bugs; `0.0` for a
    /// scene without notes.
    pub bug_density: f64,
    pub unique_testers: usize,
    pub category_breakdown: CategoryCounts,
}

/// Default number of hotspot scenes surfaced in the report.
pub const DEFAULT_HOTSPOT_LIMIT: usize = 3;

/// Compute analytics for every scene, in session order. Scenes without notes
/// get a zeroed entry — unlike the category-insights breakdown, coverage gaps
/// are part of what this view shows.
pub fn scene_analytics(session: &Session) -> Vec<SceneAnalytics> {
    let known: HashSet<&str> = session.scenes.iter().map(|s| s.id.as_str()).collect();
    for note in &session.notes {
        if !known.contains(note.scene_id.as_str()) {
            warn!(
                note_id = %note.id,
                scene_id = %note.scene_id,
                "note references a scene the session does not contain"
            );
        }
    }

    session
        .scenes
        .iter()
        .map(|scene| {
            let mut category_breakdown = CategoryCounts::default();
            let mut testers = HashSet::new();
            let mut total_notes = 0;
            for note in session.notes.iter().filter(|n| n.scene_id == scene.id) {
                category_breakdown.record(note.category);
                testers.insert(note.tester_id.as_str());
                total_notes += 1;
            }

            let bug_count = category_breakdown.bug;
            let bug_density = if total_notes > 0 {
                100.0 * bug_count as f64 / total_notes as f64
            } else {
                0.0
            };

            SceneAnalytics {
                scene_id: scene.id.clone(),
                scene_name: scene.name.clone(),
                total_notes,
                bug_count,
                bug_density,
                unique_testers: testers.len(),
                category_breakdown,
            }
        })
        .collect()
}

/// Scenes with at least one bug, worst first. Ties break on scene id so the
/// list is deterministic.
pub fn hotspot_scenes(scenes: &[SceneAnalytics], limit: usize) -> Vec<SceneAnalytics> {
    let mut hotspots: Vec<SceneAnalytics> = scenes
        .iter()
        .filter(|s| s.bug_count > 0)
        .cloned()
        .collect();
    hotspots.sort_by(|a, b| {
        b.bug_count
            .cmp(&a.bug_count)
            .then_with(|| a.scene_id.cmp(&b.scene_id))
    });
    hotspots.truncate(limit);
    hotspots
}

/// Percentage of the session's scenes that received at least one note;
/// `0.0` when the session defines no scenes.
pub fn scene_coverage(session: &Session) -> f64 {
    if session.scenes.is_empty() {
        return 0.0;
    }
    let noted: HashSet<&str> = session.notes.iter().map(|n| n.scene_id.as_str()).collect();
    let covered = session
        .scenes
        .iter()
        .filter(|s| noted.contains(s.id.as_str()))
        .count();
    100.0 * covered as f64 / session.scenes.len() as f64
}

// ============================================================================
// Tests
// ============================================================================
