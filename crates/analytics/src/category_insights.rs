// crates/analytics/src/category_insights.rs
//! Category breakdowns: session-wide totals, per-scene splits, and the
//! bug-to-feature ratio.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::{CategoryCounts, NoteCategory, Session};

/// Category insight fragment of the analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct CategoryInsights {
    /// Always carries all five categories, zero-filled when absent.
    pub total_by_category: CategoryCounts,
    pub dominant_category: NoteCategory,
    /// One entry per scene with at least one note, in session scene order.
    pub category_by_scene: Vec<SceneCategoryBreakdown>,
    /// `bug / feature`; `None` when the session has no feature notes. The
    /// distinction matters downstream: `None` renders as "n/a", `0.0` as a
    /// real ratio.
    pub bug_to_feature_ratio: Option<f64>,
}

/// Category counts restricted to one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SceneCategoryBreakdown {
    pub scene_id: String,
    pub scene_name: String,
    pub categories: CategoryCounts,
}

/// Aggregate note counts by category, overall and per scene.
///
/// Notes whose `scene_id` does not resolve to a session scene still count in
/// the session totals; they just have no per-scene row to land in.
pub fn category_insights(session: &Session) -> CategoryInsights {
    let total_by_category = CategoryCounts::tally(session.notes.iter().map(|n| n.category));

    let bug_to_feature_ratio = if total_by_category.feature > 0 {
        Some(total_by_category.bug as f64 / total_by_category.feature as f64)
    } else {
        None
    };

    let mut category_by_scene = Vec::new();
    for scene in &session.scenes {
        let categories = CategoryCounts::tally(
            session
                .notes
                .iter()
                .filter(|n| n.scene_id == scene.id)
                .map(|n| n.category),
        );
        // Scenes nobody commented on are omitted from the breakdown.
        if categories.is_empty() {
            continue;
        }
        category_by_scene.push(SceneCategoryBreakdown {
            scene_id: scene.id.clone(),
            scene_name: scene.name.clone(),
            categories,
        });
    }

    CategoryInsights {
        dominant_category: total_by_category.dominant(),
        total_by_category,
        category_by_scene,
        bug_to_feature_ratio,
    }
}

// ============================================================================
// Tests
// ============================================================================
