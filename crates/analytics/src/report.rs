// crates/analytics/src/report.rs
//! Composition of every report fragment into one analytics payload.
//!
//! The server hands the payload to dashboards, the PDF renderer, and the
//! public report API as-is; nothing here is persisted.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use notelens_types::Session;

use crate::agreement::{agreement, CrossTesterAgreement};
use crate::category_insights::{category_insights, CategoryInsights};
use crate::correlation::{issue_correlation, IssueCorrelation};
use crate::keywords::KeywordExtractor;
use crate::quality::{content_quality, participation_rate, ContentQualityMetrics};
use crate::scenes::{
    hotspot_scenes, scene_analytics, scene_coverage, SceneAnalytics, DEFAULT_HOTSPOT_LIMIT,
};
use crate::sentiment::SentimentConfig;
use crate::temporal::{temporal_analytics, TemporalAnalytics};
use crate::trends::{trends, TrendsAndThemes};

/// Injected configuration for one analytics run: the tokenizer tables and
/// sentiment thresholds, bundled so callers construct them once.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    pub extractor: KeywordExtractor,
    pub sentiment: SentimentConfig,
}

/// The full analytics payload for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SessionAnalytics {
    pub session_id: String,
    pub session_name: String,
    pub category_insights: CategoryInsights,
    pub cross_tester_agreement: CrossTesterAgreement,
    pub trends_and_themes: TrendsAndThemes,
    pub scene_analytics: Vec<SceneAnalytics>,
    pub hotspot_scenes: Vec<SceneAnalytics>,
    pub scene_coverage: f64,
    pub content_quality: ContentQualityMetrics,
    pub participation_rate: f64,
    pub temporal: TemporalAnalytics,
    pub issue_correlation: Vec<IssueCorrelation>,
}

impl SessionAnalytics {
    /// Compute every fragment for one snapshot.
    ///
    /// Pure and single-pass per fragment; safe to call concurrently for any
    /// number of sessions. Historical comparison is a separate call
    /// ([`crate::history::historical_comparison`]) because it needs
    /// cross-session input the snapshot does not carry.
    pub fn build(session: &Session, config: &AnalyticsConfig) -> Self {
        debug!(
            session_id = %session.id,
            notes = session.notes.len(),
            testers = session.testers.len(),
            scenes = session.scenes.len(),
            "computing session analytics"
        );

        let scenes = scene_analytics(session);
        let hotspots = hotspot_scenes(&scenes, DEFAULT_HOTSPOT_LIMIT);

        Self {
            session_id: session.id.clone(),
            session_name: session.name.clone(),
            category_insights: category_insights(session),
            cross_tester_agreement: agreement(session, &config.extractor),
            trends_and_themes: trends(session, &config.extractor, &config.sentiment),
            hotspot_scenes: hotspots,
            scene_coverage: scene_coverage(session),
            scene_analytics: scenes,
            content_quality: content_quality(session),
            participation_rate: participation_rate(session),
            temporal: temporal_analytics(session),
            issue_correlation: issue_correlation(&session.testers, &session.issue_options),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
