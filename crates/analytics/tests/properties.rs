// Property tests over randomly generated session snapshots.
//
// The generators deliberately draw from a small pool of testers, scenes and
// words so that shared keywords and per-scene splits actually occur.

use proptest::prelude::*;

use notelens_analytics::{
    agreement, category_insights, content_quality, participation_rate, scene_analytics,
    scene_coverage, trends, AnalyticsConfig, KeywordExtractor, SentimentConfig,
    SentimentIndicator, SessionAnalytics,
};
use notelens_types::{CategoryCounts, Note, NoteCategory, Scene, Session, Tester};

fn category_strategy() -> impl Strategy<Value = NoteCategory> {
    prop::sample::select(NoteCategory::ALL.to_vec())
}

fn text_strategy() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "crash", "login", "spinner", "slow", "checkout", "confusing", "the", "ok",
    ]);
    prop::collection::vec(word, 0..8).prop_map(|words| words.join(" "))
}

/// Notes over a pool of 3 scenes and up to `tester_pool` testers.
fn notes_strategy(tester_pool: usize, max: usize) -> impl Strategy<Value = Vec<Note>> {
    prop::collection::vec(
        (0..3usize, 0..tester_pool, category_strategy(), text_strategy()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (scene, tester, category, text))| {
                Note::new(
                    format!("n{i}"),
                    category,
                    format!("s{scene}"),
                    format!("t{tester}"),
                    text,
                )
            })
            .collect()
    })
}

fn session_strategy(tester_pool: usize) -> impl Strategy<Value = Session> {
    notes_strategy(tester_pool, 24).prop_map(move |notes| {
        Session::new("prop", "Property session")
            .with_scenes((0..3).map(|i| Scene::new(format!("s{i}"), format!("Scene {i}"))).collect())
            .with_testers(
                (0..tester_pool)
                    .map(|i| Tester::new(format!("t{i}"), "Tester", format!("{i}")))
                    .collect(),
            )
            .with_notes(notes)
    })
}

proptest! {
    // ------------------------------------------------------------------
    // Category insights
    // ------------------------------------------------------------------

    #[test]
    fn totals_cover_every_note(session in session_strategy(3)) {
        let insights = category_insights(&session);
        prop_assert_eq!(insights.total_by_category.total(), session.notes.len());
    }

    #[test]
    fn ratio_is_null_exactly_when_featureless(session in session_strategy(3)) {
        let insights = category_insights(&session);
        prop_assert_eq!(
            insights.bug_to_feature_ratio.is_none(),
            insights.total_by_category.feature == 0
        );
        if let Some(ratio) = insights.bug_to_feature_ratio {
            prop_assert!(ratio.is_finite());
        }
    }

    // ------------------------------------------------------------------
    // Agreement
    // ------------------------------------------------------------------

    #[test]
    fn single_tester_shares_nothing(session in session_strategy(1)) {
        let result = agreement(&session, &KeywordExtractor::default());
        prop_assert_eq!(result.shared_keywords, 0);
        prop_assert_eq!(result.shared_findings_rate, 0.0);
        prop_assert!(result.common_keywords.is_empty());
    }

    #[test]
    fn shared_keywords_have_two_plus_testers(session in session_strategy(3)) {
        let result = agreement(&session, &KeywordExtractor::default());
        for keyword in &result.common_keywords {
            prop_assert!(keyword.tester_count >= 2, "{} only had one tester", keyword.keyword);
        }
        prop_assert_eq!(result.common_keywords.len(), result.shared_keywords);
    }

    #[test]
    fn common_keywords_are_totally_ordered(session in session_strategy(3)) {
        let result = agreement(&session, &KeywordExtractor::default());
        for pair in result.common_keywords.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ordered = a.tester_count > b.tester_count
                || (a.tester_count == b.tester_count && a.count > b.count)
                || (a.tester_count == b.tester_count
                    && a.count == b.count
                    && a.keyword < b.keyword);
            prop_assert!(ordered, "{:?} should precede {:?}", a, b);
        }
    }

    #[test]
    fn shared_findings_rate_is_a_percentage(session in session_strategy(3)) {
        let result = agreement(&session, &KeywordExtractor::default());
        prop_assert!((0.0..=100.0).contains(&result.shared_findings_rate));
    }

    // ------------------------------------------------------------------
    // Trends
    // ------------------------------------------------------------------

    #[test]
    fn top_keyword_counts_sum_to_occurrences(session in session_strategy(3)) {
        let extractor = KeywordExtractor::default();
        let result = trends(&session, &extractor, &SentimentConfig::default());

        let occurrences: usize = session
            .notes
            .iter()
            .map(|n| extractor.extract(n.effective_text()).len())
            .sum();
        let summed: usize = result.top_keywords.iter().map(|k| k.count).sum();
        prop_assert_eq!(summed, occurrences);
    }

    #[test]
    fn sentiment_never_moves_toward_positive_with_more_bugs(
        bug in 0..12usize,
        feature in 0..12usize,
        ux in 0..12usize,
        performance in 0..12usize,
        other in 0..12usize,
    ) {
        let config = SentimentConfig::default();
        let rank = |s: SentimentIndicator| match s {
            SentimentIndicator::Positive => 0,
            SentimentIndicator::Neutral | SentimentIndicator::Mixed => 1,
            SentimentIndicator::Negative => 2,
        };

        let counts = CategoryCounts { bug, feature, ux, performance, other };
        let bumped = CategoryCounts { bug: bug + 1, ..counts };
        prop_assert!(rank(config.indicator(&bumped)) >= rank(config.indicator(&counts)));

        let more_features = CategoryCounts { feature: feature + 1, ..counts };
        prop_assert!(rank(config.indicator(&more_features)) <= rank(config.indicator(&counts)));
    }

    // ------------------------------------------------------------------
    // Supplemental engines
    // ------------------------------------------------------------------

    #[test]
    fn scene_analytics_mirror_session_scenes(session in session_strategy(3)) {
        let scenes = scene_analytics(&session);
        prop_assert_eq!(scenes.len(), session.scenes.len());
        for (analytics, scene) in scenes.iter().zip(&session.scenes) {
            prop_assert_eq!(&analytics.scene_id, &scene.id);
            prop_assert!((0.0..=100.0).contains(&analytics.bug_density));
        }

        // Every generated note references a pooled scene, so per-scene
        // totals partition the note list.
        let total: usize = scenes.iter().map(|s| s.total_notes).sum();
        prop_assert_eq!(total, session.notes.len());
    }

    #[test]
    fn rates_are_percentages(session in session_strategy(3)) {
        prop_assert!((0.0..=100.0).contains(&scene_coverage(&session)));
        prop_assert!((0.0..=100.0).contains(&participation_rate(&session)));

        let quality = content_quality(&session);
        prop_assert!((0.0..=100.0).contains(&quality.auto_classification_rate));
        prop_assert!((0.0..=100.0).contains(&quality.audio_coverage));
        prop_assert!((0.0..=100.0).contains(&quality.ai_summary_coverage));
        prop_assert!((0.0..=100.0).contains(&quality.edit_rate));
    }

    // ------------------------------------------------------------------
    // Whole payload
    // ------------------------------------------------------------------

    #[test]
    fn build_is_idempotent(session in session_strategy(3)) {
        let config = AnalyticsConfig::default();
        let first = SessionAnalytics::build(&session, &config);
        let second = SessionAnalytics::build(&session, &config);
        prop_assert_eq!(first, second);
    }
}
