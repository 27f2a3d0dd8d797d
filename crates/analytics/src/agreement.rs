// crates/analytics/src/agreement.rs
//! Cross-tester agreement: which keywords were independently mentioned by
//! two or more testers.
//!
//! Corroboration by independent testers is stronger evidence than raw
//! mention volume, so the ranking puts tester breadth first — an issue three
//! people hit outranks one person's repeated complaint.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::Session;

use crate::keywords::KeywordExtractor;

/// Agreement fragment of the analytics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct CrossTesterAgreement {
    /// Distinct keywords mentioned by 2+ testers.
    pub shared_keywords: usize,
    /// Distinct keywords mentioned by exactly one tester.
    pub unique_keywords: usize,
    /// `100 * shared / (shared + unique)`; `0.0` for a keyword-less corpus.
    pub shared_findings_rate: f64,
    /// Every shared keyword, ranked. Truncation for display is the caller's
    /// concern.
    pub common_keywords: Vec<KeywordAgreement>,
}

/// One shared keyword with its evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct KeywordAgreement {
    pub keyword: String,
    /// Number of notes mentioning the keyword.
    pub count: usize,
    /// Number of distinct testers mentioning the keyword.
    pub tester_count: usize,
}

/// Per-keyword tally accumulated while scanning notes.
#[derive(Debug, Default)]
struct KeywordStat<'a> {
    count: usize,
    testers: HashSet<&'a str>,
}

/// Classify the session's keywords as shared vs unique and rank the shared
/// ones by tester breadth.
pub fn agreement(session: &Session, extractor: &KeywordExtractor) -> CrossTesterAgreement {
    let mut stats: HashMap<String, KeywordStat<'_>> = HashMap::new();

    for note in &session.notes {
        // A keyword counts once per note, however often the note repeats it.
        let unique: HashSet<String> = extractor.extract(note.effective_text()).into_iter().collect();
        for keyword in unique {
            let stat = stats.entry(keyword).or_default();
            stat.count += 1;
            stat.testers.insert(note.tester_id.as_str());
        }
    }

    let mut shared_count = 0;
    let mut unique_count = 0;
    let mut common_keywords = Vec::new();

    for (keyword, stat) in &stats {
        match stat.testers.len() {
            // Unreachable: every recorded keyword carries its note's tester.
            0 => continue,
            1 => unique_count += 1,
            testers => {
                shared_count += 1;
                common_keywords.push(KeywordAgreement {
                    keyword: keyword.clone(),
                    count: stat.count,
                    tester_count: testers,
                });
            }
        }
    }

    // Tester breadth first, then note volume, then the keyword itself so the
    // full ordering is deterministic.
    common_keywords.sort_by(|a, b| {
        b.tester_count
            .cmp(&a.tester_count)
            .then(b.count.cmp(&a.count))
            .then(a.keyword.cmp(&b.keyword))
    });

    let total = shared_count + unique_count;
    let shared_findings_rate = if total > 0 {
        100.0 * shared_count as f64 / total as f64
    } else {
        0.0
    };

    CrossTesterAgreement {
        shared_keywords: shared_count,
        unique_keywords: unique_count,
        shared_findings_rate,
        common_keywords,
    }
}

// ============================================================================
// Tests
// ============================================================================
