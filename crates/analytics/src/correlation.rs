// crates/analytics/src/correlation.rs
//! Issue co-occurrence: which pairs of flagged issues tend to be reported by
//! the same testers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use notelens_types::Tester;

/// Overlap between two issue labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "camelCase")]
pub struct IssueCorrelation {
    pub issue1: String,
    pub issue2: String,
    /// Percent of testers reporting either issue who reported both.
    pub correlation: f64,
}

/// Compute pairwise overlap for every unordered pair of issue options.
///
/// Pairs nobody reported together are omitted. Result is sorted by
/// correlation descending; the stable sort keeps option-list order on ties.
pub fn issue_correlation(testers: &[Tester], issue_options: &[String]) -> Vec<IssueCorrelation> {
    let mut correlations = Vec::new();

    for (i, issue1) in issue_options.iter().enumerate() {
        for issue2 in &issue_options[i + 1..] {
            let mut both = 0usize;
            let mut either = 0usize;

            for tester in testers {
                let has_first = tester.reported_issues.iter().any(|r| r == issue1);
                let has_second = tester.reported_issues.iter().any(|r| r == issue2);
                if has_first && has_second {
                    both += 1;
                }
                if has_first || has_second {
                    either += 1;
                }
            }

            if either == 0 {
                continue;
            }
            let correlation = 100.0 * both as f64 / either as f64;
            if correlation > 0.0 {
                correlations.push(IssueCorrelation {
                    issue1: issue1.clone(),
                    issue2: issue2.clone(),
                    correlation,
                });
            }
        }
    }

    correlations.sort_by(|a, b| {
        b.correlation
            .partial_cmp(&a.correlation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    correlations
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tester(id: &str, issues: &[&str]) -> Tester {
        Tester::new(id, "First", "Last")
            .with_reported_issues(issues.iter().map(|s| s.to_string()).collect())
    }

    fn options(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_overlap() {
        let testers = vec![
            tester("a", &["crash", "lag"]),
            tester("b", &["crash", "lag"]),
        ];
        let result = issue_correlation(&testers, &options(&["crash", "lag"]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].issue1, "crash");
        assert_eq!(result[0].issue2, "lag");
        assert_eq!(result[0].correlation, 100.0);
    }

    #[test]
    fn test_partial_overlap() {
        // crash+lag together for one of three reporters.
        let testers = vec![
            tester("a", &["crash", "lag"]),
            tester("b", &["crash"]),
            tester("c", &["lag"]),
        ];
        let result = issue_correlation(&testers, &options(&["crash", "lag"]));

        assert_eq!(result.len(), 1);
        assert!((result[0].correlation - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_issues_omitted() {
        let testers = vec![tester("a", &["crash"]), tester("b", &["lag"])];
        assert!(issue_correlation(&testers, &options(&["crash", "lag"])).is_empty());
    }

    #[test]
    fn test_unreported_issues_omitted() {
        let testers = vec![tester("a", &["crash"])];
        assert!(issue_correlation(&testers, &options(&["lag", "audio"])).is_empty());
    }

    #[test]
    fn test_sorted_by_correlation() {
        let testers = vec![
            tester("a", &["crash", "lag", "audio"]),
            tester("b", &["crash", "lag"]),
            tester("c", &["audio"]),
        ];
        let result = issue_correlation(&testers, &options(&["crash", "lag", "audio"]));

        // crash+lag: 2/2 = 100%; crash+audio: 1/3; lag+audio: 1/3.
        assert_eq!(result[0].issue1, "crash");
        assert_eq!(result[0].issue2, "lag");
        assert!(result.windows(2).all(|w| w[0].correlation >= w[1].correlation));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_no_testers() {
        assert!(issue_correlation(&[], &options(&["crash", "lag"])).is_empty());
    }

    #[test]
    fn test_no_options() {
        let testers = vec![tester("a", &["crash"])];
        assert!(issue_correlation(&testers, &[]).is_empty());
    }
}
