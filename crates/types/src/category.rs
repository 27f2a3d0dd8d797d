// crates/types/src/category.rs
//! The closed note category enum and the zero-filled per-category tally.
//!
//! Categories are assigned upstream by the classifier service. By the time a
//! session snapshot reaches the analytics engines, every note carries one of
//! the five values below; an out-of-range string in storage is a
//! data-integrity failure the loader rejects via [`NoteCategory::from_str`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Feedback category of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Bug,
    Feature,
    Ux,
    Performance,
    Other,
}

impl NoteCategory {
    /// All five categories, in canonical display order.
    pub const ALL: [NoteCategory; 5] = [
        NoteCategory::Bug,
        NoteCategory::Feature,
        NoteCategory::Ux,
        NoteCategory::Performance,
        NoteCategory::Other,
    ];

    /// Get the string representation used in storage and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteCategory::Bug => "bug",
            NoteCategory::Feature => "feature",
            NoteCategory::Ux => "ux",
            NoteCategory::Performance => "performance",
            NoteCategory::Other => "other",
        }
    }

    /// Parse from a storage string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "bug" => Some(NoteCategory::Bug),
            "feature" => Some(NoteCategory::Feature),
            "ux" => Some(NoteCategory::Ux),
            "performance" => Some(NoteCategory::Performance),
            "other" => Some(NoteCategory::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by the loader boundary when a stored category string is not
/// one of the five closed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("unknown note category: {value:?}")]
    Unknown { value: String },
}

impl std::str::FromStr for NoteCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| CategoryError::Unknown { value: s.to_string() })
    }
}

/// Note counts per category for a session or a slice of one.
///
/// Always carries all five keys; absent categories stay at zero, so JSON
/// consumers never need a missing-key branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
pub struct CategoryCounts {
    pub bug: usize,
    pub feature: usize,
    pub ux: usize,
    pub performance: usize,
    pub other: usize,
}

impl CategoryCounts {
    /// Tally a sequence of categories.
    pub fn tally(categories: impl IntoIterator<Item = NoteCategory>) -> Self {
        let mut counts = Self::default();
        for category in categories {
            counts.record(category);
        }
        counts
    }

    /// Count one note of the given category.
    pub fn record(&mut self, category: NoteCategory) {
        match category {
            NoteCategory::Bug => self.bug += 1,
            NoteCategory::Feature => self.feature += 1,
            NoteCategory::Ux => self.ux += 1,
            NoteCategory::Performance => self.performance += 1,
            NoteCategory::Other => self.other += 1,
        }
    }

    pub fn get(&self, category: NoteCategory) -> usize {
        match category {
            NoteCategory::Bug => self.bug,
            NoteCategory::Feature => self.feature,
            NoteCategory::Ux => self.ux,
            NoteCategory::Performance => self.performance,
            NoteCategory::Other => self.other,
        }
    }

    pub fn total(&self) -> usize {
        self.bug + self.feature + self.ux + self.performance + self.other
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The category with the highest count. Ties resolve to the earlier entry
    /// in [`NoteCategory::ALL`]; an all-zero tally resolves to `Other`.
    pub fn dominant(&self) -> NoteCategory {
        let mut best = (NoteCategory::Other, 0);
        for category in NoteCategory::ALL {
            let count = self.get(category);
            if count > best.1 {
                best = (category, count);
            }
        }
        best.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_round_trip() {
        for category in NoteCategory::ALL {
            assert_eq!(NoteCategory::parse_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        let err = NoteCategory::from_str("complaint").unwrap_err();
        assert_eq!(
            err,
            CategoryError::Unknown { value: "complaint".to_string() }
        );
        assert!(err.to_string().contains("complaint"));
    }

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(serde_json::to_string(&NoteCategory::Ux).unwrap(), "\"ux\"");
        let parsed: NoteCategory = serde_json::from_str("\"performance\"").unwrap();
        assert_eq!(parsed, NoteCategory::Performance);
    }

    #[test]
    fn test_category_serde_rejects_free_text() {
        assert!(serde_json::from_str::<NoteCategory>("\"complaint\"").is_err());
    }

    #[test]
    fn test_counts_record_and_total() {
        let counts = CategoryCounts::tally([
            NoteCategory::Bug,
            NoteCategory::Bug,
            NoteCategory::Feature,
            NoteCategory::Other,
        ]);
        assert_eq!(counts.bug, 2);
        assert_eq!(counts.feature, 1);
        assert_eq!(counts.ux, 0);
        assert_eq!(counts.total(), 4);
        assert!(!counts.is_empty());
    }

    #[test]
    fn test_counts_empty() {
        let counts = CategoryCounts::default();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_serialize_all_five_keys() {
        // Zero-filled keys must still appear in JSON output.
        let json = serde_json::to_string(&CategoryCounts::tally([NoteCategory::Bug])).unwrap();
        for key in ["bug", "feature", "ux", "performance", "other"] {
            assert!(json.contains(key), "missing key {key} in {json}");
        }
    }

    #[test]
    fn test_dominant_picks_max() {
        let counts = CategoryCounts::tally([
            NoteCategory::Ux,
            NoteCategory::Ux,
            NoteCategory::Bug,
        ]);
        assert_eq!(counts.dominant(), NoteCategory::Ux);
    }

    #[test]
    fn test_dominant_tie_uses_canonical_order() {
        // bug and feature tied at 1; bug comes first in ALL.
        let counts = CategoryCounts::tally([NoteCategory::Feature, NoteCategory::Bug]);
        assert_eq!(counts.dominant(), NoteCategory::Bug);
    }

    #[test]
    fn test_dominant_all_zero_is_other() {
        assert_eq!(CategoryCounts::default().dominant(), NoteCategory::Other);
    }
}
