// crates/types/src/session.rs
//! The immutable session snapshot the analytics engines consume.
//!
//! These entities are created and owned by the persistence layer; the
//! analytics crate only ever reads a fully materialized snapshot and returns
//! freshly computed values. Timestamps cross the boundary as RFC 3339 strings
//! and are parsed where they are needed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::category::NoteCategory;

/// A logical area of the product under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
pub struct Scene {
    pub id: String,
    pub name: String,
}

impl Scene {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A session participant who produces notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
pub struct Tester {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Issue labels this tester flagged, drawn from the session's options.
    #[serde(default)]
    pub reported_issues: Vec<String>,
}

impl Tester {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            reported_issues: Vec::new(),
        }
    }

    pub fn with_reported_issues(mut self, issues: Vec<String>) -> Self {
        self.reported_issues = issues;
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One piece of categorized tester feedback, voice-transcribed or typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
pub struct Note {
    pub id: String,
    pub category: NoteCategory,
    pub scene_id: String,
    pub tester_id: String,
    pub raw_transcript: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_transcript: Option<String>,
    /// True when the category came from the upstream classifier rather than
    /// the tester picking it by hand.
    #[serde(default)]
    pub auto_classified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        category: NoteCategory,
        scene_id: impl Into<String>,
        tester_id: impl Into<String>,
        raw_transcript: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            scene_id: scene_id.into(),
            tester_id: tester_id.into(),
            raw_transcript: raw_transcript.into(),
            edited_transcript: None,
            auto_classified: false,
            audio_url: None,
            ai_summary: None,
            created_at: None,
        }
    }

    pub fn with_edited(mut self, edited: impl Into<String>) -> Self {
        self.edited_transcript = Some(edited.into());
        self
    }

    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }

    pub fn with_created_at(mut self, timestamp: impl Into<String>) -> Self {
        self.created_at = Some(timestamp.into());
        self
    }

    pub fn mark_auto_classified(mut self) -> Self {
        self.auto_classified = true;
        self
    }

    /// Effective text: the edited transcript when present and non-empty,
    /// otherwise the raw transcript (which may itself be empty).
    pub fn effective_text(&self) -> &str {
        match self.edited_transcript.as_deref() {
            Some(edited) if !edited.is_empty() => edited,
            _ => &self.raw_transcript,
        }
    }

    /// True when the tester actually changed the transcript: both versions
    /// are non-empty and differ.
    pub fn was_edited(&self) -> bool {
        match self.edited_transcript.as_deref() {
            Some(edited) => {
                !edited.is_empty() && !self.raw_transcript.is_empty() && edited != self.raw_transcript
            }
            None => false,
        }
    }
}

/// A fully materialized testing session with nested scenes, testers and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../bindings/")]
pub struct Session {
    pub id: String,
    pub name: String,
    /// Session-level summary produced by the external LLM service. The
    /// analytics crate only segments this text; it never generates it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    /// Issue labels testers can flag for this session.
    #[serde(default)]
    pub issue_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    /// First time the session ended; `ended_at` moves when a session is
    /// restarted, this one does not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_ended_at: Option<String>,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub testers: Vec<Tester>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Session {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ai_summary: None,
            issue_options: Vec::new(),
            build_version: None,
            started_at: None,
            ended_at: None,
            first_ended_at: None,
            scenes: Vec::new(),
            testers: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }

    pub fn with_scenes(mut self, scenes: Vec<Scene>) -> Self {
        self.scenes = scenes;
        self
    }

    pub fn with_testers(mut self, testers: Vec<Tester>) -> Self {
        self.testers = testers;
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_window(
        mut self,
        started_at: impl Into<String>,
        first_ended_at: impl Into<String>,
    ) -> Self {
        self.started_at = Some(started_at.into());
        self.first_ended_at = Some(first_ended_at.into());
        self
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
