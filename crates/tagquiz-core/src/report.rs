//! Submission reports.
//!
//! Each successful `submit` produces an [`AttemptReport`]: the per-tag
//! verdicts for the placed tags, in display order, plus the aggregate
//! result, stamped with an id and timestamp so hosts can persist and compare
//! attempts.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of evaluating one submitted attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptReport {
    /// Unique id for this attempt.
    pub id: Uuid,
    /// When the attempt was submitted.
    pub created_at: DateTime<Utc>,
    /// Name of the tag set the attempt was made against.
    pub set_name: String,
    /// Per-tag verdicts, in answer-area (display) order.
    pub entries: Vec<FeedbackEntry>,
    /// True iff the placed tags exactly match the set of correct tags.
    pub all_correct: bool,
}

/// Verdict for a single placed tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// The tag value.
    pub value: String,
    /// Whether the tag belongs in the answer.
    pub correct: bool,
    /// Explanatory feedback for this tag.
    pub feedback: String,
}

impl AttemptReport {
    /// Number of placed tags judged correct.
    pub fn correct_count(&self) -> usize {
        self.entries.iter().filter(|e| e.correct).count()
    }

    /// Number of placed tags judged incorrect.
    pub fn incorrect_count(&self) -> usize {
        self.entries.len() - self.correct_count()
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Load a report previously written by [`save_json`](Self::save_json).
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report: {}", path.display()))?;
        let report = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse report: {}", path.display()))?;
        Ok(report)
    }
}
