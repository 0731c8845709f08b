//! The tagging engine state machine.
//!
//! Owns the pool/answer-area partition for one loaded tag set and enforces
//! the movement, submission, and evaluation rules. The engine is synchronous
//! and single-threaded: every command runs to completion before the next is
//! accepted, and a failed command leaves state untouched. Rendering,
//! drag-and-drop plumbing, and document transport belong to the host.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{EngineError, MoveRejection};
use crate::model::{TagAnswer, TagDefinition, TagSet, TagSetDocument};
use crate::report::{AttemptReport, FeedbackEntry};

/// Where a tag currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    Pool,
    AnswerArea,
}

/// Observer for state-change notifications.
///
/// Hosts subscribe to re-render after each successful mutating command; the
/// engine itself stays framework-agnostic.
pub trait EngineObserver: Send + Sync {
    fn on_loaded(&self, set_name: &str, pool_size: usize);
    fn on_tag_moved(&self, value: &str, placement: Placement);
    fn on_submitted(&self, report: &AttemptReport);
    fn on_reset(&self);
}

/// No-op observer.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {
    fn on_loaded(&self, _: &str, _: usize) {}
    fn on_tag_moved(&self, _: &str, _: Placement) {}
    fn on_submitted(&self, _: &AttemptReport) {}
    fn on_reset(&self) {}
}

/// One answer-area entry in a snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerEntry {
    /// The tag value.
    pub value: String,
    /// Correctness and feedback; `None` until the attempt is submitted.
    pub verdict: Option<TagAnswer>,
}

/// A read-only render model of the current engine state.
///
/// Verdicts are absent until the attempt is submitted, so a renderer cannot
/// color answer-area entries early.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    /// Name of the loaded tag set.
    pub set_name: String,
    /// Pool tag values, in canonical order.
    pub pool: Vec<String>,
    /// Answer-area entries, in placement order.
    pub answer_area: Vec<AnswerEntry>,
    /// Whether the attempt has been submitted.
    pub submitted: bool,
    /// Whether a submit is currently permitted (answer area non-empty).
    pub is_complete: bool,
    /// Aggregate result; `None` until submitted.
    pub all_correct: Option<bool>,
}

/// The tagging engine.
///
/// One instance owns the state for one question. Loading a different tag set
/// (via [`load_set`](Self::load_set) or a fresh instance) replaces the state
/// wholesale; state is never shared between instances.
///
/// The pool and answer area are held as indices into the canonical tag list,
/// so the two are disjoint and together cover the full set at all times.
pub struct TaggingEngine {
    set: TagSet,
    positions: HashMap<String, usize>,
    pool: Vec<usize>,
    answer_area: Vec<usize>,
    submitted: bool,
    feedback: HashMap<String, TagAnswer>,
    all_correct: Option<bool>,
    observer: Box<dyn EngineObserver>,
}

impl std::fmt::Debug for TaggingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggingEngine")
            .field("set", &self.set)
            .field("positions", &self.positions)
            .field("pool", &self.pool)
            .field("answer_area", &self.answer_area)
            .field("submitted", &self.submitted)
            .field("feedback", &self.feedback)
            .field("all_correct", &self.all_correct)
            .field("observer", &"<dyn EngineObserver>")
            .finish()
    }
}

impl TaggingEngine {
    /// Create an engine over an already-resolved tag set.
    pub fn new(set: TagSet) -> Self {
        let mut engine = Self {
            set,
            positions: HashMap::new(),
            pool: Vec::new(),
            answer_area: Vec::new(),
            submitted: false,
            feedback: HashMap::new(),
            all_correct: None,
            observer: Box::new(NoopObserver),
        };
        engine.install();
        engine
    }

    /// Resolve `name` from a parsed document and load it.
    pub fn load(doc: &TagSetDocument, name: &str) -> Result<Self, EngineError> {
        let entry = doc
            .get(name)
            .ok_or_else(|| EngineError::UnknownTagSet(name.to_string()))?;
        let set = TagSet::resolve(name, entry)?;
        Ok(Self::new(set))
    }

    /// Replace the loaded set in place, keeping the observer.
    ///
    /// This is how a host changes questions (or "adds tags at runtime"):
    /// a new load, never in-place mutation of the loaded set.
    pub fn load_set(&mut self, doc: &TagSetDocument, name: &str) -> Result<(), EngineError> {
        let entry = doc
            .get(name)
            .ok_or_else(|| EngineError::UnknownTagSet(name.to_string()))?;
        self.set = TagSet::resolve(name, entry)?;
        self.install();
        Ok(())
    }

    /// Attach an observer notified after each successful command.
    ///
    /// The observer immediately receives the load event for the current set,
    /// so late subscribers start from a consistent picture.
    pub fn with_observer(mut self, observer: Box<dyn EngineObserver>) -> Self {
        observer.on_loaded(&self.set.name, self.pool.len());
        self.observer = observer;
        self
    }

    fn install(&mut self) {
        self.positions = self
            .set
            .tags
            .iter()
            .enumerate()
            .map(|(i, t)| (t.value.clone(), i))
            .collect();
        self.pool = (0..self.set.tags.len()).collect();
        self.answer_area.clear();
        self.submitted = false;
        self.feedback.clear();
        self.all_correct = None;

        tracing::debug!(set = %self.set.name, tags = self.pool.len(), "tag set loaded");
        self.observer.on_loaded(&self.set.name, self.pool.len());
    }

    /// Canonical index for `value`, rejecting unknown tags and locked state.
    fn ensure_movable(&self, value: &str) -> Result<usize, EngineError> {
        let Some(&idx) = self.positions.get(value) else {
            return Err(EngineError::InvalidMove {
                value: value.to_string(),
                reason: MoveRejection::UnknownTag,
            });
        };
        if self.submitted {
            return Err(EngineError::InvalidMove {
                value: value.to_string(),
                reason: MoveRejection::Submitted,
            });
        }
        Ok(idx)
    }

    /// Move a tag from the pool to the end of the answer area.
    pub fn move_in(&mut self, value: &str) -> Result<(), EngineError> {
        let idx = self.ensure_movable(value)?;
        let Some(pos) = self.pool.iter().position(|&i| i == idx) else {
            return Err(EngineError::InvalidMove {
                value: value.to_string(),
                reason: MoveRejection::NotInPool,
            });
        };

        self.pool.remove(pos);
        self.answer_area.push(idx);

        tracing::debug!(tag = value, "moved into answer area");
        self.observer.on_tag_moved(value, Placement::AnswerArea);
        Ok(())
    }

    /// Move a tag from the answer area back to the pool.
    ///
    /// The tag is reinserted at its canonical position, so the pool never
    /// drifts out of canonical order across repeated moves.
    pub fn move_out(&mut self, value: &str) -> Result<(), EngineError> {
        let idx = self.ensure_movable(value)?;
        let Some(pos) = self.answer_area.iter().position(|&i| i == idx) else {
            return Err(EngineError::InvalidMove {
                value: value.to_string(),
                reason: MoveRejection::NotInAnswerArea,
            });
        };

        self.answer_area.remove(pos);
        let at = self.pool.partition_point(|&i| i < idx);
        self.pool.insert(at, idx);

        tracing::debug!(tag = value, "moved back to pool");
        self.observer.on_tag_moved(value, Placement::Pool);
        Ok(())
    }

    /// Move a tag to the other container: into the answer area if it is in
    /// the pool, back to the pool if it is in the answer area.
    ///
    /// Clicking and dragging share this semantic, so the two interaction
    /// modes cannot desynchronize. Returns where the tag ended up.
    pub fn toggle(&mut self, value: &str) -> Result<Placement, EngineError> {
        let idx = self.ensure_movable(value)?;
        if self.pool.contains(&idx) {
            self.move_in(value)?;
            Ok(Placement::AnswerArea)
        } else {
            self.move_out(value)?;
            Ok(Placement::Pool)
        }
    }

    /// Evaluate the answer area against the correctness map.
    ///
    /// This is the only point at which correctness is revealed. Fails with
    /// [`EngineError::NothingToEvaluate`] on an empty answer area and
    /// [`EngineError::AlreadySubmitted`] on a repeated call; on failure the
    /// state is unchanged and `submitted` stays `false`.
    pub fn submit(&mut self) -> Result<AttemptReport, EngineError> {
        if self.submitted {
            return Err(EngineError::AlreadySubmitted);
        }
        if self.answer_area.is_empty() {
            return Err(EngineError::NothingToEvaluate);
        }

        let mut entries = Vec::with_capacity(self.answer_area.len());
        for &idx in &self.answer_area {
            let tag = &self.set.tags[idx];
            self.feedback.insert(
                tag.value.clone(),
                TagAnswer {
                    correct: tag.is_correct,
                    feedback: tag.feedback.clone(),
                },
            );
            entries.push(FeedbackEntry {
                value: tag.value.clone(),
                correct: tag.is_correct,
                feedback: tag.feedback.clone(),
            });
        }

        // Exact-set rule: every placed tag is correct AND every correct tag
        // was placed.
        let placed_all_correct = self
            .answer_area
            .iter()
            .all(|&idx| self.set.tags[idx].is_correct);
        let total_correct = self.set.tags.iter().filter(|t| t.is_correct).count();
        let all_correct = placed_all_correct && self.answer_area.len() == total_correct;

        self.submitted = true;
        self.all_correct = Some(all_correct);

        let report = AttemptReport {
            id: uuid::Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            set_name: self.set.name.clone(),
            entries,
            all_correct,
        };

        tracing::debug!(
            set = %self.set.name,
            placed = report.entries.len(),
            correct = report.correct_count(),
            all_correct,
            "attempt submitted"
        );
        self.observer.on_submitted(&report);
        Ok(report)
    }

    /// Restore the exact post-load state: full pool in canonical order,
    /// empty answer area, no feedback, not submitted. Always succeeds.
    pub fn reset(&mut self) {
        self.pool = (0..self.set.tags.len()).collect();
        self.answer_area.clear();
        self.submitted = false;
        self.feedback.clear();
        self.all_correct = None;

        tracing::debug!(set = %self.set.name, "engine reset");
        self.observer.on_reset();
    }

    /// Name of the loaded tag set.
    pub fn set_name(&self) -> &str {
        &self.set.name
    }

    /// Look up a tag definition by value.
    pub fn tag(&self, value: &str) -> Option<&TagDefinition> {
        self.set.tag(value)
    }

    /// Tags currently available to drag, in canonical order.
    pub fn pool(&self) -> Vec<TagDefinition> {
        self.pool
            .iter()
            .map(|&idx| self.set.tags[idx].clone())
            .collect()
    }

    /// Tag values currently placed, in placement order.
    pub fn answer_area(&self) -> Vec<String> {
        self.answer_area
            .iter()
            .map(|&idx| self.set.tags[idx].value.clone())
            .collect()
    }

    /// Whether evaluation has been requested for the current attempt.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Per-tag verdicts for the placed tags; empty until submitted.
    pub fn feedback_by_tag(&self) -> HashMap<String, TagAnswer> {
        self.feedback.clone()
    }

    /// True iff the answer area is non-empty; drives whether the host
    /// permits a submit action.
    pub fn is_complete(&self) -> bool {
        !self.answer_area.is_empty()
    }

    /// Aggregate result of the attempt; `None` until submitted.
    pub fn all_correct(&self) -> Option<bool> {
        self.all_correct
    }

    /// Build a read-only render model of the current state.
    pub fn snapshot(&self) -> EngineSnapshot {
        let answer_area = self
            .answer_area
            .iter()
            .map(|&idx| {
                let value = self.set.tags[idx].value.clone();
                let verdict = self.feedback.get(&value).cloned();
                AnswerEntry { value, verdict }
            })
            .collect();

        EngineSnapshot {
            set_name: self.set.name.clone(),
            pool: self
                .pool
                .iter()
                .map(|&idx| self.set.tags[idx].value.clone())
                .collect(),
            answer_area,
            submitted: self.submitted,
            is_complete: self.is_complete(),
            all_correct: self.all_correct,
        }
    }
}
