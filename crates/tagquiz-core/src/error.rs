//! Engine error types.
//!
//! Every failure the engine reports is a local, recoverable condition the
//! host maps into messaging (or avoids by disabling the affordance). A failed
//! command never leaves engine state partially mutated.

use std::fmt;

use thiserror::Error;

use crate::model::DocumentError;

/// Why a move command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The value names no tag in the loaded set.
    UnknownTag,
    /// The attempt has already been submitted.
    Submitted,
    /// The tag is not currently in the pool.
    NotInPool,
    /// The tag is not currently in the answer area.
    NotInAnswerArea,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::UnknownTag => write!(f, "no such tag in the loaded set"),
            MoveRejection::Submitted => write!(f, "answer already submitted"),
            MoveRejection::NotInPool => write!(f, "not in the pool"),
            MoveRejection::NotInAnswerArea => write!(f, "not in the answer area"),
        }
    }
}

/// Errors reported by [`TaggingEngine`](crate::engine::TaggingEngine) commands.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested tag-set name is absent from the document.
    #[error("tag set '{0}' not found")]
    UnknownTagSet(String),

    /// A move was requested for a tag that is not in the expected source
    /// container, or after the attempt was submitted.
    #[error("invalid move for tag '{value}': {reason}")]
    InvalidMove {
        value: String,
        reason: MoveRejection,
    },

    /// Submit was requested with an empty answer area.
    #[error("nothing to evaluate: the answer area is empty")]
    NothingToEvaluate,

    /// Submit was requested twice for the same attempt.
    #[error("answer already submitted")]
    AlreadySubmitted,

    /// The named tag set exists but violates document invariants.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl EngineError {
    /// Returns `true` if the command was rejected because the attempt is
    /// already submitted. Hosts typically disable the affordance instead of
    /// surfacing this.
    pub fn is_submission_lock(&self) -> bool {
        matches!(
            self,
            EngineError::AlreadySubmitted
                | EngineError::InvalidMove {
                    reason: MoveRejection::Submitted,
                    ..
                }
        )
    }
}
