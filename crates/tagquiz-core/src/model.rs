//! Core data model types for tagquiz.
//!
//! These are the fundamental types the engine and its hosts use to represent
//! tag sets: the on-disk document shape, the answer mapping, and the resolved
//! tag definitions the engine works with.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single draggable tag, resolved against its answer mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    /// Unique display string, the tag's identifier within its set.
    pub value: String,
    /// Whether this tag belongs in the answer.
    pub is_correct: bool,
    /// Explanatory text shown after evaluation.
    #[serde(default)]
    pub feedback: String,
}

/// Correctness and feedback for one tag, as stored in the answer mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagAnswer {
    /// Whether the tag belongs in the answer.
    pub correct: bool,
    /// Explanatory text shown after evaluation.
    #[serde(default)]
    pub feedback: String,
}

/// One named tag set as it appears in a tag-set document.
///
/// `tag_answers` is a list of single-entry mappings, matching the JSON
/// resource layout (`{"Sunny": {"correct": true, "feedback": "..."}}`).
/// Options without an answer entry default to incorrect with no feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagSetEntry {
    /// Ordered option strings; this order is the canonical pool order.
    pub tag_options: Vec<String>,
    /// The answer mapping, one single-entry map per answered tag.
    #[serde(default)]
    pub tag_answers: Vec<HashMap<String, TagAnswer>>,
}

/// A parsed tag-set document: tag sets keyed by name.
pub type TagSetDocument = BTreeMap<String, TagSetEntry>;

/// Errors raised while resolving a tag-set entry into a usable set.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// An answer mapping references a tag that is not among the options.
    #[error("tag set '{set}': answer references unknown tag '{value}'")]
    UnknownAnswerTag { set: String, value: String },

    /// The same option value appears more than once.
    #[error("tag set '{set}': duplicate option '{value}'")]
    DuplicateOption { set: String, value: String },
}

/// A resolved tag set: every option wrapped into a [`TagDefinition`], in
/// canonical (option) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
    /// The set's name within its document.
    pub name: String,
    /// Tag definitions in canonical order.
    pub tags: Vec<TagDefinition>,
}

impl TagSet {
    /// Resolve a document entry into a `TagSet`.
    ///
    /// Enforces the document invariants: option values are unique, and every
    /// answer-mapping key names an existing option.
    pub fn resolve(name: &str, entry: &TagSetEntry) -> Result<Self, DocumentError> {
        let mut answers: HashMap<&str, &TagAnswer> = HashMap::new();
        for mapping in &entry.tag_answers {
            for (value, answer) in mapping {
                if !entry.tag_options.iter().any(|o| o == value) {
                    return Err(DocumentError::UnknownAnswerTag {
                        set: name.to_string(),
                        value: value.clone(),
                    });
                }
                answers.insert(value.as_str(), answer);
            }
        }

        let mut seen = HashSet::new();
        let mut tags = Vec::with_capacity(entry.tag_options.len());
        for option in &entry.tag_options {
            if !seen.insert(option.as_str()) {
                return Err(DocumentError::DuplicateOption {
                    set: name.to_string(),
                    value: option.clone(),
                });
            }
            let (is_correct, feedback) = match answers.get(option.as_str()) {
                Some(answer) => (answer.correct, answer.feedback.clone()),
                None => (false, String::new()),
            };
            tags.push(TagDefinition {
                value: option.clone(),
                is_correct,
                feedback,
            });
        }

        Ok(TagSet {
            name: name.to_string(),
            tags,
        })
    }

    /// Look up a tag definition by value.
    pub fn tag(&self, value: &str) -> Option<&TagDefinition> {
        self.tags.iter().find(|t| t.value == value)
    }

    /// Values of all tags that belong in the answer.
    pub fn correct_values(&self) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|t| t.is_correct)
            .map(|t| t.value.as_str())
            .collect()
    }
}
