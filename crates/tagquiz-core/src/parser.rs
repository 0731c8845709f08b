//! JSON tag-set document parsing and validation.
//!
//! Loads tag-set documents from strings, files, and directories, and checks
//! them for authoring mistakes. Retrieving the document (an HTTP fetch in a
//! web host) is the host's concern; these helpers start from bytes already
//! on disk.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{TagSet, TagSetDocument, TagSetEntry};

/// Parse a JSON string into a `TagSetDocument`.
pub fn parse_document_str(content: &str) -> Result<TagSetDocument> {
    let doc: TagSetDocument =
        serde_json::from_str(content).context("failed to parse tag-set document")?;
    Ok(doc)
}

/// Parse a single JSON file into a `TagSetDocument`.
pub fn parse_document(path: &Path) -> Result<TagSetDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tag-set document: {}", path.display()))?;
    parse_document_str(&content).with_context(|| format!("in {}", path.display()))
}

/// Recursively load and merge all `.json` documents from a directory.
///
/// Unparseable files and duplicate set names are skipped with a warning;
/// the first definition of a name wins.
pub fn load_document_directory(dir: &Path) -> Result<TagSetDocument> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut merged = TagSetDocument::new();
    merge_directory(dir, &mut merged)?;
    Ok(merged)
}

fn merge_directory(dir: &Path, merged: &mut TagSetDocument) -> Result<()> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    // Deterministic merge order, so "first wins" is well-defined.
    paths.sort();

    for path in paths {
        if path.is_dir() {
            merge_directory(&path, merged)?;
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "json") {
            match parse_document(&path) {
                Ok(doc) => {
                    for (name, set) in doc {
                        if merged.contains_key(&name) {
                            tracing::warn!(
                                "duplicate tag set '{name}' in {}, keeping the first",
                                path.display()
                            );
                        } else {
                            merged.insert(name, set);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }
    Ok(())
}

/// A warning from tag-set document validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The tag-set name (if applicable).
    pub set_name: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a document for common authoring issues.
///
/// This is lenient where [`TagSet::resolve`] is strict: everything is
/// collected into one list so an authoring tool can report all issues at
/// once instead of stopping at the first.
pub fn validate_document(doc: &TagSetDocument) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if doc.is_empty() {
        warnings.push(ValidationWarning {
            set_name: None,
            message: "document contains no tag sets".into(),
        });
    }

    for (name, entry) in doc {
        validate_entry(name, entry, &mut warnings);
    }

    warnings
}

fn validate_entry(name: &str, entry: &TagSetEntry, warnings: &mut Vec<ValidationWarning>) {
    let warn = |warnings: &mut Vec<ValidationWarning>, message: String| {
        warnings.push(ValidationWarning {
            set_name: Some(name.to_string()),
            message,
        });
    };

    if entry.tag_options.is_empty() {
        warn(warnings, "tag set has no options".into());
    }

    let mut seen = HashSet::new();
    for option in &entry.tag_options {
        if !seen.insert(option.as_str()) {
            warn(warnings, format!("duplicate option '{option}'"));
        }
    }

    let mut any_correct = false;
    for mapping in &entry.tag_answers {
        if mapping.len() != 1 {
            warn(
                warnings,
                format!(
                    "answer mapping should have exactly one entry, found {}",
                    mapping.len()
                ),
            );
        }
        for (value, answer) in mapping {
            if !entry.tag_options.iter().any(|o| o == value) {
                warn(
                    warnings,
                    format!("answer references unknown tag '{value}'"),
                );
            }
            if answer.correct {
                any_correct = true;
                if answer.feedback.trim().is_empty() {
                    warn(
                        warnings,
                        format!("correct tag '{value}' has no feedback"),
                    );
                }
            }
        }
    }

    if !entry.tag_options.is_empty() && !any_correct {
        warn(warnings, "tag set has no correct tags".into());
    }

    // Anything validate misses but resolution rejects still shows up here.
    if let Err(e) = TagSet::resolve(name, entry) {
        if !warnings.iter().any(|w| w.set_name.as_deref() == Some(name)) {
            warn(warnings, format!("does not resolve: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_JSON: &str = r#"{
        "beach": {
            "tagOptions": ["Relaxing", "Crowded", "Sunny"],
            "tagAnswers": [
                {"Relaxing": {"correct": true, "feedback": "Calm atmosphere."}},
                {"Sunny": {"correct": true, "feedback": "Warm and bright."}}
            ]
        },
        "city": {
            "tagOptions": ["Noisy", "Vibrant"],
            "tagAnswers": [
                {"Vibrant": {"correct": true, "feedback": "Full of life."}}
            ]
        }
    }"#;

    #[test]
    fn parse_valid_document() {
        let doc = parse_document_str(VALID_JSON).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc["beach"].tag_options.len(), 3);
        assert_eq!(doc["city"].tag_answers.len(), 1);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_document_str("{not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn parse_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, VALID_JSON).unwrap();

        let doc = parse_document(&path).unwrap();
        assert!(doc.contains_key("beach"));
    }

    #[test]
    fn parse_document_missing_file_mentions_path() {
        let err = parse_document(Path::new("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn directory_load_merges_and_keeps_first_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), VALID_JSON).unwrap();
        std::fs::write(
            dir.path().join("b.json"),
            r#"{"beach": {"tagOptions": ["Other"]},
                "mountain": {"tagOptions": ["Steep"]}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();

        let doc = load_document_directory(dir.path()).unwrap();
        assert_eq!(doc.len(), 3);
        assert!(doc.contains_key("mountain"));
        // "beach" from a.json wins over the b.json duplicate.
        assert_eq!(doc["beach"].tag_options.len(), 3);
    }

    #[test]
    fn directory_load_rejects_non_directory() {
        let err = load_document_directory(Path::new("missing-dir")).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn validate_accepts_clean_document() {
        let doc = parse_document_str(VALID_JSON).unwrap();
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn validate_flags_empty_document() {
        let warnings = validate_document(&TagSetDocument::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].set_name.is_none());
    }

    #[test]
    fn validate_collects_authoring_issues() {
        let doc = parse_document_str(
            r#"{
                "bad": {
                    "tagOptions": ["Sunny", "Sunny"],
                    "tagAnswers": [
                        {"Stormy": {"correct": false, "feedback": ""}},
                        {"Sunny": {"correct": true, "feedback": ""}}
                    ]
                }
            }"#,
        )
        .unwrap();

        let warnings = validate_document(&doc);
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();

        assert!(messages.iter().any(|m| m.contains("duplicate option")));
        assert!(messages.iter().any(|m| m.contains("unknown tag 'Stormy'")));
        assert!(messages.iter().any(|m| m.contains("has no feedback")));
        assert!(warnings.iter().all(|w| w.set_name.as_deref() == Some("bad")));
    }

    #[test]
    fn validate_flags_set_without_correct_tags() {
        let doc = parse_document_str(r#"{"empty": {"tagOptions": ["A", "B"]}}"#).unwrap();
        let warnings = validate_document(&doc);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no correct tags")));
    }
}
