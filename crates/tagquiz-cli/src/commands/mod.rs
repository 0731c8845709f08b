//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use tagquiz_core::model::TagSetDocument;
use tagquiz_core::parser;

pub mod check;
pub mod init;
pub mod list;
pub mod play;
pub mod validate;

/// Load a document from a file, or merge every document under a directory.
pub fn load_document(path: &Path) -> Result<TagSetDocument> {
    tracing::debug!("loading tag-set document from {}", path.display());
    if path.is_dir() {
        parser::load_document_directory(path)
    } else {
        parser::parse_document(path)
    }
}
