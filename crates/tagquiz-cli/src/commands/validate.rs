//! The `tagquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use tagquiz_core::parser::validate_document;

pub fn execute(document: PathBuf) -> Result<()> {
    let doc = super::load_document(&document)?;

    println!("{} tag set(s) loaded", doc.len());

    let warnings = validate_document(&doc);
    for w in &warnings {
        let prefix = w
            .set_name
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All tag sets valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
