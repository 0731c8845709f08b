//! The `tagquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tagquiz_core::model::TagSet;

pub fn execute(document: PathBuf) -> Result<()> {
    let doc = super::load_document(&document)?;

    if doc.is_empty() {
        println!("No tag sets found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Tag set", "Options", "Correct"]);

    for (name, entry) in &doc {
        let correct = match TagSet::resolve(name, entry) {
            Ok(set) => set.correct_values().len().to_string(),
            Err(_) => "?".to_string(),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(entry.tag_options.len()),
            Cell::new(correct),
        ]);
    }

    println!("{table}");
    println!("{} tag set(s)", doc.len());

    Ok(())
}
