//! The `tagquiz check` command — non-interactive evaluation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use tagquiz_core::engine::TaggingEngine;
use tagquiz_core::report::AttemptReport;

pub fn execute(
    document: PathBuf,
    set: String,
    tags: String,
    format: String,
    output: Option<PathBuf>,
    fail_on_incorrect: bool,
) -> Result<()> {
    let doc = super::load_document(&document)?;
    let mut engine = TaggingEngine::load(&doc, &set)?;

    for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        engine
            .move_in(tag)
            .with_context(|| format!("cannot place tag '{tag}'"))?;
    }

    let report = engine.submit()?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            print_text(&report);
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        println!("Report written to {}", path.display());
    }

    if fail_on_incorrect && !report.all_correct {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text(report: &AttemptReport) {
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Result", "Feedback"]);

    for entry in &report.entries {
        table.add_row(vec![
            Cell::new(&entry.value),
            Cell::new(if entry.correct { "correct" } else { "incorrect" }),
            Cell::new(&entry.feedback),
        ]);
    }

    println!("{table}");

    if report.all_correct {
        println!("All correct!");
    } else {
        println!(
            "{}/{} placed tags correct; the answer was not fully matched.",
            report.correct_count(),
            report.entries.len()
        );
    }
}
