//! The `tagquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("tag-sets")?;

    let example_path = std::path::Path::new("tag-sets/example.json");
    if example_path.exists() {
        println!("tag-sets/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DOCUMENT)?;
        println!("Created tag-sets/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit tag-sets/example.json with your own tags and feedback");
    println!("  2. Run: tagquiz validate --document tag-sets/example.json");
    println!("  3. Run: tagquiz play --document tag-sets/example.json --set beach");

    Ok(())
}

const EXAMPLE_DOCUMENT: &str = r#"{
  "beach": {
    "tagOptions": ["Relaxing", "Crowded", "Sunny"],
    "tagAnswers": [
      { "Relaxing": { "correct": true, "feedback": "Feeling relaxed while enjoying the calm atmosphere of the beach." } },
      { "Sunny": { "correct": true, "feedback": "Enjoying the warmth and brightness of the sun at the beach." } }
    ]
  }
}
"#;
