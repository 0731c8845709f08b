//! The `tagquiz play` command — an interactive terminal session.
//!
//! This is a presentation adapter over the engine: it translates typed
//! commands into engine commands and re-renders from snapshots. Disallowed
//! interactions print the engine's error and the session continues.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use tagquiz_core::engine::{EngineSnapshot, TaggingEngine};

pub fn execute(document: PathBuf, set: String) -> Result<()> {
    let doc = super::load_document(&document)?;
    let mut engine = TaggingEngine::load(&doc, &set)?;

    println!("Playing '{set}'. Type 'help' for commands.");
    render(&engine.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let arg = parts.collect::<Vec<_>>().join(" ");

        match command {
            "pick" => {
                if let Err(e) = engine.move_in(&arg) {
                    println!("{e}");
                } else {
                    render(&engine.snapshot());
                }
            }
            "back" => {
                if let Err(e) = engine.move_out(&arg) {
                    println!("{e}");
                } else {
                    render(&engine.snapshot());
                }
            }
            "toggle" => {
                if let Err(e) = engine.toggle(&arg) {
                    println!("{e}");
                } else {
                    render(&engine.snapshot());
                }
            }
            "submit" => match engine.submit() {
                Ok(_) => render(&engine.snapshot()),
                Err(e) => println!("{e}"),
            },
            "reset" => {
                engine.reset();
                render(&engine.snapshot());
            }
            "show" => render(&engine.snapshot()),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help'"),
        }
    }

    Ok(())
}

fn render(snapshot: &EngineSnapshot) {
    if snapshot.pool.is_empty() {
        println!("Pool: (empty)");
    } else {
        println!("Pool: {}", snapshot.pool.join(", "));
    }

    if snapshot.answer_area.is_empty() {
        println!("Answer area: (drag answers here)");
    } else {
        println!("Answer area:");
        for entry in &snapshot.answer_area {
            match &entry.verdict {
                // Entries stay neutral until the attempt is submitted.
                None => println!("  {}", entry.value),
                Some(v) if v.correct => {
                    println!("  {} [correct] {}", entry.value, v.feedback)
                }
                Some(v) => println!("  {} [incorrect] {}", entry.value, v.feedback),
            }
        }
    }

    match snapshot.all_correct {
        Some(true) => println!("All correct!"),
        Some(false) => println!("The answer was not fully matched. Try 'reset'."),
        None => {}
    }
}

fn print_help() {
    println!("Commands:");
    println!("  pick <tag>    move a tag from the pool into the answer area");
    println!("  back <tag>    move a tag from the answer area back to the pool");
    println!("  toggle <tag>  move a tag to the other container");
    println!("  show          print the current state");
    println!("  submit        evaluate the answer area");
    println!("  reset         start the attempt over");
    println!("  quit          leave the session");
}
