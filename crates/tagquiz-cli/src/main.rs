//! tagquiz CLI — the user-facing command-line host for the tagging engine.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tagquiz", version, about = "Drag-and-drop tagging quiz engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tag sets in a document
    List {
        /// Path to a .json tag-set document or directory
        #[arg(long)]
        document: PathBuf,
    },

    /// Validate tag-set documents
    Validate {
        /// Path to a .json tag-set document or directory
        #[arg(long)]
        document: PathBuf,
    },

    /// Evaluate a selection of tags against a tag set
    Check {
        /// Path to a .json tag-set document or directory
        #[arg(long)]
        document: PathBuf,

        /// Tag set name
        #[arg(long)]
        set: String,

        /// Comma-separated tag values to place in the answer area
        #[arg(long)]
        tags: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the attempt report as JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit code 1 unless the selection is exactly correct
        #[arg(long)]
        fail_on_incorrect: bool,
    },

    /// Play a tag set interactively
    Play {
        /// Path to a .json tag-set document or directory
        #[arg(long)]
        document: PathBuf,

        /// Tag set name
        #[arg(long)]
        set: String,
    },

    /// Create a starter tag-set document
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tagquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { document } => commands::list::execute(document),
        Commands::Validate { document } => commands::validate::execute(document),
        Commands::Check {
            document,
            set,
            tags,
            format,
            output,
            fail_on_incorrect,
        } => commands::check::execute(document, set, tags, format, output, fail_on_incorrect),
        Commands::Play { document, set } => commands::play::execute(document, set),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
