//! leesquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "leesquiz",
    version,
    about = "Reading-comprehension quiz content and answer checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an answer against a question from the content
    Check {
        /// Path to a challenge .json file or content directory
        #[arg(long)]
        content: PathBuf,

        /// Challenge ID (e.g. "de-kat")
        #[arg(long)]
        challenge: String,

        /// Question number, starting at 1
        #[arg(long, default_value = "1")]
        question: usize,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// The answer to check
        answer: Vec<String>,
    },

    /// Validate challenge content files
    Validate {
        /// Path to a challenge .json file or content directory
        #[arg(long)]
        content: PathBuf,
    },

    /// List challenges in the content set
    List {
        /// Path to a challenge .json file or content directory
        #[arg(long)]
        content: PathBuf,

        /// Filter to one difficulty level
        #[arg(long)]
        level: Option<u8>,

        /// Pick one random challenge instead of listing all
        #[arg(long)]
        random: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("leesquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            content,
            challenge,
            question,
            format,
            answer,
        } => commands::check::execute(content, challenge, question, format, answer),
        Commands::Validate { content } => commands::validate::execute(content),
        Commands::List {
            content,
            level,
            random,
        } => commands::list::execute(content, level, random),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
