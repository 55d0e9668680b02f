//! The `leesquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use leesquiz_core::parser;

pub fn execute(content_path: PathBuf) -> Result<()> {
    let challenges = super::load_content(&content_path)?;

    for challenge in &challenges {
        println!(
            "Challenge: {} ({} questions)",
            challenge.title,
            challenge.questions.len()
        );
    }

    let warnings = parser::validate_challenges(&challenges);
    for w in &warnings {
        let prefix = w
            .challenge_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All challenges valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
