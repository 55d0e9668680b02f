//! The `leesquiz list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use leesquiz_core::library::ChallengeLibrary;
use leesquiz_core::model::Challenge;

pub fn execute(content_path: PathBuf, level: Option<u8>, random: bool) -> Result<()> {
    let library = ChallengeLibrary::new(super::load_content(&content_path)?);

    if random {
        match library.random(level) {
            Some(challenge) => println!("{} — {}", challenge.id, challenge.title),
            None => print_empty(level),
        }
        return Ok(());
    }

    let challenges: Vec<&Challenge> = match level {
        Some(level) => library.by_level(level),
        None => library.all().iter().collect(),
    };

    if challenges.is_empty() {
        print_empty(level);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Level", "Questions"]);

    for challenge in &challenges {
        table.add_row(vec![
            challenge.id.clone(),
            challenge.title.clone(),
            challenge
                .level
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".into()),
            challenge.questions.len().to_string(),
        ]);
    }

    println!("{table}");

    if level.is_none() {
        let levels = library.levels();
        if !levels.is_empty() {
            let formatted: Vec<String> = levels.iter().map(u8::to_string).collect();
            println!("Levels: {}", formatted.join(", "));
        }
    }

    Ok(())
}

fn print_empty(level: Option<u8>) {
    match level {
        Some(level) => println!("No challenges at level {level}."),
        None => println!("No challenges found."),
    }
}
