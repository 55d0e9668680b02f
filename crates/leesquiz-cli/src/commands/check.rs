//! The `leesquiz check` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use leesquiz_core::validate::{validate_answer, Feedback};

pub fn execute(
    content_path: PathBuf,
    challenge_id: String,
    question_number: usize,
    format: String,
    answer_words: Vec<String>,
) -> Result<()> {
    let answer = answer_words.join(" ");
    let challenges = super::load_content(&content_path)?;

    let Some(challenge) = challenges.iter().find(|c| c.id == challenge_id) else {
        bail!("no challenge with id '{challenge_id}'");
    };

    let Some(question) = question_number
        .checked_sub(1)
        .and_then(|index| challenge.questions.get(index))
    else {
        bail!(
            "challenge '{}' has {} question(s), there is no question {}",
            challenge.id,
            challenge.questions.len(),
            question_number
        );
    };

    let result = validate_answer(&answer, question);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Question: {}", question.question);
    println!("Answer: {answer}");
    println!();

    if result.is_correct {
        println!("Correct!");
    } else {
        println!("Incorrect.");
    }

    match &result.feedback {
        Feedback::Literal { acceptable_answers } => {
            if !result.is_correct && !acceptable_answers.is_empty() {
                println!("Accepted answers: {}", acceptable_answers.join(", "));
            }
        }
        Feedback::Keywords {
            word_count,
            matched_keywords,
            missing_keyword_groups,
        } => {
            println!("Words: {word_count}");
            if let Some(matched) = matched_keywords {
                println!("Matched: {}", matched.join(", "));
            }
            for group in missing_keyword_groups.iter().flatten() {
                println!("Needs any of: {}", group.join(", "));
            }
        }
    }

    if !result.is_correct {
        if let Some(hint) = &question.hint {
            println!("Hint: {hint}");
        }
    }

    Ok(())
}
