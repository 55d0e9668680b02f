//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use leesquiz_core::model::Challenge;
use leesquiz_core::parser;

pub mod check;
pub mod list;
pub mod validate;

/// Load challenges from a single file or a content directory.
pub(crate) fn load_content(path: &Path) -> Result<Vec<Challenge>> {
    let challenges = if path.is_dir() {
        parser::load_challenge_directory(path)?
    } else {
        vec![parser::load_challenge(path)?]
    };

    Ok(challenges)
}
