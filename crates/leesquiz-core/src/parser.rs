//! Challenge content parser.
//!
//! Loads challenges from JSON files and directories, and lints them for
//! content-authoring mistakes that would silently break validation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::{Challenge, ResolvedValidation};
use crate::normalize::normalize;

/// Errors from loading challenge content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A content file could not be read.
    #[error("failed to read challenge file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file is not valid challenge JSON.
    #[error("failed to parse challenge file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The given content path is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Parse a JSON string into a [`Challenge`].
pub fn parse_challenge_str(content: &str, source_path: &Path) -> Result<Challenge, ContentError> {
    serde_json::from_str(content).map_err(|source| ContentError::Json {
        path: source_path.to_path_buf(),
        source,
    })
}

/// Load a single challenge JSON file.
pub fn load_challenge(path: &Path) -> Result<Challenge, ContentError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_challenge_str(&content, path)
}

/// Recursively load all `.json` challenge files from a directory.
///
/// Files that fail to parse are skipped with a warning rather than
/// failing the whole load; one broken file must not take the app down.
pub fn load_challenge_directory(dir: &Path) -> Result<Vec<Challenge>, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::NotADirectory(dir.to_path_buf()));
    }

    let mut challenges = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ContentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            challenges.extend(load_challenge_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "json") {
            match load_challenge(&path) {
                Ok(challenge) => challenges.push(challenge),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(challenges)
}

/// A warning from challenge content linting.
#[derive(Debug, Clone)]
pub struct ContentWarning {
    /// The challenge ID (if attributable).
    pub challenge_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Lint a set of challenges for common content-authoring issues.
///
/// Warnings, never errors: broken content still loads, it just answers
/// wrong, so the author gets a list instead of a crash.
pub fn validate_challenges(challenges: &[Challenge]) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for challenge in challenges {
        if !seen_ids.insert(&challenge.id) {
            warnings.push(ContentWarning {
                challenge_id: Some(challenge.id.clone()),
                message: format!("duplicate challenge ID: {}", challenge.id),
            });
        }
    }

    for challenge in challenges {
        warnings.extend(validate_challenge(challenge));
    }

    warnings
}

/// Lint a single challenge.
pub fn validate_challenge(challenge: &Challenge) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();
    let mut warn = |message: String| {
        warnings.push(ContentWarning {
            challenge_id: Some(challenge.id.clone()),
            message,
        });
    };

    if challenge.questions.is_empty() {
        warn("challenge has no questions".into());
    }

    for (index, question) in challenge.questions.iter().enumerate() {
        let number = index + 1;

        if question.question.trim().is_empty() {
            warn(format!("question {number}: prompt is empty"));
        }

        match question.resolve_validation() {
            ResolvedValidation::Unconfigured => {
                warn(format!(
                    "question {number}: no validation config, every answer will be rejected"
                ));
            }
            ResolvedValidation::Literal(config) => {
                if config.acceptable_answers.is_empty() {
                    warn(format!(
                        "question {number}: acceptableAnswers is empty, every answer will be rejected"
                    ));
                }
            }
            ResolvedValidation::Keywords(config) => {
                if config.must_include_any.is_empty() {
                    warn(format!(
                        "question {number}: mustIncludeAny is empty, any answer meeting the word minimum passes"
                    ));
                }
                for (group_index, group) in config.must_include_any.iter().enumerate() {
                    if group.is_empty() {
                        warn(format!(
                            "question {number}: keyword group {} is empty, every answer will be rejected",
                            group_index + 1
                        ));
                    }
                    for keyword in group {
                        if normalize(keyword).is_empty() {
                            warn(format!(
                                "question {number}: keyword {keyword:?} normalizes to nothing and matches any answer"
                            ));
                        }
                    }
                }
                for keyword in config.disallowed_keywords.iter().flatten() {
                    if normalize(keyword).is_empty() {
                        warn(format!(
                            "question {number}: disallowed keyword {keyword:?} normalizes to nothing and rejects every answer"
                        ));
                    }
                }
            }
        }
    }

    warnings
}
