//! Answer validation strategies and dispatch.
//!
//! Two strategies decide whether a free-text answer is correct: literal
//! matching (exact equality against a set of accepted strings) and
//! keyword matching (minimum length, no disallowed terms, at least one
//! synonym from every required group). [`validate_answer`] inspects a
//! question's configuration and routes to the right one.
//!
//! Everything here is pure and infallible: an answer is judged, never
//! rejected with an error, so the calling UI always has a renderable
//! result.

use serde::{Deserialize, Serialize};

use crate::model::{KeywordConfig, LiteralConfig, Question, ResolvedValidation};
use crate::normalize::normalize;

/// The outcome of validating one answer. Constructed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the answer is accepted.
    pub is_correct: bool,
    /// Diagnostic detail for rendering feedback to the child.
    pub feedback: Feedback,
}

/// Diagnostic feedback; the shape depends on which strategy ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Feedback {
    /// Literal mode: echoes the configured accepted answers verbatim so
    /// a UI can display "accepted answers were: …".
    #[serde(rename_all = "camelCase")]
    Literal {
        acceptable_answers: Vec<String>,
    },
    /// Keywords mode: reports the answer's word count, which synonym
    /// matched per satisfied group, and the groups with no match at all.
    #[serde(rename_all = "camelCase")]
    Keywords {
        word_count: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        matched_keywords: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        missing_keyword_groups: Option<Vec<Vec<String>>>,
    },
}

/// Validate an answer against a fixed set of accepted strings.
///
/// The answer is correct iff its normalized form equals the normalized
/// form of at least one accepted answer. Set membership, not substring:
/// an empty `acceptable_answers` list rejects every input.
pub fn validate_literal(answer: &str, config: &LiteralConfig) -> ValidationResult {
    let normalized = normalize(answer);
    let is_correct = config
        .acceptable_answers
        .iter()
        .any(|accepted| normalize(accepted) == normalized);

    ValidationResult {
        is_correct,
        feedback: Feedback::Literal {
            acceptable_answers: config.acceptable_answers.clone(),
        },
    }
}

/// Validate a free-form explanation against keyword groups.
///
/// Checks, in order and short-circuiting: the minimum word count, the
/// absence of disallowed keywords, and finally that every synonym group
/// has at least one member appearing in the normalized answer. Synonyms
/// match as substrings, which tolerates inflected forms ("rode" matches
/// an answer containing "rode tractor") at the cost of occasional
/// fragment collisions.
pub fn validate_keywords(answer: &str, config: &KeywordConfig) -> ValidationResult {
    let normalized = normalize(answer);
    let word_count = normalized.split(' ').filter(|w| !w.is_empty()).count();

    // Too short: no group matching was attempted, so every group is
    // reported as still missing.
    if word_count < config.min_words {
        return ValidationResult {
            is_correct: false,
            feedback: Feedback::Keywords {
                word_count,
                matched_keywords: None,
                missing_keyword_groups: Some(config.must_include_any.clone()),
            },
        };
    }

    // A disallowed keyword rejects the whole answer. The feedback does
    // not reveal which word triggered.
    if let Some(disallowed) = &config.disallowed_keywords {
        if disallowed
            .iter()
            .any(|keyword| normalized.contains(&normalize(keyword)))
        {
            return ValidationResult {
                is_correct: false,
                feedback: Feedback::Keywords {
                    word_count,
                    matched_keywords: None,
                    missing_keyword_groups: Some(config.must_include_any.clone()),
                },
            };
        }
    }

    let mut matched_keywords = Vec::new();
    let mut missing_groups = Vec::new();

    for group in &config.must_include_any {
        match group
            .iter()
            .find(|keyword| normalized.contains(&normalize(keyword)))
        {
            Some(keyword) => matched_keywords.push(keyword.clone()),
            None => missing_groups.push(group.clone()),
        }
    }

    let is_correct = missing_groups.is_empty();

    ValidationResult {
        is_correct,
        feedback: Feedback::Keywords {
            word_count,
            matched_keywords: (!matched_keywords.is_empty()).then_some(matched_keywords),
            missing_keyword_groups: (!missing_groups.is_empty()).then_some(missing_groups),
        },
    }
}

/// Validate an answer against whatever configuration the question carries.
///
/// Resolution order: explicit `validation` config, then the legacy
/// `acceptable_answers` list, then a fail-closed incorrect result for
/// unconfigured questions. Never panics and never returns an error; a
/// misconfigured question is surfaced as a warning log plus a
/// deterministic incorrect verdict.
pub fn validate_answer(answer: &str, question: &Question) -> ValidationResult {
    match question.resolve_validation() {
        ResolvedValidation::Literal(config) => validate_literal(answer, &config),
        ResolvedValidation::Keywords(config) => validate_keywords(answer, &config),
        ResolvedValidation::Unconfigured => {
            tracing::warn!(
                question = %question.question,
                "question has no validation config, rejecting answer"
            );
            ValidationResult {
                is_correct: false,
                feedback: Feedback::Literal {
                    acceptable_answers: Vec::new(),
                },
            }
        }
    }
}
