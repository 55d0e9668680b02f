//! Core data model types for leesquiz.
//!
//! These are the fundamental types the whole system uses to represent
//! reading challenges, their comprehension questions, and the validation
//! configuration that decides how a free-text answer is judged.
//!
//! The serialized form uses camelCase field names so it matches the
//! challenge JSON files the app ships as content.

use serde::{Deserialize, Serialize};

/// A reading challenge: a short story with illustrations and
/// comprehension questions. One challenge is stored per content file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Unique identifier (e.g. "de-kat").
    pub id: String,
    /// Display title.
    pub title: String,
    /// The story text. Opaque to validation.
    pub text: String,
    /// Illustrations shown alongside the text.
    #[serde(default)]
    pub images: Vec<ImageRef>,
    /// Comprehension questions about the text.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Difficulty level (1 = beginner, 2 = intermediate, 3 = advanced).
    #[serde(default)]
    pub level: Option<u8>,
}

/// An illustration reference with alt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image URL or path.
    pub src: String,
    /// Alt text for accessibility.
    pub alt: String,
}

/// A single comprehension question.
///
/// A question carries either an explicit [`ValidationConfig`] or, in
/// older content, a bare `acceptableAnswers` list. Both may be present;
/// [`Question::resolve_validation`] applies the precedence rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The prompt shown to the child. Opaque to validation.
    pub question: String,
    /// Optional hint text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Legacy flat list of accepted answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptable_answers: Option<Vec<String>>,
    /// Explicit validation configuration. Wins over `acceptable_answers`
    /// when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationConfig>,
}

/// How a question judges answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ValidationConfig {
    /// Exact match against a fixed set of accepted strings.
    Literal(LiteralConfig),
    /// Flexible keyword matching for free-form explanations.
    Keywords(KeywordConfig),
}

/// Configuration for literal (exact-match) validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralConfig {
    /// Accepted answers, compared case-insensitively after normalization.
    pub acceptable_answers: Vec<String>,
}

/// Configuration for keyword-group validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordConfig {
    /// Minimum number of words the answer must contain.
    #[serde(default)]
    pub min_words: usize,
    /// Synonym groups. The answer must contain at least one synonym from
    /// every group.
    pub must_include_any: Vec<Vec<String>>,
    /// Whether words beyond the required keywords are accepted. Carried
    /// from the content schema; validation does not read it.
    #[serde(default = "default_true")]
    pub allow_extra_text: bool,
    /// Reject the answer outright if any of these appear in it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disallowed_keywords: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

/// The effective validation configuration of a question, after applying
/// the precedence rule between the explicit `validation` field and the
/// legacy `acceptable_answers` list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValidation {
    /// Validate with literal matching.
    Literal(LiteralConfig),
    /// Validate with keyword-group matching.
    Keywords(KeywordConfig),
    /// Neither field is present. A content defect; validation fails closed.
    Unconfigured,
}

impl Question {
    /// Resolve which validation strategy applies to this question.
    ///
    /// Precedence, first match wins: the explicit `validation` config;
    /// a legacy `acceptable_answers` list, treated as an implicit literal
    /// config; otherwise [`ResolvedValidation::Unconfigured`].
    pub fn resolve_validation(&self) -> ResolvedValidation {
        if let Some(config) = &self.validation {
            return match config {
                ValidationConfig::Literal(c) => ResolvedValidation::Literal(c.clone()),
                ValidationConfig::Keywords(c) => ResolvedValidation::Keywords(c.clone()),
            };
        }

        if let Some(answers) = &self.acceptable_answers {
            return ResolvedValidation::Literal(LiteralConfig {
                acceptable_answers: answers.clone(),
            });
        }

        ResolvedValidation::Unconfigured
    }
}
