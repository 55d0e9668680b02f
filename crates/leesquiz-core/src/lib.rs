//! leesquiz-core — challenge content model and answer validation.
//!
//! This crate defines the data model for reading challenges, the text
//! normalizer, and the answer validation strategies that the quiz UI
//! builds on.

pub mod library;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod validate;
