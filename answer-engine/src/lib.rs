//! # Answer engine
//!
//! Turns a corpus of member messages into answers to natural-language
//! questions:
//!
//! - [`UserIndex`] – messages grouped per user, preserving arrival order
//! - [`RuleBasedExtractor`] – deterministic keyword-rule answers
//! - [`AnswerEngine`] – collaborator-first orchestration with the extractor
//!   as fallback

mod engine;
mod extractor;
mod index;


pub use engine::AnswerEngine;
pub use extractor::RuleBasedExtractor;
pub use index::{UserIndex, UserMessage};
