//! # mqa-core
//!
//! Core types for the member-message QA system: [`MessageRecord`], the ask/answer
//! wire types, the fixed fallback answers, and tracing initialization.
//! Transport-agnostic; used by corpus, answer-engine, and mqa-server.

pub mod logger;
pub mod types;


pub use logger::init_tracing;
pub use types::{Answer, HealthStatus, MessageRecord, Question, ServiceInfo, NO_ANSWER, NO_DATA};
