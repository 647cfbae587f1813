//! Core types: message record, ask/answer payloads, and fixed fallback answers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Returned when the question names no member the system knows about.
pub const NO_ANSWER: &str = "I don't have enough information to answer that question.";

/// Returned when no member messages are available at all.
pub const NO_DATA: &str = "I don't have any member messages to answer questions about.";

/// One member message as delivered by the source API.
///
/// `timestamp` is opaque source text and is never parsed. Sparse upstream
/// records are tolerated: a missing author reads as `"Unknown"`, other missing
/// fields as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default = "unknown_user")]
    pub user_name: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub message: String,
}

fn unknown_user() -> String {
    "Unknown".to_string()
}

/// Inbound ask payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
}

/// Outbound answer payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// Body of the health endpoint: process liveness plus source reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub api_connected: bool,
}

/// Body of the root endpoint: what this service is and what it serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}
