//! Deterministic question answering from keyword rules.
//!
//! The extractor never fails and holds no state: the same index and question
//! always produce the same answer. It backs the engine whenever the
//! collaborator is disabled or unreachable.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use mqa_core::NO_ANSWER;

use crate::index::{UserIndex, UserMessage};

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const TEMPORAL_QUESTION_WORDS: [&str; 3] = ["trip", "travel", "visit"];
const TEMPORAL_MESSAGE_WORDS: [&str; 5] = ["trip", "travel", "going", "visit", "plan"];
const PREFERENCE_WORDS: [&str; 3] = ["favorite", "like", "prefer"];

/// Capitalised tokens that are never restaurant names.
const NAME_EXCLUSIONS: [&str; 5] = ["I", "The", "A", "My", "We"];

/// One extraction rule: a question predicate plus a message extractor.
///
/// Rules run in declaration order. The first rule whose predicate matches the
/// question and whose extractor yields an answer wins; an extractor that
/// yields nothing falls through.
struct Rule {
    name: &'static str,
    applies: fn(&str) -> bool,
    extract: fn(&str, &str, &[UserMessage]) -> Option<String>,
}

static RULES: [Rule; 3] = [
    Rule {
        name: "temporal",
        applies: temporal_applies,
        extract: temporal_extract,
    },
    Rule {
        name: "count",
        applies: count_applies,
        extract: count_extract,
    },
    Rule {
        name: "preference",
        applies: preference_applies,
        extract: preference_extract,
    },
];

/// Keyword-rule answerer over a [`UserIndex`].
#[derive(Debug, Default)]
pub struct RuleBasedExtractor;

impl RuleBasedExtractor {
    /// Answers from the index alone. Unknown user, or a known user with no
    /// messages, yields [`NO_ANSWER`]; otherwise some answer is always found.
    pub fn answer(&self, index: &UserIndex, question: &str) -> String {
        let q_lower = question.to_lowercase();

        let Some((user, messages)) = resolve_user(index, &q_lower) else {
            return NO_ANSWER.to_string();
        };
        if messages.is_empty() {
            return NO_ANSWER.to_string();
        }

        for rule in &RULES {
            if !(rule.applies)(&q_lower) {
                continue;
            }
            if let Some(answer) = (rule.extract)(user, &q_lower, messages) {
                debug!(rule = rule.name, user, "Extraction rule matched");
                return answer;
            }
        }

        // Default rule: the user's first message verbatim.
        messages[0].message.clone()
    }
}

/// First user whose full name, or first name token, appears in the question.
fn resolve_user<'a>(index: &'a UserIndex, q_lower: &str) -> Option<(&'a str, &'a [UserMessage])> {
    index.iter().find(|(name, _)| {
        if q_lower.contains(&name.to_lowercase()) {
            return true;
        }
        name.split_whitespace()
            .next()
            .is_some_and(|first| q_lower.contains(&first.to_lowercase()))
    })
}

fn temporal_applies(q_lower: &str) -> bool {
    q_lower.contains("when") && TEMPORAL_QUESTION_WORDS.iter().any(|w| q_lower.contains(w))
}

fn temporal_extract(user: &str, _q_lower: &str, messages: &[UserMessage]) -> Option<String> {
    let candidate = messages.iter().find(|msg| {
        let m_lower = msg.message.to_lowercase();
        TEMPORAL_MESSAGE_WORDS.iter().any(|w| m_lower.contains(w))
    })?;

    // Month matching is case-sensitive against the original text.
    for month in MONTHS {
        if candidate.message.contains(month) {
            return Some(format!("{user} is planning their trip in {month}."));
        }
    }
    Some(candidate.message.clone())
}

fn count_applies(q_lower: &str) -> bool {
    q_lower.contains("how many")
}

fn count_extract(user: &str, q_lower: &str, messages: &[UserMessage]) -> Option<String> {
    if !q_lower.contains("car") {
        return None;
    }
    let candidate = messages
        .iter()
        .find(|msg| msg.message.to_lowercase().contains("car"))?;

    match DIGITS_RE.find(&candidate.message) {
        Some(digits) => Some(format!("{user} has {} car(s).", digits.as_str())),
        None => Some(candidate.message.clone()),
    }
}

fn preference_applies(q_lower: &str) -> bool {
    PREFERENCE_WORDS.iter().any(|w| q_lower.contains(w)) && q_lower.contains("restaurant")
}

fn preference_extract(user: &str, _q_lower: &str, messages: &[UserMessage]) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    let mut first_mention: Option<&str> = None;

    for msg in messages {
        if !msg.message.to_lowercase().contains("restaurant") {
            continue;
        }
        if first_mention.is_none() {
            first_mention = Some(&msg.message);
        }
        // A name is a capitalised token directly after the word "restaurant".
        let tokens: Vec<&str> = msg.message.split_whitespace().collect();
        for window in tokens.windows(2) {
            let (prev, token) = (window[0], window[1]);
            if prev.to_lowercase() != "restaurant" {
                continue;
            }
            let capitalised = token.chars().next().is_some_and(|c| c.is_uppercase());
            if !capitalised || NAME_EXCLUSIONS.contains(&token) {
                continue;
            }
            if !names.contains(&token) {
                names.push(token);
            }
        }
    }

    if !names.is_empty() {
        return Some(format!(
            "{user}'s favorite restaurants include: {}",
            names.join(", ")
        ));
    }
    first_mention.map(str::to_string)
}
