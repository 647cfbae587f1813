//! Per-user view of the message corpus.

use mqa_core::MessageRecord;

/// One message as kept in the index. `timestamp` stays opaque source text.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMessage {
    pub timestamp: String,
    pub message: String,
}

struct UserEntry {
    name: String,
    messages: Vec<UserMessage>,
}

/// Messages grouped by author.
///
/// Users keep the order of their first appearance in the corpus and each
/// user's messages keep arrival order. Name resolution picks the first
/// matching user, so index order is part of the answering contract.
#[derive(Default)]
pub struct UserIndex {
    entries: Vec<UserEntry>,
}

impl UserIndex {
    pub fn from_records(records: &[MessageRecord]) -> Self {
        let mut entries: Vec<UserEntry> = Vec::new();
        for record in records {
            let message = UserMessage {
                timestamp: record.timestamp.clone(),
                message: record.message.clone(),
            };
            match entries
                .iter_mut()
                .find(|entry| entry.name == record.user_name)
            {
                Some(entry) => entry.messages.push(message),
                None => entries.push(UserEntry {
                    name: record.user_name.clone(),
                    messages: vec![message],
                }),
            }
        }
        Self { entries }
    }

    /// Users with their messages, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[UserMessage])> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.messages.as_slice()))
    }

    pub fn user_count(&self) -> usize {
        self.entries.len()
    }

    pub fn message_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
