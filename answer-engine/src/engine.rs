//! Collaborator-first answering with deterministic fallback.

use llm_client::Collaborator;
use tracing::debug;

use mqa_core::NO_DATA;

use crate::extractor::RuleBasedExtractor;
use crate::index::UserIndex;

/// Users quoted in the prompt context.
const PROMPT_MAX_USERS: usize = 20;
/// Messages quoted per user.
const PROMPT_MAX_MESSAGES_PER_USER: usize = 5;

/// Answers questions by asking the collaborator first and falling back to
/// the rule-based extractor on any collaborator failure.
pub struct AnswerEngine<C: Collaborator> {
    collaborator: C,
    extractor: RuleBasedExtractor,
}

impl<C: Collaborator> AnswerEngine<C> {
    pub fn new(collaborator: C) -> Self {
        Self {
            collaborator,
            extractor: RuleBasedExtractor,
        }
    }

    /// Answers the question from the indexed corpus. Never fails: an empty
    /// index yields [`NO_DATA`] and collaborator errors degrade to the
    /// extractor.
    pub async fn answer(&self, index: &UserIndex, question: &str) -> String {
        if index.is_empty() {
            return NO_DATA.to_string();
        }

        let prompt = build_prompt(index, question);
        match self.collaborator.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "Collaborator unavailable; using rule-based answer");
                self.extractor.answer(index, question)
            }
        }
    }
}

fn build_prompt(index: &UserIndex, question: &str) -> String {
    let mut context = String::from("# Member Messages\n\n");
    for (user, messages) in index.iter().take(PROMPT_MAX_USERS) {
        context.push_str(&format!("## {user}\n"));
        for msg in messages.iter().take(PROMPT_MAX_MESSAGES_PER_USER) {
            context.push_str(&format!("- [{}] {}\n", msg.timestamp, msg.message));
        }
        context.push('\n');
    }

    format!(
        r#"{context}

Based on the member messages above, answer this question accurately and concisely:

{question}

Rules:
- Answer based ONLY on the information in the messages above
- If you cannot find the answer, say "I don't have enough information to answer that"
- Be specific and cite relevant details
- Keep the answer concise

Answer:"#
    )
}
