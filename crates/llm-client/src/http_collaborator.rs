//! HTTP [`Collaborator`] against an Anthropic-style messages endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Collaborator, CollaboratorError};

/// Endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const MAX_TOKENS: u32 = 1000;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [PromptMessage<'a>; 1],
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesReply {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// Bearer-authenticated client for one model behind a messages endpoint.
#[derive(Clone)]
pub struct HttpCollaborator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl HttpCollaborator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Collaborator for HttpCollaborator {
    #[instrument(skip(self, prompt))]
    async fn complete(&self, prompt: &str) -> Result<String, CollaboratorError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: [PromptMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CollaboratorError::Timeout
                } else {
                    CollaboratorError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollaboratorError::Upstream(status.as_u16()));
        }

        let reply: MessagesReply = response
            .json()
            .await
            .map_err(|_| CollaboratorError::MalformedResponse)?;

        let text = reply
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(CollaboratorError::MalformedResponse)?;
        let text = text.trim().to_string();

        debug!(model = %self.model, chars = text.len(), "Collaborator replied");
        Ok(text)
    }
}
