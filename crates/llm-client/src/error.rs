use thiserror::Error;

/// Failure of a collaborator call.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// No collaborator is configured.
    #[error("collaborator disabled")]
    Disabled,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    /// Non-2xx reply from the endpoint.
    #[error("upstream returned status {0}")]
    Upstream(u16),

    /// Reply body did not carry the expected `content[0].text`.
    #[error("malformed response body")]
    MalformedResponse,
}
