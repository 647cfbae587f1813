use thiserror::Error;

/// Failure modes of a single page request against the message source.
///
/// Every variant is recovered inside this crate: the pagination loop retries
/// or aborts with partial data, and the cache degrades to a stale snapshot.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream returned status {0}")]
    Upstream(u16),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl SourceError {
    /// Statuses that retrying cannot heal; the fetch stops and keeps what it has.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SourceError::Upstream(400 | 401 | 404))
    }
}
