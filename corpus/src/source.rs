//! Message source client: paginated fetch with page-level retry and abort policy.
//!
//! Wraps the remote messages API (`GET <url>?skip=N&limit=M`) and hands callers
//! a flat record list. Degrades to partial results instead of failing; callers
//! never see a [`SourceError`](crate::SourceError).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use mqa_core::MessageRecord;

use crate::error::SourceError;

/// Records requested per page.
pub const PAGE_SIZE: usize = 100;

/// Hard ceiling on records gathered in one full fetch, bounding worst-case
/// work against a source that claims an absurd total.
pub const MAX_RECORDS: usize = 1000;

/// Consecutive page failures after which the fetch gives up.
const MAX_CONSECUTIVE_ERRORS: u32 = 3;

/// Per-page request deadline.
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Reachability probe deadline.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// One page as returned by the source API.
#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    items: Vec<MessageRecord>,
    #[serde(default)]
    total: usize,
}

/// Supplier of the message corpus plus a cheap reachability probe.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Fetches every available record. Total: transient failures degrade to a
    /// partial (possibly empty) collection.
    async fn fetch_all(&self) -> Vec<MessageRecord>;

    /// Whether the source currently answers at all.
    async fn probe(&self) -> bool;
}

#[async_trait]
impl<S: MessageSource + ?Sized> MessageSource for Arc<S> {
    async fn fetch_all(&self) -> Vec<MessageRecord> {
        (**self).fetch_all().await
    }

    async fn probe(&self) -> bool {
        (**self).probe().await
    }
}

/// HTTP implementation of [`MessageSource`] for the paginated messages API.
#[derive(Clone)]
pub struct HttpMessageSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMessageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Requests a single page; the caller drives pagination and retry.
    async fn fetch_page(&self, skip: usize, limit: usize) -> Result<PageBody, SourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("skip", skip), ("limit", limit)])
            .timeout(PAGE_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout
                } else {
                    SourceError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Upstream(status.as_u16()));
        }

        response
            .json::<PageBody>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MessageSource for HttpMessageSource {
    async fn fetch_all(&self) -> Vec<MessageRecord> {
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut skip = 0usize;
        let mut consecutive_errors = 0u32;

        while skip < MAX_RECORDS {
            match self.fetch_page(skip, PAGE_SIZE).await {
                Ok(page) => {
                    consecutive_errors = 0;
                    let count = page.items.len();
                    debug!(skip, count, total = page.total, "Fetched source page");

                    if count == 0 {
                        break;
                    }
                    records.extend(page.items);

                    if page.total > 0 && records.len() >= page.total {
                        break;
                    }
                    if count < PAGE_SIZE {
                        break;
                    }
                    skip += PAGE_SIZE;
                }
                Err(err) if err.is_terminal() => {
                    warn!(skip, error = %err, "Source refused the request; keeping partial data");
                    break;
                }
                Err(err) => {
                    consecutive_errors += 1;
                    warn!(skip, consecutive_errors, error = %err, "Source page failed");
                    if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        warn!(
                            gathered = records.len(),
                            "Aborting fetch after repeated failures; keeping partial data"
                        );
                        break;
                    }
                    // Step past the broken page instead of retrying it forever.
                    skip += PAGE_SIZE;
                }
            }
        }

        info!(count = records.len(), "Source fetch complete");
        records
    }

    async fn probe(&self) -> bool {
        let result = self
            .client
            .get(&self.base_url)
            .query(&[("skip", 0usize), ("limit", 1usize)])
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;

        match result {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
