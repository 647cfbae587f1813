//! Time-bounded snapshot cache over a [`MessageSource`].
//!
//! One slot, one TTL: the whole corpus is cached as a single snapshot and
//! replaced wholesale after expiry. A refresh that comes back empty never
//! overwrites a usable snapshot (stale data beats no data).

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use mqa_core::MessageRecord;

use crate::source::MessageSource;

/// Validity window of a cached snapshot.
pub const CACHE_TTL: Duration = Duration::from_secs(300);

struct Snapshot {
    records: Arc<Vec<MessageRecord>>,
    fetched_at: Instant,
}

impl Snapshot {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

/// Process-wide message cache.
///
/// Readers of a fresh snapshot share a read lock and never block each other.
/// Expired or cold callers serialize behind the write lock and re-check
/// freshness after acquiring it, so concurrent misses coalesce into a single
/// upstream fetch; the stragglers wake up to the snapshot it produced.
pub struct MessageCache<S: MessageSource> {
    source: S,
    ttl: Duration,
    state: RwLock<Option<Snapshot>>,
}

impl<S: MessageSource> MessageCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, CACHE_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            state: RwLock::new(None),
        }
    }

    /// The wrapped source; the health probe goes around the cache.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached corpus, fetching from the source when the snapshot
    /// is missing or older than the TTL. Never fails: a refresh that yields
    /// nothing degrades to the previous snapshot, or to an empty collection
    /// when there has never been one.
    pub async fn get_messages(&self) -> Arc<Vec<MessageRecord>> {
        {
            let state = self.state.read().await;
            if let Some(snapshot) = state.as_ref() {
                if snapshot.is_fresh(self.ttl) {
                    debug!(count = snapshot.records.len(), "Cache hit");
                    return Arc::clone(&snapshot.records);
                }
            }
        }

        let mut state = self.state.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(snapshot) = state.as_ref() {
            if snapshot.is_fresh(self.ttl) {
                debug!(count = snapshot.records.len(), "Cache refreshed by concurrent request");
                return Arc::clone(&snapshot.records);
            }
        }

        let fetched = self.source.fetch_all().await;
        if fetched.is_empty() {
            return match state.as_ref() {
                Some(snapshot) => {
                    warn!(
                        count = snapshot.records.len(),
                        "Refresh returned nothing; serving stale snapshot"
                    );
                    Arc::clone(&snapshot.records)
                }
                // No snapshot to fall back on. Emptiness is not cached, so the
                // next call retries the source.
                None => Arc::new(Vec::new()),
            };
        }

        let records = Arc::new(fetched);
        *state = Some(Snapshot {
            records: Arc::clone(&records),
            fetched_at: Instant::now(),
        });
        info!(count = records.len(), "Cache refreshed");
        records
    }

    /// Number of records in the current snapshot; 0 when none exists.
    pub async fn size(&self) -> usize {
        self.state
            .read()
            .await
            .as_ref()
            .map_or(0, |snapshot| snapshot.records.len())
    }
}
