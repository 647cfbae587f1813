//! Corpus crate: resilient retrieval and caching of the member-message corpus.
//!
//! ## Modules
//!
//! - [`error`] – Source error types
//! - [`source`] – MessageSource trait + paginated HTTP client
//! - [`cache`] – Time-bounded single-slot snapshot cache

mod cache;
mod error;
mod source;

#[cfg(test)]
mod source_test;

pub use cache::{MessageCache, CACHE_TTL};
pub use error::SourceError;
pub use source::{HttpMessageSource, MessageSource, MAX_RECORDS, PAGE_SIZE};
