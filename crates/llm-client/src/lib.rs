//! # Collaborator abstraction
//!
//! Defines the [`Collaborator`] trait, an HTTP implementation for an
//! Anthropic-style messages endpoint, and a null implementation for running
//! without an API key. Every [`CollaboratorError`] variant is recoverable;
//! callers fall back to their own answer path on any of them.

use std::sync::Arc;

use async_trait::async_trait;

mod error;
mod http_collaborator;
mod null;


pub use error::CollaboratorError;
pub use http_collaborator::{HttpCollaborator, DEFAULT_API_URL, DEFAULT_MODEL};
pub use null::NullCollaborator;

/// A remote model that can be asked to complete a prompt.
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Returns the model's reply text for the given prompt.
    async fn complete(&self, prompt: &str) -> Result<String, CollaboratorError>;
}

#[async_trait]
impl<C: Collaborator + ?Sized> Collaborator for Arc<C> {
    async fn complete(&self, prompt: &str) -> Result<String, CollaboratorError> {
        (**self).complete(prompt).await
    }
}
