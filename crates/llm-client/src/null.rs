use async_trait::async_trait;

use crate::{Collaborator, CollaboratorError};

/// Stand-in collaborator for deployments without an API key.
///
/// Always fails with [`CollaboratorError::Disabled`], so callers keep a single
/// fallback path instead of threading an `Option` through the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCollaborator;

#[async_trait]
impl Collaborator for NullCollaborator {
    async fn complete(&self, _prompt: &str) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::Disabled)
    }
}
