use repository::error::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Failed to serialize items: {0}")]
    Serialization(#[from] serde_json::Error),
}
