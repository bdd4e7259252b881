use thiserror::Error;
use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(reason) => ProductError::ValidationError(reason),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
