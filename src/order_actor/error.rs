use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid product: {0}")]
    InvalidProduct(String),
    #[error("Invalid order status: {0}")]
    InvalidStatus(String),
    #[error("Order {id} is already {status}")]
    FinalStatus { id: u64, status: String },
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
