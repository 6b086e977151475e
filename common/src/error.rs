//! Error types returned by lesson functions.
//!
//! Every variant carries enough context to tell the caller *what* went wrong
//! without having to read the implementation that raised it.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LessonError>;

#[derive(Error, Debug)]
pub enum LessonError {
    /// A caller passed a value outside the accepted domain.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Fail-fast validation of an order's contents.
    #[error("{0}")]
    OrderValidation(String),

    #[error("Account {0} not found")]
    AccountNotFound(u64),

    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    /// A transactional order run failed and was rolled back.
    #[error("Order processing failed: {0}")]
    OrderProcessingFailed(#[source] Box<LessonError>),

    #[error("Unable to process file '{}': {source}", path.display())]
    FileProcessing {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to process file '{}' after {attempts} attempts: {source}", path.display())]
    RetriesExhausted {
        path: PathBuf,
        attempts: u32,
        source: std::io::Error,
    },
}

impl LessonError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
