use thiserror::Error;

use crate::models::booking::RejectionReason;

#[derive(Error, Debug)]
pub enum TeeTimeError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking rejected: {0}")]
    Rejected(#[from] RejectionReason),

    #[error("Configuration error: {0}")]
    Configuration(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type TeeTimeResult<T> = Result<T, TeeTimeError>;
