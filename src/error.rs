//! Error types for the app-state boundary.
//!
//! The reducer itself is total; only decoding persisted slices and
//! delivering subscription events can fail.

use thiserror::Error;

/// Main error type for app-state operations.
#[derive(Debug, Error)]
pub enum AppStateError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unknown keys in persisted app slice: {}", .0.join(", "))]
    UnknownKeys(Vec<String>),

    #[error("Invalid persisted payload: {0}")]
    InvalidPayload(String),

    #[error("Subscription dropped")]
    SubscriptionDropped,
}

impl From<serde_json::Error> for AppStateError {
    fn from(e: serde_json::Error) -> Self {
        AppStateError::Deserialization(e.to_string())
    }
}

impl From<rmp_serde::encode::Error> for AppStateError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        AppStateError::Serialization(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for AppStateError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        AppStateError::Deserialization(e.to_string())
    }
}

/// Result type for app-state operations.
pub type Result<T> = std::result::Result<T, AppStateError>;
