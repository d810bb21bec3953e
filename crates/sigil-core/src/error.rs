//! Error types for sigil operations
//!
//! Validation errors on direct calls surface to the caller; render and
//! inbound-sync failures are isolated at the point they occur and never
//! reach this taxonomy.

use thiserror::Error;

/// Errors surfaced by sigil operations
#[derive(Error, Debug)]
pub enum SigilError {
    // Construction errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Registry errors
    #[error("Unknown state: {0}")]
    UnknownState(String),

    // Publish-path errors
    #[error("Channel error: {0}")]
    Channel(String),
}

/// Result type for sigil operations
pub type SigilResult<T> = Result<T, SigilError>;
