use thiserror::Error;

/// Errors produced by timestamp handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("invalid ISO-8601 UTC timestamp '{input}': {reason}")]
    Parse { input: String, reason: String },
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
