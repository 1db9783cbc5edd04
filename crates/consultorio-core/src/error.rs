//! Error types shared across the core.

use thiserror::Error;

/// Errors raised by store operations, validation and report generation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("already exists: {0}")]
    Duplicate(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("slots already generated for {month:02}/{year}")]
    AlreadyGenerated { month: u32, year: i32 },

    #[error("patient {0} has assigned slots")]
    HasDependents(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
