// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Raised while building [`SluggableOptions`](crate::domain::slug::SluggableOptions).
/// These are the only failures the slug policy itself can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("missing keyword: {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
}
