// File: src/error.rs
// Purpose: Error types for the few fallible edges (helper names, route tables)

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagsError {
    #[error("Unknown helper: {0}")]
    UnknownHelper(String),

    #[error("Route name already registered: {0}")]
    DuplicateRoute(String),
}

pub type Result<T> = std::result::Result<T, TagsError>;
