//! Error types for the store and the API client.
//!
//! # Design
//! The store has exactly one failure mode: an id that does not resolve.
//! `ApiError` keeps `NotFound` as its own variant because callers distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status". All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging.

use thiserror::Error;

/// Errors raised by `TodoStore` lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}

impl StoreError {
    pub fn todo_not_found(id: i64) -> Self {
        StoreError::NotFound { resource: "todo", id }
    }

    pub fn task_not_found(id: i64) -> Self {
        StoreError::NotFound { resource: "task", id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
