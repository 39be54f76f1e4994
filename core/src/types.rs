//! Domain types for todos and their tasks.
//!
//! # Design
//! The same types are used by the store, the HTTP adapter and the client, so
//! the JSON the server writes is exactly what the client parses. Identity is
//! never accepted from callers: `NewTodo` and `NewTask` carry only the
//! caller-provided fields, and the store turns them into `Todo` / `Task`.

use serde::{Deserialize, Serialize};

/// A top-level todo item owning an ordered list of tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub author: String,
    pub details: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A sub-item of a todo.
///
/// `todo_id` points back at the owning todo. It is a plain id rather than a
/// reference and is kept off the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    #[serde(skip)]
    pub todo_id: i64,
    #[serde(default)]
    pub completed: bool,
    pub details: String,
}

/// Request payload for creating a todo.
///
/// Both fields default to empty so a body that omits them still parses and
/// can be rejected by validation with a 400 rather than a decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub details: String,
}

impl NewTodo {
    pub fn new(author: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            details: details.into(),
        }
    }
}

/// Request payload for appending a task to a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub details: String,
}

impl NewTask {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            completed: false,
            details: details.into(),
        }
    }
}

/// One page of an insertion-ordered listing.
///
/// `number` is the zero-based page index that was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}
