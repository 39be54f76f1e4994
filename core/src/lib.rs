//! Todo store and API client core.
//!
//! # Overview
//! `TodoStore` owns todos and their tasks in memory: it assigns ids, keeps
//! insertion order for paging, and cascades deletes from a todo to its tasks.
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! for the HTTP service that fronts the store, without touching the network.
//!
//! # Design
//! - The store is single-owner: mutators take `&mut self` and there is no
//!   internal locking. The server wraps it in one lock.
//! - The client is stateless and holds only `base_url`.
//! - Both share the types in `types`, so the wire format has one definition.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::TodoClient;
pub use error::{ApiError, StoreError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TodoStore;
pub use types::{NewTask, NewTodo, Page, Task, Todo};
