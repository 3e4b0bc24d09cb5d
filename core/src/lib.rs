//! Domain core for the todo service.
//!
//! # Overview
//! Holds the `Todo` record, the create payload and the in-memory
//! `TodoStore` that the HTTP server delegates to.
//!
//! # Design
//! - No I/O and no async: the store is a plain value, and callers decide how
//!   to share it (the server wraps it in `Arc<RwLock<_>>`).
//! - `TodoError::NotFound` is the only failure; the server maps it to 404.
//! - Ids are integers assigned from a monotonically increasing counter and
//!   never reused after deletion.

pub mod error;
pub mod model;
pub mod store;

pub use error::TodoError;
pub use model::{NewTodo, Todo, TodoId};
pub use store::TodoStore;
