//! Error type for store operations.
//!
//! Lookup misses, id exhaustion and bad seeds. Transport-level
//! concerns (malformed JSON, bad path parameters) belong to the HTTP layer.

use thiserror::Error;

use crate::model::TodoId;

/// Errors returned by `TodoStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// No todo with this id exists.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The largest representable id has already been handed out.
    #[error("todo ids exhausted")]
    IdsExhausted,

    /// A seed contained the same id more than once.
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),
}
