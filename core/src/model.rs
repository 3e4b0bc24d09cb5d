//! Todo records as stored and as submitted by clients.
//!
//! # Design
//! `Todo` is the stored shape and always carries a server-assigned `id`.
//! `NewTodo` is the create payload; it has no `id` field, so an id sent by a
//! client is dropped during deserialization and the store assigns its own.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Display-ordering hint supplied by the client. Stored as given.
    pub order: i64,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: i64,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, completed: bool, order: i64) -> Self {
        Self {
            title: title.into(),
            completed,
            order,
        }
    }

    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            order: self.order,
        }
    }
}
