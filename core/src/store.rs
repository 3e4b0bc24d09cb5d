//! In-memory, insertion-ordered todo collection.
//!
//! # Design
//! Records live in a `Vec` so listing returns them in the order they were
//! created. Lookups are linear scans; the store is meant for a single process
//! holding a small list.
//!
//! Ids come from a high-water mark rather than from the current contents: the
//! next id is one past the largest id ever held, so deleting the newest todo
//! never frees its id for reuse. Once `TodoId::MAX` has been handed out the
//! mark is `None` and further creates fail instead of wrapping.

use std::collections::HashSet;

use crate::error::TodoError;
use crate::model::{NewTodo, Todo, TodoId};

/// Ordered collection of todos with auto-incrementing ids.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: Option<TodoId>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Empty store. The first created todo gets id 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Store pre-populated with existing records, kept in the given order.
    ///
    /// The next assigned id is one past the largest seeded id. Fails with
    /// `DuplicateId` if two records share an id.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Result<Self, TodoError> {
        let todos: Vec<Todo> = todos.into_iter().collect();
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if !seen.insert(todo.id) {
                return Err(TodoError::DuplicateId(todo.id));
            }
        }
        let next_id = match todos.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Ok(Self { todos, next_id })
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// All todos in insertion order.
    pub fn list_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get_by_id(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    /// Append a new todo under the next id and return the stored record.
    pub fn create(&mut self, input: NewTodo) -> Result<Todo, TodoError> {
        let id = self.next_id.ok_or(TodoError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        let todo = input.into_todo(id);
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Remove the todo whose id is `id` and return it.
    ///
    /// A miss leaves the store untouched.
    pub fn delete_by_id(&mut self, id: TodoId) -> Result<Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }
}
