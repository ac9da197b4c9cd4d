//! Observable view state for the to-do list
//!
//! A plain state container with pure reducer-style transitions. The
//! owning view holds it directly and re-renders after each `apply`;
//! there is no ambient singleton. The rendering path replaces the whole
//! list from a fresh fetch after every mutation, so `Prepend`, `Patch`
//! and `Remove` exist as contract operations for views that patch
//! locally between fetches.

use crate::database::Todo;

/// Fields a view can patch on one mirrored record
#[derive(Debug, Default, Clone)]
pub struct TodoFields {
    pub title: Option<String>,
    /// Outer level is slot presence; inner `None` clears the description
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// State transitions supported by the container
#[derive(Debug)]
pub enum TodoListAction {
    /// Replace the entire list with a freshly fetched one
    ReplaceAll(Vec<Todo>),
    /// Prepend a newly created record
    Prepend(Todo),
    /// Patch one record's fields by id; unknown ids are ignored
    Patch { id: String, fields: TodoFields },
    /// Remove one record by id
    Remove(String),
    /// Toggle the busy flag for the create flow
    SetLoading(bool),
    /// Set or clear the error slot
    SetError(Option<String>),
}

/// Mirrored server state the view renders from
#[derive(Debug, Default)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition
    pub fn apply(&mut self, action: TodoListAction) {
        match action {
            TodoListAction::ReplaceAll(todos) => self.todos = todos,
            TodoListAction::Prepend(todo) => self.todos.insert(0, todo),
            TodoListAction::Patch { id, fields } => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    if let Some(title) = fields.title {
                        todo.title = title;
                    }
                    if let Some(description) = fields.description {
                        todo.description = description;
                    }
                    if let Some(completed) = fields.completed {
                        todo.completed = completed;
                    }
                }
            }
            TodoListAction::Remove(id) => self.todos.retain(|t| t.id != id),
            TodoListAction::SetLoading(loading) => self.loading = loading,
            TodoListAction::SetError(error) => self.error = error,
        }
    }

    /// Counts the footer renders: (total, pending, completed)
    pub fn counts(&self) -> (usize, usize, usize) {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        (self.todos.len(), self.todos.len() - completed, completed)
    }
}
