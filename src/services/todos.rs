//! Todos service
//!
//! Business rules for the to-do lifecycle. Title and description
//! normalization happens here; storage belongs to the repository.
//!
//! Title validation is uniform across create and update: a title that
//! trims to empty is rejected on both paths. A description that trims
//! to empty is stored as absent, never as an empty string.

use crate::database::{CreateTodoRequest, Repository, Todo, TodoPatch, UpdateTodoRequest};
use crate::error::{AppError, Result};

/// Service for managing todos
#[derive(Clone)]
pub struct TodosService {
    repo: Repository,
}

impl TodosService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Create a new todo
    pub async fn create_todo(&self, req: CreateTodoRequest) -> Result<Todo> {
        let title = req.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }

        let description = req.description.and_then(normalize_description);

        tracing::info!("Creating todo: {}", title);

        let todo = self.repo.create_todo(title, description).await?;

        tracing::info!("Todo created successfully: {}", todo.id);

        Ok(todo)
    }

    /// Get a todo by ID
    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        self.repo.get_todo(id).await
    }

    /// List all todos
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.repo.list_todos().await
    }

    /// Apply a partial update to a todo
    pub async fn update_todo(&self, id: &str, req: UpdateTodoRequest) -> Result<Todo> {
        let title = match req.title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(AppError::Validation("Title is required".to_string()));
                }
                Some(title)
            }
            None => None,
        };

        let patch = TodoPatch {
            title,
            description: req.description.map(normalize_description),
            completed: req.completed,
        };

        tracing::debug!("Updating todo: {}", id);

        let todo = self.repo.update_todo(id, patch).await?;

        tracing::debug!("Todo updated successfully: {}", todo.id);

        Ok(todo)
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting todo: {}", id);

        self.repo.delete_todo(id).await?;

        tracing::info!("Todo deleted successfully: {}", id);

        Ok(())
    }
}

/// Trim a description, mapping blank input to absent
fn normalize_description(description: String) -> Option<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
