//! Repository layer for database operations
//!
//! This module provides CRUD operations for to-do records. Each
//! operation is a single statement and therefore atomic at the store
//! level; no multi-record transactions are used.

use super::models::{Todo, TodoPatch};
use crate::error::{AppError, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new todo. Inputs are already normalized by the service
    /// layer; the id and creation timestamp are assigned here.
    pub async fn create_todo(&self, title: String, description: Option<String>) -> Result<Todo> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, title, description, completed, created_at)
            VALUES (?, ?, ?, 0, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&title)
        .bind(&description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created todo: {}", id);
        Ok(todo)
    }

    /// Get a todo by ID
    pub async fn get_todo(&self, id: &str) -> Result<Todo> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT * FROM todos WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::TodoNotFound(id.to_string()))?;

        Ok(todo)
    }

    /// List all todos, most recently created first
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT * FROM todos
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    /// Apply a partial update. Only the slots present in the patch are
    /// written; an empty patch degenerates to an existence check.
    pub async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        if patch.is_empty() {
            return self.get_todo(id).await;
        }

        let mut sets = Vec::new();
        if patch.title.is_some() {
            sets.push("title = ?");
        }
        if patch.description.is_some() {
            sets.push("description = ?");
        }
        if patch.completed.is_some() {
            sets.push("completed = ?");
        }

        let sql = format!("UPDATE todos SET {} WHERE id = ?", sets.join(", "));

        let mut query = sqlx::query(&sql);
        if let Some(title) = &patch.title {
            query = query.bind(title);
        }
        if let Some(description) = &patch.description {
            query = query.bind(description.as_deref());
        }
        if let Some(completed) = patch.completed {
            query = query.bind(completed);
        }

        let rows_affected = query.bind(id).execute(&self.pool).await?.rows_affected();

        if rows_affected == 0 {
            return Err(AppError::TodoNotFound(id.to_string()));
        }

        tracing::debug!("Updated todo: {}", id);

        // Fetch updated todo
        self.get_todo(id).await
    }

    /// Delete a todo
    pub async fn delete_todo(&self, id: &str) -> Result<()> {
        let rows_affected = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::TodoNotFound(id.to_string()));
        }

        tracing::debug!("Deleted todo: {}", id);
        Ok(())
    }
}
