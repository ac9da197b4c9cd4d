//! Typed HTTP client for the to-do API
//!
//! Each call returns an explicit `Result` so failures reach the view's
//! error slot instead of being swallowed. Non-success responses are
//! decoded into typed errors keyed by status class.

use crate::database::Todo;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Rejected(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Body of error responses returned by the API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fields sent when creating a todo
#[derive(Debug, Serialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update sent to the item endpoint; absent fields leave the
/// record untouched
#[derive(Debug, Default, Serialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Client for one tidytask server
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the full list, most recently created first
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self
            .http
            .get(format!("{}/todos", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    /// Create a todo and return the stored record
    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let response = self
            .http
            .post(format!("{}/todos", self.base_url))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch one todo by id
    pub async fn get_todo(&self, id: &str) -> Result<Todo, ApiError> {
        let response = self
            .http
            .get(format!("{}/todos/{}", self.base_url, id))
            .send()
            .await?;
        decode(response).await
    }

    /// Apply a partial update and return the stored record
    pub async fn update_todo(&self, id: &str, input: &UpdateTodo) -> Result<Todo, ApiError> {
        let response = self
            .http
            .patch(format!("{}/todos/{}", self.base_url, id))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete one todo by id
    pub async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/todos/{}", self.base_url, id))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = check(response).await?;
    Ok(response.json().await?)
}

/// Map non-success status codes to the appropriate `ApiError` variant
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string());

    match status {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if status.is_client_error() => Err(ApiError::Rejected(message)),
        _ => Err(ApiError::Server(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_update_todo_skips_absent_fields() {
        let input = UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["completed"], true);
        assert!(json.get("title").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_create_todo_skips_absent_description() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            description: None,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert!(json.get("description").is_none());
    }
}
