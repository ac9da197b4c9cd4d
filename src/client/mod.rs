//! Client-side building blocks
//!
//! A typed HTTP client for the to-do API and the observable state
//! container a view renders from. The container only mirrors server
//! state; the canonical copy always lives behind the API.

pub mod api;
pub mod store;

pub use api::{ApiClient, ApiError, CreateTodo, UpdateTodo};
pub use store::{TodoFields, TodoListAction, TodoListState};
