//! Integration tests for tidytask
//!
//! These tests bind a real listener and drive the API end to end
//! through the typed client, the same round trips the single-page UI
//! makes. Status-code assertions go through raw reqwest calls.

use tempfile::TempDir;
use tidytask::app::AppState;
use tidytask::client::{
    ApiClient, ApiError, CreateTodo, TodoListAction, TodoListState, UpdateTodo,
};
use tidytask::database::{create_pool, Repository, Todo};
use tidytask::http;
use tidytask::services::TodosService;
use tokio::net::TcpListener;

/// Helper to start a server on an ephemeral port backed by a fresh
/// database file
async fn spawn_server() -> (ApiClient, String, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let pool = create_pool(&db_path).await.unwrap();
    let state = AppState::new(TodosService::new(Repository::new(pool)));
    let router = http::router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let base_url = format!("http://{}", addr);
    (ApiClient::new(&base_url), base_url, temp_dir)
}

fn create(title: &str, description: Option<&str>) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn test_todo_crud_round_trip() {
    let (client, _url, _temp) = spawn_server().await;

    // Create
    let todo = client
        .create_todo(&create("Buy milk", Some("Semi-skimmed")))
        .await
        .unwrap();

    assert!(!todo.id.is_empty());
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description.as_deref(), Some("Semi-skimmed"));
    assert!(!todo.completed);

    // Read
    let fetched = client.get_todo(&todo.id).await.unwrap();
    assert_eq!(fetched, todo);

    // Update
    let updated = client
        .update_todo(
            &todo.id,
            &UpdateTodo {
                title: Some("Buy oat milk".to_string()),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Buy oat milk");

    // List
    let todos = client.list_todos().await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "Buy oat milk");

    // Delete
    client.delete_todo(&todo.id).await.unwrap();

    let result = client.get_todo(&todo.id).await;
    assert!(matches!(result, Err(ApiError::NotFound)));

    let todos = client.list_todos().await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_create_with_blank_title_is_rejected() {
    let (client, _url, _temp) = spawn_server().await;

    for title in ["", "   "] {
        let result = client.create_todo(&create(title, None)).await;
        assert!(matches!(result, Err(ApiError::Rejected(_))));
    }

    // Collection count unchanged
    let todos = client.list_todos().await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_create_defaults() {
    let (client, _url, _temp) = spawn_server().await;

    let todo = client.create_todo(&create("Buy milk", None)).await.unwrap();

    assert!(todo.description.is_none());
    assert!(!todo.completed);
}

#[tokio::test]
async fn test_blank_description_is_stored_as_absent() {
    let (client, _url, _temp) = spawn_server().await;

    let todo = client
        .create_todo(&create("Todo", Some("   ")))
        .await
        .unwrap();
    assert!(todo.description.is_none());

    // Clearing an existing description with an empty string
    let with_desc = client
        .create_todo(&create("Other", Some("detail")))
        .await
        .unwrap();

    let cleared = client
        .update_todo(
            &with_desc.id,
            &UpdateTodo {
                description: Some("".to_string()),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    assert!(cleared.description.is_none());
}

#[tokio::test]
async fn test_list_orders_most_recent_first_with_unique_ids() {
    let (client, _url, _temp) = spawn_server().await;

    let a = client.create_todo(&create("A", None)).await.unwrap();
    let b = client.create_todo(&create("B", None)).await.unwrap();

    let todos = client.list_todos().await.unwrap();
    let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, [b.id.as_str(), a.id.as_str()]);

    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_partial_updates_are_field_independent() {
    let (client, _url, _temp) = spawn_server().await;

    let todo = client
        .create_todo(&create("Title", Some("detail")))
        .await
        .unwrap();

    // completed only
    let updated = client
        .update_todo(
            &todo.id,
            &UpdateTodo {
                completed: Some(true),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.title, "Title");
    assert_eq!(updated.description.as_deref(), Some("detail"));

    // title only
    let updated = client
        .update_todo(
            &todo.id,
            &UpdateTodo {
                title: Some("Renamed".to_string()),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert!(updated.completed);
}

#[tokio::test]
async fn test_update_with_blank_title_is_rejected() {
    let (client, _url, _temp) = spawn_server().await;

    let todo = client.create_todo(&create("Keep", None)).await.unwrap();

    let result = client
        .update_todo(
            &todo.id,
            &UpdateTodo {
                title: Some("   ".to_string()),
                ..UpdateTodo::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::Rejected(_))));

    let fetched = client.get_todo(&todo.id).await.unwrap();
    assert_eq!(fetched.title, "Keep");
}

#[tokio::test]
async fn test_missing_id_surfaces_not_found_consistently() {
    let (client, _url, _temp) = spawn_server().await;

    let result = client.get_todo("no-such-id").await;
    assert!(matches!(result, Err(ApiError::NotFound)));

    let result = client
        .update_todo(
            "no-such-id",
            &UpdateTodo {
                completed: Some(true),
                ..UpdateTodo::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::NotFound)));

    // Deleting a non-existent id twice answers the same way both times
    let first = client.delete_todo("no-such-id").await;
    let second = client.delete_todo("no-such-id").await;
    assert!(matches!(first, Err(ApiError::NotFound)));
    assert!(matches!(second, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn test_status_codes_on_the_wire() {
    let (_client, url, _temp) = spawn_server().await;
    let http = reqwest::Client::new();

    // 201 on create
    let response = http
        .post(format!("{}/todos", url))
        .json(&serde_json::json!({ "title": "Wire check" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let created: Todo = response.json().await.unwrap();

    // 400 with an error body on blank title
    let response = http
        .post(format!("{}/todos", url))
        .json(&serde_json::json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    // 404 on a missing id
    let response = http
        .get(format!("{}/todos/no-such-id", url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // 200 with a confirmation message on delete
    let response = http
        .delete(format!("{}/todos/{}", url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Todo deleted");

    // Liveness probe
    let response = http.get(format!("{}/health", url)).send().await.unwrap();
    assert_eq!(response.status(), 200);

    // The single-page UI is served at the root
    let response = http.get(format!("{}/", url)).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("<html"));
}

#[tokio::test]
async fn test_view_state_mirrors_server_round_trips() {
    let (client, _url, _temp) = spawn_server().await;
    let mut view = TodoListState::new();

    // Initial fetch into the container
    view.apply(TodoListAction::ReplaceAll(client.list_todos().await.unwrap()));
    assert_eq!(view.counts(), (0, 0, 0));

    // Create flow: loading on, request, refetch, loading off
    view.apply(TodoListAction::SetLoading(true));
    client.create_todo(&create("Walk dog", None)).await.unwrap();
    view.apply(TodoListAction::ReplaceAll(client.list_todos().await.unwrap()));
    view.apply(TodoListAction::SetLoading(false));
    assert_eq!(view.counts(), (1, 1, 0));
    assert!(!view.loading);

    // Toggle complete, then refetch
    let id = view.todos[0].id.clone();
    client
        .update_todo(
            &id,
            &UpdateTodo {
                completed: Some(true),
                ..UpdateTodo::default()
            },
        )
        .await
        .unwrap();
    view.apply(TodoListAction::ReplaceAll(client.list_todos().await.unwrap()));
    assert_eq!(view.counts(), (1, 0, 1));

    // A failed call lands in the error slot instead of being swallowed
    match client.get_todo("no-such-id").await {
        Ok(_) => panic!("expected a not-found error"),
        Err(err) => view.apply(TodoListAction::SetError(Some(err.to_string()))),
    }
    assert!(view.error.is_some());

    // Delete, then refetch; the mirror follows the server
    client.delete_todo(&id).await.unwrap();
    view.apply(TodoListAction::ReplaceAll(client.list_todos().await.unwrap()));
    view.apply(TodoListAction::SetError(None));
    assert_eq!(view.counts(), (0, 0, 0));
    assert!(view.error.is_none());
}
