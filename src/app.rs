//! Application state and initialization
//!
//! All services are initialized here and made available to handlers
//! through `AppState`.

use crate::config::Config;
use crate::database::{create_pool, Repository};
use crate::error::Result;
use crate::services::TodosService;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub todos: TodosService,
}

impl AppState {
    pub fn new(todos: TodosService) -> Self {
        Self { todos }
    }
}

/// Application setup - called once on startup
pub async fn setup(config: &Config) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("Data directory: {:?}", config.data_dir);

    std::fs::create_dir_all(&config.data_dir)?;

    let pool = create_pool(&config.database_path()).await?;
    let repo = Repository::new(pool);
    let state = AppState::new(TodosService::new(repo));

    tracing::info!("Application initialized successfully");

    Ok(state)
}
