//! Application configuration
//!
//! Runtime settings come from environment variables with sensible
//! defaults. Defaults and resource limits live here as constants.

use crate::error::{AppError, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Listen address used when `TIDYTASK_ADDR` is unset
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Data directory used when `TIDYTASK_DATA_DIR` is unset
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Database file name inside the data directory
pub const DATABASE_FILE: &str = "tidytask.db";

/// Maximum connections in the application pool
pub const DB_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration resolved at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from the environment
    pub fn from_env() -> Result<Self> {
        let addr = env::var("TIDYTASK_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Generic(format!("Invalid TIDYTASK_ADDR: {}", e)))?;

        let data_dir = env::var("TIDYTASK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self { addr, data_dir })
    }

    /// Full path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}
