use std::str::FromStr;

use log::warn;

use crate::error::{CollegeHubError, Result};

pub fn init() {
    dotenv::dotenv().ok();
}

/**
 * Get an environment variable or a default value
 *
 * # Arguments
 * @param key: &str - The environment variable key
 * @param default: &str - The default value
 *
 * # Returns
 * @return String - The value of the environment variable or the default value
 */
pub fn get_env_var_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            warn!("{} not set, using default value: {}", key, default);
            default.to_string()
        }
    }
}

/// Which entity store backs the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sql,
}

impl FromStr for StorageBackend {
    type Err = CollegeHubError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sql" => Ok(StorageBackend::Sql),
            other => Err(CollegeHubError::Config(format!(
                "STORAGE_BACKEND must be 'memory' or 'sql', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    /// Required when `storage` is [`StorageBackend::Sql`].
    pub database_url: Option<String>,
    /// Include internal error details in 500 responses.
    pub development: bool,
}

impl AppConfig {
    /**
     * Read the configuration from the environment
     *
     * # Returns
     * @return Result<AppConfig> - The configuration, or a config error for invalid values
     */
    pub fn from_env() -> Result<Self> {
        let host = get_env_var_or_default("HOST", "0.0.0.0");
        let port = get_env_var_or_default("PORT", "8080");
        let storage = get_env_var_or_default("STORAGE_BACKEND", "memory");
        let app_env = get_env_var_or_default("APP_ENV", "production");
        Self::from_values(host, &port, &storage, std::env::var("DB_URL").ok(), &app_env)
    }

    fn from_values(
        host: String,
        port: &str,
        storage: &str,
        database_url: Option<String>,
        app_env: &str,
    ) -> Result<Self> {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| CollegeHubError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        let storage = storage.parse::<StorageBackend>()?;
        let database_url = database_url.filter(|url| !url.is_empty());
        if storage == StorageBackend::Sql && database_url.is_none() {
            return Err(CollegeHubError::Config(
                "DB_URL must be set when STORAGE_BACKEND is 'sql'".to_string(),
            ));
        }

        Ok(AppConfig {
            host,
            port,
            storage,
            database_url,
            development: app_env.eq_ignore_ascii_case("development"),
        })
    }
}
