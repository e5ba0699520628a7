pub mod colleges;
pub mod comparison;
pub mod exams;

use std::sync::Arc;

use collegehub_database::{seed, MemStorage, SqlStorage, Storage};

use crate::config::{AppConfig, StorageBackend};
use crate::error::{CollegeHubError, Result};

/**
 * Build the configured entity store and load the reference data into it
 *
 * # Arguments
 * @param config: &AppConfig - The server configuration
 *
 * # Returns
 * @return Result<Arc<dyn Storage>> - The shared store
 */
pub async fn setup_storage(config: &AppConfig) -> Result<Arc<dyn Storage>> {
    let storage: Arc<dyn Storage> = match config.storage {
        StorageBackend::Memory => Arc::new(MemStorage::new()),
        StorageBackend::Sql => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| CollegeHubError::Config("DB_URL is not set".to_string()))?;
            let sql = SqlStorage::connect(url).await?;
            sql.create_tables().await?;
            Arc::new(sql)
        }
    };

    seed(storage.as_ref()).await?;
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colleges::{get_colleges, CollegeQuery, SortBy};

    fn config(storage: StorageBackend, database_url: Option<&str>) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage,
            database_url: database_url.map(str::to_string),
            development: false,
        }
    }

    #[tokio::test]
    async fn memory_storage_is_seeded() {
        let storage = setup_storage(&config(StorageBackend::Memory, None))
            .await
            .unwrap();
        assert_eq!(storage.list_colleges().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn sql_storage_is_created_and_seeded() {
        let storage = setup_storage(&config(StorageBackend::Sql, Some("sqlite::memory:")))
            .await
            .unwrap();
        assert_eq!(storage.list_colleges().await.unwrap().len(), 5);
        assert_eq!(storage.list_exams().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn both_backends_resolve_the_same_pages() {
        let memory = setup_storage(&config(StorageBackend::Memory, None))
            .await
            .unwrap();
        let sql = setup_storage(&config(StorageBackend::Sql, Some("sqlite::memory:")))
            .await
            .unwrap();

        let queries = [
            CollegeQuery {
                state: Some("Delhi".to_string()),
                offset: 1,
                limit: 1,
                ..Default::default()
            },
            CollegeQuery {
                course_type: Some("M.Tech".to_string()),
                max_fees: Some(300000.0),
                ..Default::default()
            },
            CollegeQuery {
                course_type: Some("PhD".to_string()),
                sort_by: SortBy::Fees,
                offset: 2,
                limit: 2,
                ..Default::default()
            },
        ];

        for query in &queries {
            let from_memory = get_colleges(memory.as_ref(), query).await.unwrap();
            let from_sql = get_colleges(sql.as_ref(), query).await.unwrap();

            let ids =
                |page: &colleges::CollegePage| page.data.iter().map(|c| c.id).collect::<Vec<_>>();
            assert_eq!(ids(&from_memory), ids(&from_sql), "{:?}", query);
            assert_eq!(from_memory.total, from_sql.total, "{:?}", query);
            assert!(!from_memory.data.is_empty(), "{:?}", query);
        }
    }

    #[tokio::test]
    async fn sql_storage_without_url_is_a_config_error() {
        let result = setup_storage(&config(StorageBackend::Sql, None)).await;
        assert!(matches!(result, Err(CollegeHubError::Config(_))));
    }
}
