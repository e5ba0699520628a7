use std::sync::Arc;

use chrono::Utc;
use collegehub_database::models::{College, NewCollege};
use collegehub_database::{seed, MemStorage, Storage};

pub fn new_college(name: &str, state: &str) -> NewCollege {
    NewCollege {
        name: name.to_string(),
        location: format!("{}, India", state),
        state: state.to_string(),
        city: state.to_string(),
        college_type: "Government".to_string(),
        ..Default::default()
    }
}

pub fn college(id: i32, name: &str, rank: Option<i32>) -> College {
    NewCollege {
        overall_rank: rank,
        ..new_college(name, "Delhi")
    }
    .into_model(id, Utc::now())
}

pub async fn seeded_storage() -> Arc<dyn Storage> {
    let storage = MemStorage::new();
    seed(&storage).await.unwrap();
    Arc::new(storage)
}
