pub mod database;
pub mod memory;
pub mod models;
pub mod seed;
pub mod storage;

pub use database::SqlStorage;
pub use memory::MemStorage;
pub use sea_orm::DbErr;
pub use seed::seed;
pub use storage::Storage;
