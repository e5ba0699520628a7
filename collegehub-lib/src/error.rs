use collegehub_database::DbErr;
use thiserror::Error;

/// Every failure a request can end in. Each request yields either a full
/// result or exactly one of these.
#[derive(Debug, Error)]
pub enum CollegeHubError {
    /// A malformed request parameter; reported to the client as is.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CollegeHubError>;
