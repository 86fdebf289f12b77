use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database connection configuration error: {0}")]
    ConnectionConfig(String),

    #[error("A database query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Failed to encode a JSONB column: {0}")]
    JsonEncode(#[from] serde_json::Error),
}
