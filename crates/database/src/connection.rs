use crate::error::DbError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

/// Establishes a connection pool to the PostgreSQL database.
///
/// Reads `DATABASE_URL` from the environment (the binary loads `.env` at
/// startup) and returns a pool shared across the whole application.
pub async fn connect() -> Result<PgPool, DbError> {
    let database_url = env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfig("DATABASE_URL must be set.".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await?;

    Ok(pool)
}
