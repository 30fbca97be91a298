//! # PostgreSQL Repositories
//!
//! sqlx-backed implementations of the repository traits, plus pool creation
//! and schema bootstrap.

pub mod tour_rating_repository;
pub mod tour_repository;

pub use tour_rating_repository::PostgresTourRatingRepository;
pub use tour_repository::{PostgresTourPackageRepository, PostgresTourRepository};

use crate::infrastructure::persistence::traits::{RepositoryError, RepositoryResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Schema created at startup when missing.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tour_package (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tour (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price INTEGER NOT NULL DEFAULT 0,
    duration TEXT NOT NULL DEFAULT '',
    tour_package_code TEXT NOT NULL,
    difficulty TEXT NOT NULL,
    region TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS tour_rating (
    tour_id INTEGER NOT NULL REFERENCES tour (id),
    customer_id INTEGER NOT NULL,
    score INTEGER NOT NULL CHECK (score BETWEEN 0 AND 5),
    comment VARCHAR(255),
    PRIMARY KEY (tour_id, customer_id)
);
"#;

/// Opens a connection pool.
///
/// # Errors
///
/// Returns `RepositoryError::Connection` if the database is unreachable.
pub async fn connect(url: &str, max_connections: u32) -> RepositoryResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| RepositoryError::connection(e.to_string()))
}

/// Creates the tables if they do not exist yet.
///
/// # Errors
///
/// Returns `RepositoryError::Query` if a statement fails.
pub async fn ensure_schema(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| RepositoryError::query(e.to_string()))?;
    Ok(())
}
