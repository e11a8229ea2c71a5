// crates/db/src/lib.rs
// Read-only sqlx access to the Steam games star-schema warehouse.

#[cfg(any(test, feature = "fixtures"))]
pub mod fixture;
mod queries;

pub use queries::playtime::{CategoryPlaytime, Weighting};
pub use queries::releases::{DensityRow, GenreAppCount, ACTIVITY_LIMIT};
pub use queries::reviews::{GameReviewRow, GenreReviewTotal, TOP_GAMES_LIMIT};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Failed to determine data directory")]
    NoDataDir,
}

pub type DbResult<T> = Result<T, DbError>;

/// Handle to the star-schema warehouse, wrapping a read-only connection pool.
///
/// The warehouse is external: steamscope owns no schema, runs no migrations,
/// and performs no writes. Each query acquires a pool connection for its
/// duration and releases it afterward; nothing is shared across requests
/// except the pool itself.
#[derive(Debug, Clone)]
pub struct Warehouse {
    pool: SqlitePool,
}

impl Warehouse {
    /// Open the warehouse file read-only.
    ///
    /// Eagerly establishes a connection, so a missing or unreadable file
    /// fails here; callers treat that as fatal at startup.
    pub async fn open(path: &Path) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .read_only(true)
            .busy_timeout(Duration::from_secs(30))
            .log_slow_statements(
                tracing::log::LevelFilter::Warn,
                std::time::Duration::from_secs(5),
            );

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        info!("warehouse opened read-only at {}", path.display());
        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Returns the default warehouse location: `<data dir>/steamscope/steam_dw.db`
pub fn default_warehouse_path() -> DbResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("steamscope").join("steam_dw.db"))
        .ok_or(DbError::NoDataDir)
}
