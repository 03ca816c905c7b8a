use seatwise_core::booking::MAX_FIRST_NAME_LEN;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Sqlite>,
}

impl DbClient {
    pub async fn new(connection_string: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    /// Drops the BOOKINGS table if present and recreates it empty.
    ///
    /// SQLite ignores VARCHAR(n) widths, so the length limit is a CHECK
    /// constraint. A null or over-long FIRST_NAME must be rejected by the
    /// database itself, not by Rust-side validation.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        info!("Recreating BOOKINGS table");
        sqlx::query("DROP TABLE IF EXISTS bookings")
            .execute(&self.pool)
            .await?;
        sqlx::query(&format!(
            "CREATE TABLE bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL CHECK (length(first_name) <= {MAX_FIRST_NAME_LEN})
            )"
        ))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
