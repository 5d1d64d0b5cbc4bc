//! PostgreSQL backend.
//!
//! Uses one `sqlx` connection driven by a private current-thread tokio
//! runtime, so callers stay synchronous like the SQLite path.

use chrono::{DateTime, Utc};
use sqlx::Connection as _;
use sqlx::postgres::PgConnection;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::error::{Result, StorageContext};
use crate::models::{Percentage, UsageReading};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS pool_usage (
    id SERIAL PRIMARY KEY,
    timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    percentage INT NOT NULL CHECK (percentage BETWEEN 0 AND 100)
)";

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_pool_usage_timestamp ON pool_usage(timestamp)";

pub struct PgStore {
    runtime: Runtime,
    conn: PgConnection,
}

impl PgStore {
    pub fn connect(url: &str) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .storage_context("unable to start database runtime")?;
        let conn = runtime
            .block_on(PgConnection::connect(url))
            .storage_context("unable to connect to database")?;
        debug!("opened postgres connection");
        Ok(PgStore { runtime, conn })
    }

    pub fn init_schema(&mut self) -> Result<()> {
        for statement in [CREATE_TABLE, CREATE_INDEX] {
            self.runtime
                .block_on(sqlx::query(statement).execute(&mut self.conn))
                .storage_context("error creating table")?;
        }
        Ok(())
    }

    pub fn record_usage_at(
        &mut self,
        percentage: Percentage,
        timestamp: DateTime<Utc>,
    ) -> Result<i64> {
        let id: i32 = self
            .runtime
            .block_on(
                sqlx::query_scalar::<_, i32>(
                    "INSERT INTO pool_usage (timestamp, percentage) VALUES ($1, $2) RETURNING id",
                )
                .bind(timestamp)
                .bind(i32::from(percentage.value()))
                .fetch_one(&mut self.conn),
            )
            .storage_context("error inserting data into database")?;
        Ok(i64::from(id))
    }

    pub fn count_readings(&mut self) -> Result<u64> {
        let n: i64 = self
            .runtime
            .block_on(
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pool_usage")
                    .fetch_one(&mut self.conn),
            )
            .storage_context("error counting readings")?;
        Ok(n as u64)
    }

    /// Most recent readings, newest first.
    pub fn recent_readings(&mut self, limit: usize) -> Result<Vec<UsageReading>> {
        let rows: Vec<(i32, DateTime<Utc>, i32)> = self
            .runtime
            .block_on(
                sqlx::query_as::<_, (i32, DateTime<Utc>, i32)>(
                    "SELECT id, timestamp, percentage FROM pool_usage
                     ORDER BY timestamp DESC, id DESC LIMIT $1",
                )
                .bind(limit as i64)
                .fetch_all(&mut self.conn),
            )
            .storage_context("error reading history")?;
        rows.into_iter()
            .map(|(id, timestamp, percentage)| {
                Ok(UsageReading {
                    id: i64::from(id),
                    timestamp,
                    percentage: Percentage::try_from(i64::from(percentage))?,
                })
            })
            .collect()
    }
}
