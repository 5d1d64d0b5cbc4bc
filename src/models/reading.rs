use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Percentage;

/// One stored row of the `pool_usage` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsageReading {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub percentage: Percentage,
}
