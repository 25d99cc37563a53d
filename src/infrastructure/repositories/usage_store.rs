use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Read-only counting queries against the record store. The gate only ever
/// reads usage; writes happen in the upload/messaging paths, outside this
/// crate.
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Total portfolio items owned by the user (cumulative, not windowed).
    async fn count_portfolio_items(&self, user_id: Uuid) -> AppResult<i64>;

    /// Messages authored by the user with `sent_at >= since`.
    async fn count_messages_since(&self, user_id: Uuid, since: DateTime<Utc>) -> AppResult<i64>;
}

pub struct PgUsageStore {
    pool: Arc<DbPool>,
}

impl PgUsageStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageStore for PgUsageStore {
    async fn count_portfolio_items(&self, user_id: Uuid) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM portfolio_items
            WHERE owner_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    async fn count_messages_since(&self, user_id: Uuid, since: DateTime<Utc>) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM messages
            WHERE sender_id = $1 AND sent_at >= $2
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
