use crate::infrastructure::repositories::UsageStore;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// A metered resource whose consumption is counted from the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageMetric {
    /// Cumulative count of portfolio items the user owns.
    PortfolioUploads,
    /// Messages sent within the calendar month containing the evaluation
    /// instant.
    MessagesSentThisMonth,
}

/// First instant (00:00 UTC) of the calendar month containing `as_of`.
pub fn month_start(as_of: DateTime<Utc>) -> DateTime<Utc> {
    let date = as_of.date_naive().with_day(1).expect("day 1 is always valid");
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("midnight is always valid"))
}

/// Derives a user's current consumption of a metered resource by counting
/// matching records. Pure read; a store failure is returned as an error, never
/// coerced to zero, so callers can surface a degraded-access message instead
/// of granting or denying on bad data.
pub struct UsageCounter {
    store: Arc<dyn UsageStore>,
}

impl UsageCounter {
    pub fn new(store: Arc<dyn UsageStore>) -> Self {
        Self { store }
    }

    pub async fn count(
        &self,
        user_id: Uuid,
        metric: UsageMetric,
        as_of: DateTime<Utc>,
    ) -> crate::error::AppResult<i64> {
        match metric {
            UsageMetric::PortfolioUploads => self.store.count_portfolio_items(user_id).await,
            UsageMetric::MessagesSentThisMonth => {
                self.store
                    .count_messages_since(user_id, month_start(as_of))
                    .await
            }
        }
    }
}
