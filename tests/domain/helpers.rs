//! In-memory fakes for the record-store traits. The domain services only
//! observe the trait contracts, so a live database is not needed to exercise
//! gating and ranking.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use uuid::Uuid;

use reelboard_backend::domain::search::{AvailabilityStatus, SearchFilters, SearchableProfile};
use reelboard_backend::domain::tier::SubscriptionTier;
use reelboard_backend::error::{AppError, AppResult};
use reelboard_backend::infrastructure::repositories::{ProfileStore, UsageStore};

#[derive(Debug, Default)]
pub struct UsageCalls {
    pub portfolio: usize,
    pub messages: usize,
}

/// Usage store fake with per-metric counts, per-metric failure injection, and
/// a call ledger so tests can assert the store was (or was not) consulted.
pub struct FakeUsageStore {
    pub portfolio_count: i64,
    pub message_count: i64,
    pub fail_portfolio: bool,
    pub fail_messages: bool,
    pub calls: Mutex<UsageCalls>,
}

impl FakeUsageStore {
    pub fn new(portfolio_count: i64, message_count: i64) -> Self {
        Self {
            portfolio_count,
            message_count,
            fail_portfolio: false,
            fail_messages: false,
            calls: Mutex::new(UsageCalls::default()),
        }
    }

    pub fn failing_messages(mut self) -> Self {
        self.fail_messages = true;
        self
    }

    pub fn failing_portfolio(mut self) -> Self {
        self.fail_portfolio = true;
        self
    }
}

#[async_trait]
impl UsageStore for FakeUsageStore {
    async fn count_portfolio_items(&self, _user_id: Uuid) -> AppResult<i64> {
        self.calls.lock().portfolio += 1;
        if self.fail_portfolio {
            return Err(AppError::StoreUnavailable("portfolio store down".to_string()));
        }
        Ok(self.portfolio_count)
    }

    async fn count_messages_since(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> AppResult<i64> {
        self.calls.lock().messages += 1;
        if self.fail_messages {
            return Err(AppError::StoreUnavailable("message store down".to_string()));
        }
        Ok(self.message_count)
    }
}

/// Profile store fake returning a fixed candidate set. Filter push-down is
/// the real store's concern; the fake hands the page back as-is so tests
/// exercise the ranking layer.
pub struct FakeProfileStore {
    pub profiles: Vec<SearchableProfile>,
    pub fail: bool,
}

impl FakeProfileStore {
    pub fn new(profiles: Vec<SearchableProfile>) -> Self {
        Self {
            profiles,
            fail: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            profiles: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ProfileStore for FakeProfileStore {
    async fn search(
        &self,
        _query: &str,
        _filters: &SearchFilters,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<SearchableProfile>> {
        if self.fail {
            return Err(AppError::StoreUnavailable("profile store down".to_string()));
        }
        Ok(self
            .profiles
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, _query: &str, _filters: &SearchFilters) -> AppResult<i64> {
        if self.fail {
            return Err(AppError::StoreUnavailable("profile store down".to_string()));
        }
        Ok(self.profiles.len() as i64)
    }

    async fn find_featured(&self, limit: i64) -> AppResult<Vec<SearchableProfile>> {
        if self.fail {
            return Err(AppError::StoreUnavailable("profile store down".to_string()));
        }
        let mut featured: Vec<SearchableProfile> = self
            .profiles
            .iter()
            .filter(|p| p.tier == SubscriptionTier::Featured)
            .cloned()
            .collect();
        featured.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        featured.truncate(limit as usize);
        Ok(featured)
    }
}

pub fn profile_named(name: &str, tier: SubscriptionTier) -> SearchableProfile {
    SearchableProfile {
        id: Uuid::new_v4(),
        display_name: name.to_string(),
        bio: format!("{} is a video editor", name),
        location: "Lisbon".to_string(),
        specialties: vec!["color grading".to_string()],
        hourly_rate: Decimal::new(6000, 2),
        years_experience: 4,
        profile_views: 100,
        response_rate: 50.0,
        availability: AvailabilityStatus::Available,
        tier,
        updated_at: Utc.with_ymd_and_hms(2025, 5, 10, 9, 0, 0).unwrap(),
    }
}
