use crate::domain::tier::SubscriptionTier;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Available,
    Busy,
    Unavailable,
}

impl FromStr for AvailabilityStatus {
    type Err = crate::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(AvailabilityStatus::Available),
            "busy" => Ok(AvailabilityStatus::Busy),
            "unavailable" => Ok(AvailabilityStatus::Unavailable),
            other => Err(crate::error::AppError::BadRequest(format!(
                "unknown availability status: {}",
                other
            ))),
        }
    }
}

/// Point-in-time snapshot of an editor profile as returned by the record
/// store. Read-only for the duration of one search call; fetched fresh per
/// request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchableProfile {
    pub id: Uuid,
    pub display_name: String,
    pub bio: String,
    pub location: String,
    pub specialties: Vec<String>,
    pub hourly_rate: Decimal,
    pub years_experience: i32,
    pub profile_views: i64,
    pub response_rate: f64,
    pub availability: AvailabilityStatus,
    pub tier: SubscriptionTier,
    pub updated_at: DateTime<Utc>,
}

/// Optional search filters. All present filters combine with AND semantics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    /// Match profiles whose specialty set overlaps this set.
    pub specialties: Option<Vec<String>>,
    /// Case-insensitive location substring.
    pub location: Option<String>,
    pub min_rate: Option<Decimal>,
    pub max_rate: Option<Decimal>,
    pub availability: Option<AvailabilityStatus>,
    pub min_experience: Option<i32>,
}

/// A profile plus its derived ranking inputs. Computed per call, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub profile: SearchableProfile,
    /// 0-100, query-dependent.
    pub relevance_score: i64,
    pub tier_bonus: i64,
}

/// Result envelope handed back to the caller. Tier counts cover the returned
/// page, not the full candidate set.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RankedResult>,
    pub total: i64,
    pub featured_count: usize,
    pub pro_count: usize,
    pub free_count: usize,
}

impl SearchResponse {
    /// The fail-safe shape returned when the store is unavailable: a listing
    /// page renders "no results" instead of an error.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total: 0,
            featured_count: 0,
            pro_count: 0,
            free_count: 0,
        }
    }
}
