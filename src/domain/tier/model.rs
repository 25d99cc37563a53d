use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::InvalidTierError;

/// Subscription level attached to a user account.
///
/// The derived ordering is the privilege ordering: Free < Pro < Featured.
/// Tier changes arrive from the billing webhook pipeline; by the time a tier
/// value reaches this crate it is authoritative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Pro,
    Featured,
}

impl SubscriptionTier {
    /// All tiers, lowest privilege first.
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Pro,
        SubscriptionTier::Featured,
    ];
}

impl std::fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionTier::Free => write!(f, "free"),
            SubscriptionTier::Pro => write!(f, "pro"),
            SubscriptionTier::Featured => write!(f, "featured"),
        }
    }
}

impl FromStr for SubscriptionTier {
    type Err = InvalidTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(SubscriptionTier::Free),
            "pro" => Ok(SubscriptionTier::Pro),
            "featured" => Ok(SubscriptionTier::Featured),
            other => Err(InvalidTierError(other.to_string())),
        }
    }
}

/// Weight a profile's search position gets from its tier. Used in listing
/// queries that sort by tier before anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPriority {
    Low,
    High,
    Featured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsLevel {
    None,
    Basic,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Community,
    Priority,
    Dedicated,
}

/// What a tier buys. One immutable record per tier, defined statically in the
/// catalog; everything that gates on tier reads from here.
///
/// Quota fields use `None` for unlimited, which keeps "no limit" distinct from
/// a limit of zero.
#[derive(Debug, Clone, Serialize)]
pub struct TierFeatures {
    pub portfolio_limit: Option<i64>,
    pub messages_per_month: Option<i64>,
    pub search_priority: SearchPriority,
    pub analytics_level: AnalyticsLevel,
    pub custom_themes_allowed: bool,
    pub badge: Option<&'static str>,
    pub support_level: SupportLevel,
    pub spotlight_allowed: bool,
    pub early_access_allowed: bool,
    pub video_intro_allowed: bool,
    pub monthly_price_cents: i64,
}
