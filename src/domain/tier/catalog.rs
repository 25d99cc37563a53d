//! Static tier catalog. Every tier-specific number in the product (limits,
//! prices, search weights) is defined here and nowhere else.

use std::cmp::Ordering;

use super::model::{
    AnalyticsLevel, SearchPriority, SubscriptionTier, SupportLevel, TierFeatures,
};

const FREE_FEATURES: TierFeatures = TierFeatures {
    portfolio_limit: Some(3),
    messages_per_month: Some(10),
    search_priority: SearchPriority::Low,
    analytics_level: AnalyticsLevel::None,
    custom_themes_allowed: false,
    badge: None,
    support_level: SupportLevel::Community,
    spotlight_allowed: false,
    early_access_allowed: false,
    video_intro_allowed: false,
    monthly_price_cents: 0,
};

const PRO_FEATURES: TierFeatures = TierFeatures {
    portfolio_limit: None,
    messages_per_month: Some(100),
    search_priority: SearchPriority::High,
    analytics_level: AnalyticsLevel::Basic,
    custom_themes_allowed: true,
    badge: Some("pro"),
    support_level: SupportLevel::Priority,
    spotlight_allowed: false,
    early_access_allowed: false,
    video_intro_allowed: true,
    monthly_price_cents: 1200,
};

const FEATURED_FEATURES: TierFeatures = TierFeatures {
    portfolio_limit: None,
    messages_per_month: None,
    search_priority: SearchPriority::Featured,
    analytics_level: AnalyticsLevel::Advanced,
    custom_themes_allowed: true,
    badge: Some("featured"),
    support_level: SupportLevel::Dedicated,
    spotlight_allowed: true,
    early_access_allowed: true,
    video_intro_allowed: true,
    monthly_price_cents: 2900,
};

/// Look up the feature set for a tier. Total over the enum, so an invalid tier
/// cannot reach this function; string input fails at the parse boundary with
/// `InvalidTierError` instead.
pub fn features_for(tier: SubscriptionTier) -> &'static TierFeatures {
    match tier {
        SubscriptionTier::Free => &FREE_FEATURES,
        SubscriptionTier::Pro => &PRO_FEATURES,
        SubscriptionTier::Featured => &FEATURED_FEATURES,
    }
}

/// Compare two tiers by privilege (Free < Pro < Featured).
pub fn compare_tiers(a: SubscriptionTier, b: SubscriptionTier) -> Ordering {
    a.cmp(&b)
}

/// Fixed score increment a profile earns in search ranking from its tier.
///
/// The steps are larger than the maximum relevance score (100), so tier always
/// dominates relevance in the combined ordering.
pub fn search_bonus(tier: SubscriptionTier) -> i64 {
    match tier {
        SubscriptionTier::Free => 0,
        SubscriptionTier::Pro => 500,
        SubscriptionTier::Featured => 1000,
    }
}
