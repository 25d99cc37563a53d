//! Gate decisions for tier-controlled capabilities.
//!
//! Metered checks use read-then-decide semantics: the usage count is read,
//! then compared against the quota. Two concurrent requests can both observe
//! room under the limit and both pass. The gate is advisory; strict
//! enforcement, where required, belongs to a constraint in the write path of
//! the record store. This is an accepted non-guarantee.

use super::model::{Feature, FeatureVerdict};
use crate::domain::tier::{features_for, AnalyticsLevel, SubscriptionTier};
use crate::domain::usage::{UsageCounter, UsageMetric};
use chrono::Utc;
use uuid::Uuid;

pub struct AccessService {
    usage: UsageCounter,
}

impl AccessService {
    pub fn new(usage: UsageCounter) -> Self {
        Self { usage }
    }

    /// Check a single capability for a user on a given tier.
    ///
    /// Infallible by design: every failure mode, including a store outage,
    /// becomes a denial verdict with an explanation. Access is never granted
    /// on error.
    pub async fn check_feature(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
        feature: Feature,
    ) -> FeatureVerdict {
        match feature {
            Feature::CustomThemes
            | Feature::Spotlight
            | Feature::VideoIntro
            | Feature::EarlyAccess
            | Feature::Analytics => self.check_boolean(tier, feature),
            Feature::AdvancedAnalytics => self.check_advanced_analytics(tier),
            Feature::PortfolioUpload => {
                self.check_metered(
                    user_id,
                    tier,
                    feature,
                    features_for(tier).portfolio_limit,
                    UsageMetric::PortfolioUploads,
                )
                .await
            }
            Feature::SendMessage => {
                self.check_metered(
                    user_id,
                    tier,
                    feature,
                    features_for(tier).messages_per_month,
                    UsageMetric::MessagesSentThisMonth,
                )
                .await
            }
        }
    }

    /// Check several capabilities independently, in the order given. One
    /// capability failing to evaluate does not block its siblings.
    pub async fn check_features(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
        features: &[Feature],
    ) -> Vec<(Feature, FeatureVerdict)> {
        let mut verdicts = Vec::with_capacity(features.len());
        for &feature in features {
            verdicts.push((feature, self.check_feature(user_id, tier, feature).await));
        }
        verdicts
    }
}

impl AccessService {
    fn check_boolean(&self, tier: SubscriptionTier, feature: Feature) -> FeatureVerdict {
        if boolean_flag(tier, feature) {
            return FeatureVerdict::allowed(format!(
                "{} is included in your plan.",
                feature.label()
            ));
        }

        let required = lowest_tier_granting(feature);
        let message = match required {
            Some(required) => format!(
                "{} requires the {} plan. Upgrade to unlock it.",
                feature.label(),
                required
            ),
            None => format!("{} is not available on any plan.", feature.label()),
        };
        FeatureVerdict::denied(message, required)
    }

    fn check_advanced_analytics(&self, tier: SubscriptionTier) -> FeatureVerdict {
        // Basic analytics on Pro does not satisfy this check; the level must
        // be advanced exactly.
        if features_for(tier).analytics_level == AnalyticsLevel::Advanced {
            FeatureVerdict::allowed("Advanced analytics is included in your plan.")
        } else {
            FeatureVerdict::denied(
                "Advanced analytics requires the featured plan. Upgrade to unlock it.",
                Some(SubscriptionTier::Featured),
            )
        }
    }

    async fn check_metered(
        &self,
        user_id: Uuid,
        tier: SubscriptionTier,
        feature: Feature,
        limit: Option<i64>,
        metric: UsageMetric,
    ) -> FeatureVerdict {
        let Some(limit) = limit else {
            // Unlimited: no reason to touch the store.
            return FeatureVerdict::allowed(format!(
                "{} is unlimited on your plan.",
                feature.label()
            ));
        };

        let current = match self.usage.count(user_id, metric, Utc::now()).await {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(
                    user_id = %user_id,
                    feature = %feature,
                    error = %err,
                    "Usage lookup failed, denying access"
                );
                // Fail closed: never grant on a failed usage read.
                return FeatureVerdict::denied(
                    format!(
                        "Unable to verify your current {} usage. Please try again.",
                        feature.label().to_lowercase()
                    ),
                    None,
                );
            }
        };

        if current < limit {
            let mut verdict = FeatureVerdict::allowed(metered_allowed_message(
                feature,
                current,
                limit,
            ));
            verdict.current_usage = Some(current);
            verdict.limit = Some(limit);
            verdict
        } else {
            let upgrade = metered_upgrade_suggestion(tier, feature);
            let mut verdict =
                FeatureVerdict::denied(metered_denied_message(feature, limit, upgrade), upgrade);
            verdict.current_usage = Some(current);
            verdict.limit = Some(limit);
            verdict
        }
    }
}

fn boolean_flag(tier: SubscriptionTier, feature: Feature) -> bool {
    let features = features_for(tier);
    match feature {
        Feature::CustomThemes => features.custom_themes_allowed,
        Feature::Spotlight => features.spotlight_allowed,
        Feature::VideoIntro => features.video_intro_allowed,
        Feature::EarlyAccess => features.early_access_allowed,
        Feature::Analytics => features.analytics_level >= AnalyticsLevel::Basic,
        // Non-boolean capabilities never reach here.
        Feature::AdvancedAnalytics | Feature::PortfolioUpload | Feature::SendMessage => false,
    }
}

/// Lowest tier at which a boolean capability is granted, scanning in
/// privilege order.
fn lowest_tier_granting(feature: Feature) -> Option<SubscriptionTier> {
    SubscriptionTier::ALL
        .into_iter()
        .find(|&tier| boolean_flag(tier, feature))
}

fn metered_allowed_message(feature: Feature, current: i64, limit: i64) -> String {
    let remaining = limit - current;
    match feature {
        Feature::PortfolioUpload => format!(
            "{} of {} portfolio slots used ({} remaining).",
            current, limit, remaining
        ),
        Feature::SendMessage => format!(
            "{} of {} messages sent this month ({} remaining).",
            current, limit, remaining
        ),
        _ => format!("{} of {} used.", current, limit),
    }
}

fn metered_denied_message(
    feature: Feature,
    limit: i64,
    upgrade: Option<SubscriptionTier>,
) -> String {
    let base = match feature {
        Feature::PortfolioUpload => format!("Portfolio limit of {} reached.", limit),
        Feature::SendMessage => format!("Monthly message limit of {} reached.", limit),
        _ => format!("Limit of {} reached.", limit),
    };
    match upgrade {
        Some(tier) => format!("{} Upgrade to the {} plan for more.", base, tier),
        None => base,
    }
}

/// Upgrade path when a metered limit is hit. Portfolio has a single
/// escalation (free to pro, both higher tiers are unlimited); messages
/// escalate twice (free to pro, pro to featured).
fn metered_upgrade_suggestion(
    tier: SubscriptionTier,
    feature: Feature,
) -> Option<SubscriptionTier> {
    match (feature, tier) {
        (Feature::PortfolioUpload, SubscriptionTier::Free) => Some(SubscriptionTier::Pro),
        (Feature::SendMessage, SubscriptionTier::Free) => Some(SubscriptionTier::Pro),
        (Feature::SendMessage, SubscriptionTier::Pro) => Some(SubscriptionTier::Featured),
        _ => None,
    }
}
