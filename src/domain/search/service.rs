//! Marketplace search with tier-weighted ranking.
//!
//! The store returns a candidate page ordered by last update; that ordering is
//! only a retrieval convenience and is superseded by the ranking here. The
//! combined sort key is (tier bonus, relevance, engagement, recency), each a
//! tie-break for the previous. Tier bonuses are spaced wider than the maximum
//! relevance score, so tier is the dominant key in practice.

use super::model::{RankedResult, SearchFilters, SearchResponse, SearchableProfile};
use crate::domain::tier::{search_bonus, SubscriptionTier};
use crate::infrastructure::repositories::ProfileStore;
use std::sync::Arc;

/// Baseline score every candidate gets for an empty query.
const EMPTY_QUERY_SCORE: i64 = 50;

const NAME_MATCH_SCORE: i64 = 40;
const SPECIALTY_MATCH_SCORE: i64 = 30;
const BIO_MATCH_SCORE: i64 = 20;
const LOCATION_MATCH_SCORE: i64 = 10;
const MAX_RELEVANCE: i64 = 100;

const BASELINE_SUGGESTIONS: [&str; 6] = [
    "color grading",
    "motion graphics",
    "wedding videos",
    "youtube editing",
    "documentary",
    "music videos",
];

const EXTENDED_SUGGESTIONS: [&str; 4] = [
    "commercial editing",
    "drone footage",
    "vfx compositing",
    "podcast production",
];

pub struct SearchService {
    store: Arc<dyn ProfileStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Run a ranked search over editor profiles.
    ///
    /// A store failure degrades to an empty zero-count response rather than an
    /// error; search is advisory and a listing page should render "no
    /// results", not crash.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        limit: i64,
        offset: i64,
    ) -> SearchResponse {
        let page = match self.store.search(query, filters, limit, offset).await {
            Ok(page) => page,
            Err(err) => {
                tracing::warn!(query = %query, error = %err, "Profile search failed, returning empty results");
                return SearchResponse::empty();
            }
        };
        let total = match self.store.count(query, filters).await {
            Ok(total) => total,
            Err(err) => {
                tracing::warn!(query = %query, error = %err, "Profile count failed, returning empty results");
                return SearchResponse::empty();
            }
        };

        let mut results: Vec<RankedResult> = page
            .into_iter()
            .map(|profile| {
                let relevance_score = relevance_score(&profile, query);
                let tier_bonus = search_bonus(profile.tier);
                RankedResult {
                    profile,
                    relevance_score,
                    tier_bonus,
                }
            })
            .collect();
        rank(&mut results);

        let featured_count = count_tier(&results, SubscriptionTier::Featured);
        let pro_count = count_tier(&results, SubscriptionTier::Pro);
        let free_count = count_tier(&results, SubscriptionTier::Free);

        SearchResponse {
            results,
            total,
            featured_count,
            pro_count,
            free_count,
        }
    }

    /// Featured-tier profiles for the spotlight surface, most recently
    /// updated first. No relevance scoring applies.
    pub async fn featured_spotlight(&self, count: i64) -> Vec<SearchableProfile> {
        match self.store.find_featured(count).await {
            Ok(profiles) => profiles,
            Err(err) => {
                tracing::warn!(error = %err, "Spotlight lookup failed, returning empty list");
                Vec::new()
            }
        }
    }

    /// Search suggestions shown in the query box. Pure lookup, no store
    /// access; paid tiers see the extended list.
    pub fn suggestions(&self, tier: SubscriptionTier) -> Vec<String> {
        let mut suggestions: Vec<String> =
            BASELINE_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        if tier >= SubscriptionTier::Pro {
            suggestions.extend(EXTENDED_SUGGESTIONS.iter().map(|s| s.to_string()));
        }
        suggestions
    }
}

/// Score how well a profile matches a free-text query, 0-100.
///
/// Field matches contribute independently and additively: name 40, specialty
/// 30, bio 20, location 10, capped at 100. An empty query yields a flat
/// baseline for every candidate.
pub fn relevance_score(profile: &SearchableProfile, query: &str) -> i64 {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return EMPTY_QUERY_SCORE;
    }

    let mut score = 0;
    if profile.display_name.to_lowercase().contains(&query) {
        score += NAME_MATCH_SCORE;
    }
    if profile
        .specialties
        .iter()
        .any(|s| s.to_lowercase().contains(&query))
    {
        score += SPECIALTY_MATCH_SCORE;
    }
    if profile.bio.to_lowercase().contains(&query) {
        score += BIO_MATCH_SCORE;
    }
    if profile.location.to_lowercase().contains(&query) {
        score += LOCATION_MATCH_SCORE;
    }
    score.min(MAX_RELEVANCE)
}

/// Composite engagement metric used as the second tie-break.
pub fn engagement(profile: &SearchableProfile) -> f64 {
    profile.profile_views as f64 + profile.response_rate * 10.0
}

/// Sort ranked results into the final order: descending tier bonus, then
/// relevance, then engagement, then recency. `sort_by` is stable, so
/// fully-tied candidates retain their retrieval order across calls.
pub fn rank(results: &mut [RankedResult]) {
    results.sort_by(|a, b| {
        b.tier_bonus
            .cmp(&a.tier_bonus)
            .then_with(|| b.relevance_score.cmp(&a.relevance_score))
            .then_with(|| engagement(&b.profile).total_cmp(&engagement(&a.profile)))
            .then_with(|| b.profile.updated_at.cmp(&a.profile.updated_at))
    });
}

fn count_tier(results: &[RankedResult], tier: SubscriptionTier) -> usize {
    results.iter().filter(|r| r.profile.tier == tier).count()
}
