use std::sync::Arc;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::helpers::{profile_named, FakeProfileStore};
use reelboard_backend::domain::search::{SearchFilters, SearchService};
use reelboard_backend::domain::tier::SubscriptionTier;

#[tokio::test]
async fn it_should_rank_paid_tiers_above_perfect_relevance() {
    // The free profile matches the query in every field; the pro profile not
    // at all. Tier still wins.
    let mut free = profile_named("drone", SubscriptionTier::Free);
    free.bio = "drone".to_string();
    free.location = "drone".to_string();
    free.specialties = vec!["drone".to_string()];
    let pro = profile_named("Unrelated Editor", SubscriptionTier::Pro);

    let store = Arc::new(FakeProfileStore::new(vec![free, pro]));
    let service = SearchService::new(store);

    let response = service
        .search("drone", &SearchFilters::default(), 20, 0)
        .await;

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].profile.tier, SubscriptionTier::Pro);
    assert_eq!(response.results[0].relevance_score, 0);
    assert_eq!(response.results[1].relevance_score, 100);
}

#[tokio::test]
async fn it_should_report_tier_distribution_over_the_returned_page() {
    let store = Arc::new(FakeProfileStore::new(vec![
        profile_named("A", SubscriptionTier::Featured),
        profile_named("B", SubscriptionTier::Pro),
        profile_named("C", SubscriptionTier::Pro),
        profile_named("D", SubscriptionTier::Free),
    ]));
    let service = SearchService::new(store);

    let response = service.search("", &SearchFilters::default(), 20, 0).await;

    assert_eq!(response.total, 4);
    assert_eq!(response.featured_count, 1);
    assert_eq!(response.pro_count, 2);
    assert_eq!(response.free_count, 1);
}

#[tokio::test]
async fn it_should_score_every_candidate_50_for_an_empty_query() {
    let store = Arc::new(FakeProfileStore::new(vec![
        profile_named("A", SubscriptionTier::Free),
        profile_named("B", SubscriptionTier::Free),
    ]));
    let service = SearchService::new(store);

    let response = service.search("", &SearchFilters::default(), 20, 0).await;

    assert!(response.results.iter().all(|r| r.relevance_score == 50));
}

#[tokio::test]
async fn it_should_degrade_to_empty_results_when_the_store_is_down() {
    let service = SearchService::new(Arc::new(FakeProfileStore::unavailable()));

    let response = service
        .search("drone", &SearchFilters::default(), 20, 0)
        .await;

    assert!(response.results.is_empty());
    assert_eq!(response.total, 0);
    assert_eq!(response.featured_count, 0);
    assert_eq!(response.pro_count, 0);
    assert_eq!(response.free_count, 0);
}

#[tokio::test]
async fn it_should_paginate_through_the_store_window() {
    let store = Arc::new(FakeProfileStore::new(vec![
        profile_named("A", SubscriptionTier::Free),
        profile_named("B", SubscriptionTier::Free),
        profile_named("C", SubscriptionTier::Free),
    ]));
    let service = SearchService::new(store);

    let response = service.search("", &SearchFilters::default(), 2, 2).await;

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.total, 3);
}

#[tokio::test]
async fn it_should_return_only_featured_profiles_in_the_spotlight() {
    let mut older = profile_named("Older Featured", SubscriptionTier::Featured);
    older.updated_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut newer = profile_named("Newer Featured", SubscriptionTier::Featured);
    newer.updated_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();

    let store = Arc::new(FakeProfileStore::new(vec![
        profile_named("Pro Editor", SubscriptionTier::Pro),
        older,
        newer,
    ]));
    let service = SearchService::new(store);

    let spotlight = service.featured_spotlight(5).await;

    assert_eq!(spotlight.len(), 2);
    assert!(spotlight
        .iter()
        .all(|p| p.tier == SubscriptionTier::Featured));
    assert_eq!(spotlight[0].display_name, "Newer Featured");
}

#[tokio::test]
async fn it_should_cap_the_spotlight_at_the_requested_count() {
    let store = Arc::new(FakeProfileStore::new(vec![
        profile_named("A", SubscriptionTier::Featured),
        profile_named("B", SubscriptionTier::Featured),
        profile_named("C", SubscriptionTier::Featured),
    ]));
    let service = SearchService::new(store);

    assert_eq!(service.featured_spotlight(2).await.len(), 2);
}

#[tokio::test]
async fn it_should_return_an_empty_spotlight_when_the_store_is_down() {
    let service = SearchService::new(Arc::new(FakeProfileStore::unavailable()));
    assert!(service.featured_spotlight(5).await.is_empty());
}

#[tokio::test]
async fn it_should_extend_suggestions_for_paid_tiers() {
    let service = SearchService::new(Arc::new(FakeProfileStore::new(Vec::new())));

    let free = service.suggestions(SubscriptionTier::Free);
    let pro = service.suggestions(SubscriptionTier::Pro);
    let featured = service.suggestions(SubscriptionTier::Featured);

    assert!(pro.len() > free.len());
    assert_eq!(pro, featured);
    // The paid list starts with the baseline list.
    assert_eq!(&pro[..free.len()], &free[..]);
}
