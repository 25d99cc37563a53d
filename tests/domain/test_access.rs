use std::sync::Arc;

use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::helpers::FakeUsageStore;
use reelboard_backend::domain::access::{AccessService, Feature};
use reelboard_backend::domain::tier::SubscriptionTier;
use reelboard_backend::domain::usage::UsageCounter;

fn service_with(store: Arc<FakeUsageStore>) -> AccessService {
    AccessService::new(UsageCounter::new(store))
}

#[tokio::test]
async fn it_should_allow_portfolio_upload_under_the_limit() {
    let store = Arc::new(FakeUsageStore::new(2, 0));
    let service = service_with(store.clone());

    let verdict = service
        .check_feature(Uuid::new_v4(), SubscriptionTier::Free, Feature::PortfolioUpload)
        .await;

    assert!(verdict.can_access);
    assert_eq!(verdict.current_usage, Some(2));
    assert_eq!(verdict.limit, Some(3));
    assert_eq!(verdict.upgrade_required, None);
}

#[tokio::test]
async fn it_should_deny_portfolio_upload_at_the_limit() {
    let store = Arc::new(FakeUsageStore::new(3, 0));
    let service = service_with(store);

    let verdict = service
        .check_feature(Uuid::new_v4(), SubscriptionTier::Free, Feature::PortfolioUpload)
        .await;

    assert!(!verdict.can_access);
    assert_eq!(verdict.current_usage, Some(3));
    assert_eq!(verdict.limit, Some(3));
    assert_eq!(verdict.upgrade_required, Some(SubscriptionTier::Pro));
    assert!(verdict.message.contains("Portfolio limit"));
}

#[tokio::test]
async fn it_should_deny_portfolio_upload_past_the_limit() {
    // Over-limit can happen under concurrent uploads; the gate must still say
    // no, never flip back to yes.
    let store = Arc::new(FakeUsageStore::new(4, 0));
    let service = service_with(store);

    let verdict = service
        .check_feature(Uuid::new_v4(), SubscriptionTier::Free, Feature::PortfolioUpload)
        .await;

    assert!(!verdict.can_access);
    assert_eq!(verdict.current_usage, Some(4));
}

#[tokio::test]
async fn it_should_skip_the_store_entirely_for_unlimited_quotas() {
    let store = Arc::new(FakeUsageStore::new(999, 999));
    let service = service_with(store.clone());

    let verdict = service
        .check_feature(Uuid::new_v4(), SubscriptionTier::Pro, Feature::PortfolioUpload)
        .await;

    assert!(verdict.can_access);
    let calls = store.calls.lock();
    assert_eq!(calls.portfolio, 0);
    assert_eq!(calls.messages, 0);
}

#[tokio::test]
async fn it_should_fail_closed_when_the_usage_store_is_down() {
    let store = Arc::new(FakeUsageStore::new(0, 0).failing_portfolio());
    let service = service_with(store);

    let verdict = service
        .check_feature(Uuid::new_v4(), SubscriptionTier::Free, Feature::PortfolioUpload)
        .await;

    assert!(!verdict.can_access);
    assert!(verdict.message.contains("Unable to verify"));
    assert_eq!(verdict.current_usage, None);
}

#[tokio::test]
async fn it_should_suggest_the_two_step_message_upgrade_path() {
    let free_store = Arc::new(FakeUsageStore::new(0, 10));
    let free_verdict = service_with(free_store)
        .check_feature(Uuid::new_v4(), SubscriptionTier::Free, Feature::SendMessage)
        .await;
    assert!(!free_verdict.can_access);
    assert_eq!(free_verdict.upgrade_required, Some(SubscriptionTier::Pro));

    let pro_store = Arc::new(FakeUsageStore::new(0, 100));
    let pro_verdict = service_with(pro_store)
        .check_feature(Uuid::new_v4(), SubscriptionTier::Pro, Feature::SendMessage)
        .await;
    assert!(!pro_verdict.can_access);
    assert_eq!(pro_verdict.upgrade_required, Some(SubscriptionTier::Featured));
}

#[tokio::test]
async fn it_should_gate_boolean_capabilities_by_tier_alone() {
    let store = Arc::new(FakeUsageStore::new(0, 0));
    let service = service_with(store.clone());
    let user_id = Uuid::new_v4();

    let denied = service
        .check_feature(user_id, SubscriptionTier::Free, Feature::CustomThemes)
        .await;
    assert!(!denied.can_access);
    assert_eq!(denied.upgrade_required, Some(SubscriptionTier::Pro));
    assert!(denied.message.contains("pro"));

    let allowed = service
        .check_feature(user_id, SubscriptionTier::Pro, Feature::CustomThemes)
        .await;
    assert!(allowed.can_access);

    let spotlight = service
        .check_feature(user_id, SubscriptionTier::Pro, Feature::Spotlight)
        .await;
    assert!(!spotlight.can_access);
    assert_eq!(spotlight.upgrade_required, Some(SubscriptionTier::Featured));

    // Boolean checks never touch the usage store.
    let calls = store.calls.lock();
    assert_eq!(calls.portfolio + calls.messages, 0);
}

#[tokio::test]
async fn it_should_not_accept_basic_analytics_for_the_advanced_check() {
    let store = Arc::new(FakeUsageStore::new(0, 0));
    let service = service_with(store);
    let user_id = Uuid::new_v4();

    let basic = service
        .check_feature(user_id, SubscriptionTier::Pro, Feature::Analytics)
        .await;
    assert!(basic.can_access);

    let advanced = service
        .check_feature(user_id, SubscriptionTier::Pro, Feature::AdvancedAnalytics)
        .await;
    assert!(!advanced.can_access);
    assert_eq!(advanced.upgrade_required, Some(SubscriptionTier::Featured));

    let featured = service
        .check_feature(user_id, SubscriptionTier::Featured, Feature::AdvancedAnalytics)
        .await;
    assert!(featured.can_access);
}

#[tokio::test]
async fn it_should_isolate_failures_in_batch_checks() {
    // Message counting fails; its siblings must still get real verdicts.
    let store = Arc::new(FakeUsageStore::new(1, 0).failing_messages());
    let service = service_with(store);

    let verdicts = service
        .check_features(
            Uuid::new_v4(),
            SubscriptionTier::Free,
            &[
                Feature::CustomThemes,
                Feature::SendMessage,
                Feature::PortfolioUpload,
            ],
        )
        .await;

    assert_eq!(verdicts.len(), 3);
    assert_eq!(verdicts[0].0, Feature::CustomThemes);
    assert!(!verdicts[0].1.can_access);
    assert_eq!(verdicts[0].1.upgrade_required, Some(SubscriptionTier::Pro));

    assert_eq!(verdicts[1].0, Feature::SendMessage);
    assert!(!verdicts[1].1.can_access);
    assert!(verdicts[1].1.message.contains("Unable to verify"));

    assert_eq!(verdicts[2].0, Feature::PortfolioUpload);
    assert!(verdicts[2].1.can_access);
    assert_eq!(verdicts[2].1.current_usage, Some(1));
}
