pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{compare_tiers, features_for, search_bonus};
pub use error::InvalidTierError;
pub use model::{AnalyticsLevel, SearchPriority, SubscriptionTier, SupportLevel, TierFeatures};
