use super::catalog::theme_catalog;
use super::model::CustomTheme;
use crate::domain::tier::{features_for, SubscriptionTier};

/// Tier rules for profile theming. Stateless; every method is a pure function
/// of tier and the static catalog.
pub struct ThemeService;

impl ThemeService {
    pub fn new() -> Self {
        Self
    }

    /// Themes unlocked for a tier: every catalog entry whose own tier is at
    /// or below the user's. Unlocking is monotonic, a higher tier always sees
    /// a superset.
    pub fn available_themes(&self, tier: SubscriptionTier) -> Vec<CustomTheme> {
        theme_catalog()
            .into_iter()
            .filter(|theme| theme.tier <= tier)
            .collect()
    }

    /// Whether a tier can use a specific theme. Unknown ids are simply not
    /// accessible, not an error.
    pub fn can_access_theme(&self, tier: SubscriptionTier, theme_id: &str) -> bool {
        theme_catalog()
            .iter()
            .any(|theme| theme.id == theme_id && theme.tier <= tier)
    }

    pub fn can_use_custom_css(&self, tier: SubscriptionTier) -> bool {
        features_for(tier).custom_themes_allowed
    }

    pub fn can_use_custom_banner(&self, tier: SubscriptionTier) -> bool {
        features_for(tier).custom_themes_allowed
    }

    pub fn can_use_advanced_layouts(&self, tier: SubscriptionTier) -> bool {
        features_for(tier).custom_themes_allowed
    }
}

impl Default for ThemeService {
    fn default() -> Self {
        Self::new()
    }
}
