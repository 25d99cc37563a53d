//! Predefined profile themes, two per tier.

use super::model::{CustomTheme, ThemeColors, ThemeLayout, ThemeTypography};
use crate::domain::tier::SubscriptionTier;

macro_rules! colors {
    ($primary:expr, $secondary:expr, $accent:expr, $background:expr, $text:expr) => {
        ThemeColors {
            primary: String::from($primary),
            secondary: String::from($secondary),
            accent: String::from($accent),
            background: String::from($background),
            text: String::from($text),
        }
    };
}

/// The static theme catalog. Order is free themes first, then pro, then
/// featured.
pub fn theme_catalog() -> Vec<CustomTheme> {
    vec![
        CustomTheme {
            id: "classic-light",
            name: "Classic Light",
            tier: SubscriptionTier::Free,
            colors: colors!("#2563EB", "#64748B", "#F59E0B", "#FFFFFF", "#0F172A"),
            layout: ThemeLayout::Classic,
            typography: ThemeTypography::Sans,
            custom_css: None,
            published: true,
        },
        CustomTheme {
            id: "classic-dark",
            name: "Classic Dark",
            tier: SubscriptionTier::Free,
            colors: colors!("#3B82F6", "#94A3B8", "#FBBF24", "#0F172A", "#F8FAFC"),
            layout: ThemeLayout::Classic,
            typography: ThemeTypography::Sans,
            custom_css: None,
            published: true,
        },
        CustomTheme {
            id: "studio",
            name: "Studio",
            tier: SubscriptionTier::Pro,
            colors: colors!("#18181B", "#52525B", "#E11D48", "#FAFAFA", "#18181B"),
            layout: ThemeLayout::Grid,
            typography: ThemeTypography::Serif,
            custom_css: None,
            published: true,
        },
        CustomTheme {
            id: "noir",
            name: "Noir",
            tier: SubscriptionTier::Pro,
            colors: colors!("#111111", "#333333", "#D4AF37", "#000000", "#EEEEEE"),
            layout: ThemeLayout::Minimal,
            typography: ThemeTypography::Mono,
            custom_css: None,
            published: true,
        },
        CustomTheme {
            id: "showcase",
            name: "Showcase",
            tier: SubscriptionTier::Featured,
            colors: colors!("#7C3AED", "#A78BFA", "#F472B6", "#FAF5FF", "#1E1B4B"),
            layout: ThemeLayout::Showcase,
            typography: ThemeTypography::Display,
            custom_css: None,
            published: true,
        },
        CustomTheme {
            id: "premiere",
            name: "Premiere",
            tier: SubscriptionTier::Featured,
            colors: colors!("#B91C1C", "#FCA5A5", "#FDE047", "#1C1917", "#FAFAF9"),
            layout: ThemeLayout::Showcase,
            typography: ThemeTypography::Display,
            custom_css: None,
            published: true,
        },
    ]
}
