use crate::domain::tier::SubscriptionTier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four known profile layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeLayout {
    Classic,
    Minimal,
    Grid,
    Showcase,
}

impl FromStr for ThemeLayout {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(ThemeLayout::Classic),
            "minimal" => Ok(ThemeLayout::Minimal),
            "grid" => Ok(ThemeLayout::Grid),
            "showcase" => Ok(ThemeLayout::Showcase),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTypography {
    Sans,
    Serif,
    Mono,
    Display,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// A profile theme. Predefined themes are immutable static data owned by the
/// catalog; `tier` is the minimum tier that unlocks the theme.
#[derive(Debug, Clone, Serialize)]
pub struct CustomTheme {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: SubscriptionTier,
    pub colors: ThemeColors,
    pub layout: ThemeLayout,
    pub typography: ThemeTypography,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    pub published: bool,
}

/// Untrusted theme data submitted by a user, validated before any use.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeInput {
    pub colors: ThemeColorsInput,
    pub layout: String,
    #[serde(default)]
    pub custom_css: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeColorsInput {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}
