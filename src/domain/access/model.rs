use crate::domain::tier::SubscriptionTier;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Every capability the gate knows how to check. Closed set: adding a
/// capability is a compile-checked change to every match below, not a
/// silently-ignored string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    CustomThemes,
    Spotlight,
    VideoIntro,
    EarlyAccess,
    Analytics,
    AdvancedAnalytics,
    PortfolioUpload,
    SendMessage,
}

impl Feature {
    /// Human-readable name used in verdict messages.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::CustomThemes => "Custom themes",
            Feature::Spotlight => "Spotlight placement",
            Feature::VideoIntro => "Video intro",
            Feature::EarlyAccess => "Early access",
            Feature::Analytics => "Analytics",
            Feature::AdvancedAnalytics => "Advanced analytics",
            Feature::PortfolioUpload => "Portfolio upload",
            Feature::SendMessage => "Messaging",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Feature::CustomThemes => "custom-themes",
            Feature::Spotlight => "spotlight",
            Feature::VideoIntro => "video-intro",
            Feature::EarlyAccess => "early-access",
            Feature::Analytics => "analytics",
            Feature::AdvancedAnalytics => "advanced-analytics",
            Feature::PortfolioUpload => "portfolio-upload",
            Feature::SendMessage => "send-message",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Feature {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom-themes" => Ok(Feature::CustomThemes),
            "spotlight" => Ok(Feature::Spotlight),
            "video-intro" => Ok(Feature::VideoIntro),
            "early-access" => Ok(Feature::EarlyAccess),
            "analytics" => Ok(Feature::Analytics),
            "advanced-analytics" => Ok(Feature::AdvancedAnalytics),
            "portfolio-upload" => Ok(Feature::PortfolioUpload),
            "send-message" => Ok(Feature::SendMessage),
            other => Err(AppError::BadRequest(format!("unknown feature: {}", other))),
        }
    }
}

/// Outcome of one gate check. Built fresh per request, never persisted.
/// Denials always carry a message; a bare `false` is never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVerdict {
    pub can_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_usage: Option<i64>,
    /// Quota for metered capabilities. `None` means either unlimited or not
    /// applicable; the message disambiguates for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_required: Option<SubscriptionTier>,
    pub message: String,
}

impl FeatureVerdict {
    pub fn allowed(message: impl Into<String>) -> Self {
        Self {
            can_access: true,
            current_usage: None,
            limit: None,
            upgrade_required: None,
            message: message.into(),
        }
    }

    pub fn denied(message: impl Into<String>, upgrade_required: Option<SubscriptionTier>) -> Self {
        Self {
            can_access: false,
            current_usage: None,
            limit: None,
            upgrade_required,
            message: message.into(),
        }
    }
}
