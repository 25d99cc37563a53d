use crate::error::AppError;

/// A single problem found in user-submitted theme data.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThemeViolation {
    /// A color field is not a strict 6-digit hex value.
    InvalidColor { field: &'static str, value: String },
    /// The layout is not one of the known layouts.
    UnknownLayout { value: String },
    /// The custom CSS contains a denylisted substring.
    DangerousCss { pattern: &'static str },
}

impl std::fmt::Display for ThemeViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeViolation::InvalidColor { field, value } => {
                write!(f, "color '{}' must be a 6-digit hex value, got '{}'", field, value)
            }
            ThemeViolation::UnknownLayout { value } => {
                write!(f, "unknown layout '{}'", value)
            }
            ThemeViolation::DangerousCss { pattern } => {
                write!(f, "custom CSS contains forbidden content '{}'", pattern)
            }
        }
    }
}

/// Theme validation failure. Carries every violation found, never just the
/// first, so a caller can report all of them at once.
#[derive(Debug, thiserror::Error)]
#[error("theme validation failed: {}", violations.iter().map(|v| v.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ThemeValidationError {
    pub violations: Vec<ThemeViolation>,
}

impl From<ThemeValidationError> for AppError {
    fn from(err: ThemeValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
