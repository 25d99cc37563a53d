//! Validation of user-submitted theme data. Defense in depth: route handlers
//! already reject malformed JSON, but any custom theme payload passes through
//! here before touching rendering or storage.

use super::error::{ThemeValidationError, ThemeViolation};
use super::model::{ThemeInput, ThemeLayout};
use regex::Regex;

/// Substrings that are never allowed in custom style text.
const CSS_DENYLIST: [&str; 4] = ["<script", "javascript:", "expression(", "eval("];

/// Validate untrusted theme input, collecting every violation found.
pub fn validate_theme_input(input: &ThemeInput) -> Result<(), ThemeValidationError> {
    let hex_pattern = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
    let mut violations = Vec::new();

    let color_fields = [
        ("primary", &input.colors.primary),
        ("secondary", &input.colors.secondary),
        ("accent", &input.colors.accent),
        ("background", &input.colors.background),
        ("text", &input.colors.text),
    ];
    for (field, value) in color_fields {
        if !hex_pattern.is_match(value) {
            violations.push(ThemeViolation::InvalidColor {
                field,
                value: value.clone(),
            });
        }
    }

    if input.layout.parse::<ThemeLayout>().is_err() {
        violations.push(ThemeViolation::UnknownLayout {
            value: input.layout.clone(),
        });
    }

    if let Some(css) = &input.custom_css {
        let lowered = css.to_lowercase();
        for pattern in CSS_DENYLIST {
            if lowered.contains(pattern) {
                violations.push(ThemeViolation::DangerousCss { pattern });
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ThemeValidationError { violations })
    }
}
