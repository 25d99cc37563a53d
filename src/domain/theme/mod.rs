pub mod catalog;
pub mod error;
pub mod model;
pub mod service;
pub mod validation;

pub use catalog::theme_catalog;
pub use error::{ThemeValidationError, ThemeViolation};
pub use model::{CustomTheme, ThemeColors, ThemeColorsInput, ThemeInput, ThemeLayout, ThemeTypography};
pub use service::ThemeService;
pub use validation::validate_theme_input;
