use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::theme::{validate_theme_input, CustomTheme, ThemeInput, ThemeService};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;

#[derive(Debug, Serialize)]
pub struct ThemesResponse {
    pub themes: Vec<CustomTheme>,
    pub can_use_custom_css: bool,
    pub can_use_custom_banner: bool,
    pub can_use_advanced_layouts: bool,
}

#[derive(Debug, Serialize)]
pub struct ThemeAccessResponse {
    pub can_access: bool,
}

pub struct ThemeController {
    theme_service: Arc<ThemeService>,
    user_repo: Arc<UserRepository>,
}

impl ThemeController {
    pub fn new(theme_service: Arc<ThemeService>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            theme_service,
            user_repo,
        }
    }

    /// GET /api/users/:userId/themes - Unlocked themes plus customization flags
    pub async fn list_themes(
        State(controller): State<Arc<ThemeController>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<ThemesResponse>> {
        let user = controller
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let tier = user.subscription_tier;

        Ok(Json(ThemesResponse {
            themes: controller.theme_service.available_themes(tier),
            can_use_custom_css: controller.theme_service.can_use_custom_css(tier),
            can_use_custom_banner: controller.theme_service.can_use_custom_banner(tier),
            can_use_advanced_layouts: controller.theme_service.can_use_advanced_layouts(tier),
        }))
    }

    /// GET /api/users/:userId/themes/:themeId/access - Single-theme gate check
    pub async fn check_theme_access(
        State(controller): State<Arc<ThemeController>>,
        Path((user_id, theme_id)): Path<(Uuid, String)>,
    ) -> AppResult<Json<ThemeAccessResponse>> {
        let user = controller
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(Json(ThemeAccessResponse {
            can_access: controller
                .theme_service
                .can_access_theme(user.subscription_tier, &theme_id),
        }))
    }

    /// POST /api/themes/validate - Validate user-submitted theme data
    ///
    /// Returns 204 on success or 400 with the full violation list, so a theme
    /// editor can show everything wrong at once.
    pub async fn validate_theme(Json(input): Json<ThemeInput>) -> Response {
        match validate_theme_input(&input) {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(err) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Theme validation failed",
                    "violations": err.violations,
                })),
            )
                .into_response(),
        }
    }
}
