use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::access::{AccessService, Feature, FeatureVerdict};
use crate::domain::tier::SubscriptionTier;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::UserRepository;

/// Request to check several capabilities at once
#[derive(Debug, Deserialize)]
pub struct CheckFeaturesRequest {
    pub features: Vec<String>,
}

pub struct AccessController {
    access_service: Arc<AccessService>,
    user_repo: Arc<UserRepository>,
}

impl AccessController {
    pub fn new(access_service: Arc<AccessService>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            access_service,
            user_repo,
        }
    }

    /// GET /api/users/:userId/features/:feature - Check a single capability
    pub async fn check_feature(
        State(controller): State<Arc<AccessController>>,
        Path((user_id, feature)): Path<(Uuid, String)>,
    ) -> AppResult<Json<FeatureVerdict>> {
        let feature: Feature = feature.parse()?;
        let tier = controller.resolve_tier(user_id).await?;

        let verdict = controller
            .access_service
            .check_feature(user_id, tier, feature)
            .await;
        Ok(Json(verdict))
    }

    /// POST /api/users/:userId/features/check - Check several capabilities
    pub async fn check_features(
        State(controller): State<Arc<AccessController>>,
        Path(user_id): Path<Uuid>,
        Json(request): Json<CheckFeaturesRequest>,
    ) -> AppResult<Json<Value>> {
        if request.features.is_empty() {
            return Err(AppError::BadRequest("features list is empty".to_string()));
        }
        let features = request
            .features
            .iter()
            .map(|f| f.parse::<Feature>())
            .collect::<Result<Vec<_>, _>>()?;
        let tier = controller.resolve_tier(user_id).await?;

        let verdicts = controller
            .access_service
            .check_features(user_id, tier, &features)
            .await;

        let mut body = Map::new();
        for (feature, verdict) in verdicts {
            body.insert(
                feature.to_string(),
                serde_json::to_value(verdict)
                    .map_err(|e| AppError::Internal(e.to_string()))?,
            );
        }
        Ok(Json(Value::Object(body)))
    }
}

impl AccessController {
    async fn resolve_tier(&self, user_id: Uuid) -> AppResult<SubscriptionTier> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(user.subscription_tier)
    }
}
