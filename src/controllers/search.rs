use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::search::{
    AvailabilityStatus, SearchFilters, SearchResponse, SearchService, SearchableProfile,
};
use crate::domain::tier::SubscriptionTier;
use crate::error::AppResult;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;
const DEFAULT_SPOTLIGHT_COUNT: i64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    /// Comma-separated specialty list.
    pub specialties: Option<String>,
    pub location: Option<String>,
    pub min_rate: Option<Decimal>,
    pub max_rate: Option<Decimal>,
    pub availability: Option<String>,
    pub min_experience: Option<i32>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SpotlightParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsParams {
    pub tier: Option<String>,
}

pub struct SearchController {
    search_service: Arc<SearchService>,
}

impl SearchController {
    pub fn new(search_service: Arc<SearchService>) -> Self {
        Self { search_service }
    }

    /// GET /api/search - Ranked editor search
    pub async fn search(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<SearchResponse>> {
        let availability = params
            .availability
            .as_deref()
            .map(|s| s.parse::<AvailabilityStatus>())
            .transpose()?;
        let specialties = params.specialties.as_deref().map(|csv| {
            csv.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        });

        let filters = SearchFilters {
            specialties,
            location: params.location,
            min_rate: params.min_rate,
            max_rate: params.max_rate,
            availability,
            min_experience: params.min_experience,
        };
        let query = params.q.unwrap_or_default();
        let limit = params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = params.offset.unwrap_or(0).max(0);

        let response = controller
            .search_service
            .search(&query, &filters, limit, offset)
            .await;
        Ok(Json(response))
    }

    /// GET /api/search/spotlight - Featured-tier promotional listing
    pub async fn spotlight(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SpotlightParams>,
    ) -> Json<Vec<SearchableProfile>> {
        let limit = params
            .limit
            .unwrap_or(DEFAULT_SPOTLIGHT_COUNT)
            .clamp(1, MAX_PAGE_SIZE);
        Json(controller.search_service.featured_spotlight(limit).await)
    }

    /// GET /api/search/suggestions - Query-box suggestions for a tier
    pub async fn suggestions(
        State(controller): State<Arc<SearchController>>,
        Query(params): Query<SuggestionsParams>,
    ) -> AppResult<Json<Vec<String>>> {
        let tier = match params.tier.as_deref() {
            Some(raw) => raw.parse::<SubscriptionTier>()?,
            None => SubscriptionTier::Free,
        };
        Ok(Json(controller.search_service.suggestions(tier)))
    }
}
