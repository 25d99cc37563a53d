use crate::domain::search::{SearchFilters, SearchableProfile};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use std::sync::Arc;

/// Candidate retrieval for marketplace search. The ORDER BY in these queries
/// is a retrieval convenience only; final ordering happens in the ranking
/// layer.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a page of profiles matching the query and filters, ordered by
    /// last update descending.
    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<SearchableProfile>>;

    /// Total number of profiles matching the same predicates.
    async fn count(&self, query: &str, filters: &SearchFilters) -> AppResult<i64>;

    /// Featured-tier profiles, most recently updated first.
    async fn find_featured(&self, limit: i64) -> AppResult<Vec<SearchableProfile>>;
}

pub struct PgProfileStore {
    pool: Arc<DbPool>,
}

impl PgProfileStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    fn push_predicates(
        builder: &mut QueryBuilder<'_, Postgres>,
        query: &str,
        filters: &SearchFilters,
    ) {
        let query = query.trim();
        if !query.is_empty() {
            let pattern = format!("%{}%", query);
            builder
                .push(" AND (display_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR bio ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR EXISTS (SELECT 1 FROM unnest(specialties) AS s WHERE s ILIKE ")
                .push_bind(pattern)
                .push("))");
        }
        if let Some(specialties) = &filters.specialties {
            builder
                .push(" AND specialties && ")
                .push_bind(specialties.clone());
        }
        if let Some(location) = &filters.location {
            builder
                .push(" AND location ILIKE ")
                .push_bind(format!("%{}%", location));
        }
        if let Some(min_rate) = filters.min_rate {
            builder.push(" AND hourly_rate >= ").push_bind(min_rate);
        }
        if let Some(max_rate) = filters.max_rate {
            builder.push(" AND hourly_rate <= ").push_bind(max_rate);
        }
        if let Some(availability) = filters.availability {
            builder.push(" AND availability = ").push_bind(availability);
        }
        if let Some(min_experience) = filters.min_experience {
            builder
                .push(" AND years_experience >= ")
                .push_bind(min_experience);
        }
    }
}

const PROFILE_COLUMNS: &str = "id, display_name, bio, location, specialties, hourly_rate, \
     years_experience, profile_views, response_rate, availability, tier, updated_at";

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<SearchableProfile>> {
        let pool = self.pool.as_ref();
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM editor_profiles WHERE searchable = TRUE",
            PROFILE_COLUMNS
        ));
        Self::push_predicates(&mut builder, query, filters);
        builder
            .push(" ORDER BY updated_at DESC LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let profiles = builder
            .build_query_as::<SearchableProfile>()
            .fetch_all(pool)
            .await?;

        Ok(profiles)
    }

    async fn count(&self, query: &str, filters: &SearchFilters) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let mut builder =
            QueryBuilder::new("SELECT COUNT(*) FROM editor_profiles WHERE searchable = TRUE");
        Self::push_predicates(&mut builder, query, filters);

        let total: i64 = builder.build_query_scalar().fetch_one(pool).await?;

        Ok(total)
    }

    async fn find_featured(&self, limit: i64) -> AppResult<Vec<SearchableProfile>> {
        let pool = self.pool.as_ref();
        let profiles = sqlx::query_as::<_, SearchableProfile>(&format!(
            r#"
            SELECT {}
            FROM editor_profiles
            WHERE searchable = TRUE AND tier = 'featured'
            ORDER BY updated_at DESC
            LIMIT $1
            "#,
            PROFILE_COLUMNS
        ))
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(profiles)
    }
}
