use crate::db::repositories::AssetRepository;
use crate::entity::assets::Model as Asset;
use crate::error::{ApiError, ApiResult};

/// Service for asset catalog business logic
pub struct AssetService {
    assets: AssetRepository,
}

impl AssetService {
    /// Create a new asset service instance
    pub fn new(assets: AssetRepository) -> Self {
        Self { assets }
    }

    /// Get a catalog page plus the total row count for the same filter.
    /// An empty search string means no filter.
    pub async fn list(
        &self,
        search: &str,
        limit: u64,
        offset: u64,
    ) -> ApiResult<(Vec<Asset>, u64)> {
        let search = (!search.is_empty()).then_some(search);

        let assets = self.assets.find_paginated(search, limit, offset).await?;
        let total = self.assets.count(search).await?;

        Ok((assets, total))
    }

    /// Get asset by ID
    pub async fn get(&self, id: &str) -> ApiResult<Asset> {
        self.assets
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::assets::{self, AssetStatus};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_asset(id: &str) -> assets::Model {
        assets::Model {
            id: id.to_string(),
            symbol: id[..3.min(id.len())].to_string(),
            name: id.to_string(),
            image: String::new(),
            status: AssetStatus::Active,
            current_price: None,
            price_change_percentage_24h: None,
            market_cap_rank: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn get_returns_asset_when_present() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_asset("bitcoin")]])
            .into_connection();

        let service = AssetService::new(AssetRepository::new(std::sync::Arc::new(db)));
        let asset = service.get("bitcoin").await.unwrap();
        assert_eq!(asset.id, "bitcoin");
    }

    #[tokio::test]
    async fn get_signals_not_found_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let service = AssetService::new(AssetRepository::new(std::sync::Arc::new(db)));
        let err = service.get("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
