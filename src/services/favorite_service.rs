use uuid::Uuid;

use crate::db::repositories::{AssetRepository, FavoriteRepository};
use crate::entity::assets::Model as Asset;
use crate::entity::favorites::Model as Favorite;
use crate::error::{ApiError, ApiResult};

/// Service for favorites business logic.
///
/// One favorite per asset is enforced here rather than by a uniqueness
/// constraint: two concurrent creates for a never-yet-favorited asset can
/// both pass the existence check. Accepted trade-off.
pub struct FavoriteService {
    favorites: FavoriteRepository,
    assets: AssetRepository,
}

impl FavoriteService {
    /// Create a new favorite service instance
    pub fn new(favorites: FavoriteRepository, assets: AssetRepository) -> Self {
        Self { favorites, assets }
    }

    /// List all favorites with their assets, most recently favorited first
    pub async fn list(&self) -> ApiResult<Vec<(Favorite, Asset)>> {
        let favorites = self.favorites.find_all_with_assets().await?;

        // The FK guarantees every favorite resolves to an asset
        Ok(favorites
            .into_iter()
            .filter_map(|(favorite, asset)| asset.map(|asset| (favorite, asset)))
            .collect())
    }

    /// Create a favorite for an asset. Idempotent: if a favorite already
    /// references the asset, that row is returned unchanged.
    pub async fn create(&self, asset_id: &str) -> ApiResult<(Favorite, Asset)> {
        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        if let Some(existing) = self.favorites.find_by_asset_id(&asset.id).await? {
            return Ok((existing, asset));
        }

        let favorite = self.favorites.insert(&asset.id).await?;
        Ok((favorite, asset))
    }

    /// Get favorite by ID with its asset
    pub async fn get(&self, id: Uuid) -> ApiResult<(Favorite, Asset)> {
        let favorite = self
            .favorites
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Favorite not found".to_string()))?;

        let asset = self
            .assets
            .find_by_id(&favorite.asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        Ok((favorite, asset))
    }

    /// Repoint an existing favorite to a different asset
    pub async fn update(&self, id: Uuid, asset_id: &str) -> ApiResult<(Favorite, Asset)> {
        let favorite = self
            .favorites
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Favorite not found".to_string()))?;

        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        if self
            .favorites
            .find_by_asset_id_excluding(&asset.id, favorite.id)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict(
                "Favorite already exists for asset".to_string(),
            ));
        }

        let favorite = self.favorites.update_asset(favorite, &asset.id).await?;
        Ok((favorite, asset))
    }

    /// Delete favorite by ID
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let deleted = self.favorites.delete_by_id(id).await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Favorite not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::assets::{self, AssetStatus};
    use crate::entity::favorites;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

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

    fn sample_favorite(asset_id: &str) -> favorites::Model {
        favorites::Model {
            id: Uuid::new_v4(),
            asset_id: asset_id.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(db: sea_orm::DatabaseConnection) -> FavoriteService {
        let db = std::sync::Arc::new(db);
        FavoriteService::new(
            FavoriteRepository::new(db.clone()),
            AssetRepository::new(db),
        )
    }

    #[tokio::test]
    async fn create_returns_existing_favorite_unchanged() {
        let existing = sample_favorite("bitcoin");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_asset("bitcoin")]])
            .append_query_results([vec![existing.clone()]])
            .into_connection();

        let (favorite, asset) = service(db).create("bitcoin").await.unwrap();
        assert_eq!(favorite.id, existing.id);
        assert_eq!(asset.id, "bitcoin");
    }

    #[tokio::test]
    async fn create_inserts_when_asset_has_no_favorite() {
        let inserted = sample_favorite("ethereum");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_asset("ethereum")]])
            .append_query_results([Vec::<favorites::Model>::new()])
            .append_query_results([vec![inserted.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let (favorite, _) = service(db).create("ethereum").await.unwrap();
        assert_eq!(favorite.id, inserted.id);
    }

    #[tokio::test]
    async fn create_signals_not_found_for_unknown_asset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let err = service(db).create("nope").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_signals_conflict_when_another_favorite_holds_asset() {
        let favorite = sample_favorite("bitcoin");
        let other = sample_favorite("ethereum");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![favorite.clone()]])
            .append_query_results([vec![sample_asset("ethereum")]])
            .append_query_results([vec![other]])
            .into_connection();

        let err = service(db).update(favorite.id, "ethereum").await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_signals_not_found_when_nothing_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let err = service(db).delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_succeeds_when_row_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        assert!(service(db).delete(Uuid::new_v4()).await.is_ok());
    }
}
