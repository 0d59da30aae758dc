use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::repositories::{AssetRepository, PortfolioRepository};
use crate::entity::assets::Model as Asset;
use crate::entity::portfolio_items::Model as PortfolioItem;
use crate::error::{ApiError, ApiResult};

/// Service for portfolio ledger business logic
pub struct PortfolioService {
    portfolio: PortfolioRepository,
    assets: AssetRepository,
}

impl PortfolioService {
    /// Create a new portfolio service instance
    pub fn new(portfolio: PortfolioRepository, assets: AssetRepository) -> Self {
        Self { portfolio, assets }
    }

    /// List all holdings with their assets, most recently updated first
    pub async fn list(&self) -> ApiResult<Vec<(PortfolioItem, Asset)>> {
        let items = self.portfolio.find_all_with_assets().await?;

        Ok(items
            .into_iter()
            .filter_map(|(item, asset)| asset.map(|asset| (item, asset)))
            .collect())
    }

    /// Create a holding for an asset. At most one holding per asset; the
    /// unique index backs this check up at the storage layer.
    pub async fn create(
        &self,
        asset_id: &str,
        quantity: Decimal,
        avg_price: Decimal,
    ) -> ApiResult<(PortfolioItem, Asset)> {
        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        if self.portfolio.find_by_asset_id(&asset.id).await?.is_some() {
            return Err(ApiError::Conflict(
                "Portfolio item already exists for asset".to_string(),
            ));
        }

        let item = self.portfolio.insert(&asset.id, quantity, avg_price).await?;
        Ok((item, asset))
    }

    /// Get holding by ID with its asset
    pub async fn get(&self, id: Uuid) -> ApiResult<(PortfolioItem, Asset)> {
        let item = self
            .portfolio
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Portfolio item not found".to_string()))?;

        let asset = self
            .assets
            .find_by_id(&item.asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        Ok((item, asset))
    }

    /// Partial update of a holding. Absent fields keep their previous value;
    /// when neither field is supplied the row and its updated_at stay as-is.
    pub async fn update(
        &self,
        id: Uuid,
        quantity: Option<Decimal>,
        avg_price: Option<Decimal>,
    ) -> ApiResult<(PortfolioItem, Asset)> {
        let item = self
            .portfolio
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Portfolio item not found".to_string()))?;

        let item = if quantity.is_some() || avg_price.is_some() {
            self.portfolio
                .update_fields(item, quantity, avg_price)
                .await?
        } else {
            item
        };

        let asset = self
            .assets
            .find_by_id(&item.asset_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Asset not found".to_string()))?;

        Ok((item, asset))
    }

    /// Delete holding by ID
    pub async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let deleted = self.portfolio.delete_by_id(id).await?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Portfolio item not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::assets::{self, AssetStatus};
    use crate::entity::portfolio_items;
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

    fn sample_item(asset_id: &str, quantity: Decimal, avg_price: Decimal) -> portfolio_items::Model {
        portfolio_items::Model {
            id: Uuid::new_v4(),
            asset_id: asset_id.to_string(),
            quantity,
            avg_price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(db: sea_orm::DatabaseConnection) -> PortfolioService {
        let db = std::sync::Arc::new(db);
        PortfolioService::new(
            PortfolioRepository::new(db.clone()),
            AssetRepository::new(db),
        )
    }

    #[tokio::test]
    async fn create_signals_conflict_for_existing_holding() {
        let existing = sample_item("bitcoin", Decimal::ONE, Decimal::new(400005, 1));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_asset("bitcoin")]])
            .append_query_results([vec![existing]])
            .into_connection();

        let err = service(db)
            .create("bitcoin", Decimal::ONE, Decimal::ONE)
            .await
            .unwrap_err();
        match err {
            ApiError::Conflict(msg) => assert!(msg.contains("already exists")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_signals_not_found_for_unknown_asset() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<assets::Model>::new()])
            .into_connection();

        let err = service(db)
            .create("nope", Decimal::ONE, Decimal::ONE)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_without_fields_leaves_row_untouched() {
        let item = sample_item("bitcoin", Decimal::new(15, 1), Decimal::new(400005, 1));
        // Only the lookup queries are mocked: an UPDATE would exhaust the
        // mock and fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![item.clone()]])
            .append_query_results([vec![sample_asset("bitcoin")]])
            .into_connection();

        let (result, _) = service(db).update(item.id, None, None).await.unwrap();
        assert_eq!(result.quantity, item.quantity);
        assert_eq!(result.avg_price, item.avg_price);
        assert_eq!(result.updated_at, item.updated_at);
    }

    #[tokio::test]
    async fn update_with_quantity_only_keeps_avg_price() {
        let item = sample_item("bitcoin", Decimal::ONE, Decimal::new(400005, 1));
        let mut updated = item.clone();
        updated.quantity = Decimal::TWO;
        updated.updated_at = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![item.clone()]])
            .append_query_results([vec![updated]])
            .append_query_results([vec![sample_asset("bitcoin")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let (result, _) = service(db)
            .update(item.id, Some(Decimal::TWO), None)
            .await
            .unwrap();
        assert_eq!(result.quantity, Decimal::TWO);
        assert_eq!(result.avg_price, item.avg_price);
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
}
