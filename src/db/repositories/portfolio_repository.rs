use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::entity::portfolio_items::{ActiveModel, Column, Entity as PortfolioItem, Model};
use crate::entity::{assets, prelude::Assets};

/// Repository for portfolio holdings database operations
#[derive(Clone)]
pub struct PortfolioRepository {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepository {
    /// Create a new portfolio repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find all holdings with their assets, most recently updated first
    pub async fn find_all_with_assets(&self) -> Result<Vec<(Model, Option<assets::Model>)>, DbErr> {
        PortfolioItem::find()
            .find_also_related(Assets)
            .order_by_desc(Column::UpdatedAt)
            .all(self.db.as_ref())
            .await
    }

    /// Find holding by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbErr> {
        PortfolioItem::find_by_id(id).one(self.db.as_ref()).await
    }

    /// Find the holding for an asset, if any
    pub async fn find_by_asset_id(&self, asset_id: &str) -> Result<Option<Model>, DbErr> {
        PortfolioItem::find()
            .filter(Column::AssetId.eq(asset_id))
            .one(self.db.as_ref())
            .await
    }

    /// Insert a new holding for an asset
    pub async fn insert(
        &self,
        asset_id: &str,
        quantity: Decimal,
        avg_price: Decimal,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let item = ActiveModel {
            id: Set(Uuid::new_v4()),
            asset_id: Set(asset_id.to_string()),
            quantity: Set(quantity),
            avg_price: Set(avg_price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        item.insert(self.db.as_ref()).await
    }

    /// Apply the supplied field changes to a holding, advancing updated_at.
    /// Callers are expected to skip this entirely when nothing changed.
    pub async fn update_fields(
        &self,
        item: Model,
        quantity: Option<Decimal>,
        avg_price: Option<Decimal>,
    ) -> Result<Model, DbErr> {
        let mut item: ActiveModel = item.into();
        if let Some(quantity) = quantity {
            item.quantity = Set(quantity);
        }
        if let Some(avg_price) = avg_price {
            item.avg_price = Set(avg_price);
        }
        item.updated_at = Set(Utc::now());

        item.update(self.db.as_ref()).await
    }

    /// Delete holding by ID, returning the number of rows removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = PortfolioItem::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
