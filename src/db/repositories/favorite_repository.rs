use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::entity::favorites::{ActiveModel, Column, Entity as Favorite, Model};
use crate::entity::{assets, prelude::Assets};

/// Repository for favorites database operations
#[derive(Clone)]
pub struct FavoriteRepository {
    db: Arc<DatabaseConnection>,
}

impl FavoriteRepository {
    /// Create a new favorite repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find all favorites with their assets, most recently favorited first
    pub async fn find_all_with_assets(&self) -> Result<Vec<(Model, Option<assets::Model>)>, DbErr> {
        Favorite::find()
            .find_also_related(Assets)
            .order_by_desc(Column::CreatedAt)
            .all(self.db.as_ref())
            .await
    }

    /// Find favorite by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Model>, DbErr> {
        Favorite::find_by_id(id).one(self.db.as_ref()).await
    }

    /// Find the favorite referencing an asset, if any
    pub async fn find_by_asset_id(&self, asset_id: &str) -> Result<Option<Model>, DbErr> {
        Favorite::find()
            .filter(Column::AssetId.eq(asset_id))
            .one(self.db.as_ref())
            .await
    }

    /// Find a favorite referencing an asset, excluding the given favorite
    pub async fn find_by_asset_id_excluding(
        &self,
        asset_id: &str,
        exclude_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Favorite::find()
            .filter(Column::AssetId.eq(asset_id))
            .filter(Column::Id.ne(exclude_id))
            .one(self.db.as_ref())
            .await
    }

    /// Insert a new favorite for an asset
    pub async fn insert(&self, asset_id: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        let favorite = ActiveModel {
            id: Set(Uuid::new_v4()),
            asset_id: Set(asset_id.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        favorite.insert(self.db.as_ref()).await
    }

    /// Repoint an existing favorite at a different asset, advancing updated_at
    pub async fn update_asset(&self, favorite: Model, asset_id: &str) -> Result<Model, DbErr> {
        let mut favorite: ActiveModel = favorite.into();
        favorite.asset_id = Set(asset_id.to_string());
        favorite.updated_at = Set(Utc::now());

        favorite.update(self.db.as_ref()).await
    }

    /// Delete favorite by ID, returning the number of rows removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = Favorite::delete_by_id(id).exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
