use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::entity::assets::{ActiveModel, Column, Entity as Asset, Model};

/// Escape LIKE wildcards so user input is matched literally
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Builds the case-insensitive substring filter over symbol, name and id
fn search_condition(search: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(search));
    Condition::any()
        .add(Expr::col(Column::Symbol).ilike(pattern.clone()))
        .add(Expr::col(Column::Name).ilike(pattern.clone()))
        .add(Expr::col(Column::Id).ilike(pattern))
}

/// Repository for asset catalog database operations
#[derive(Clone)]
pub struct AssetRepository {
    db: Arc<DatabaseConnection>,
}

impl AssetRepository {
    /// Create a new asset repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find assets with pagination and optional substring search.
    /// Ordered by market_cap_rank ascending (nulls last), then symbol.
    pub async fn find_paginated(
        &self,
        search: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Asset::find();

        if let Some(search) = search {
            query = query.filter(search_condition(search));
        }

        query
            .order_by_asc(Column::MarketCapRank)
            .order_by_asc(Column::Symbol)
            .limit(limit)
            .offset(offset)
            .all(self.db.as_ref())
            .await
    }

    /// Count assets matching the optional substring search
    pub async fn count(&self, search: Option<&str>) -> Result<u64, DbErr> {
        let mut query = Asset::find();

        if let Some(search) = search {
            query = query.filter(search_condition(search));
        }

        query.count(self.db.as_ref()).await
    }

    /// Find asset by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DbErr> {
        Asset::find_by_id(id.to_string()).one(self.db.as_ref()).await
    }

    /// Count all catalog rows (used by the first-run seeder)
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        Asset::find().count(self.db.as_ref()).await
    }

    /// Bulk insert catalog rows (used by the first-run seeder)
    pub async fn insert_many(&self, models: Vec<ActiveModel>) -> Result<(), DbErr> {
        Asset::insert_many(models).exec(self.db.as_ref()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    #[test]
    fn escape_like_passes_plain_input_through() {
        assert_eq!(escape_like("bitcoin"), "bitcoin");
    }

    #[test]
    fn search_filters_symbol_name_and_id_case_insensitively() {
        let sql = Asset::find()
            .filter(search_condition("btc"))
            .build(DatabaseBackend::Postgres)
            .to_string();

        assert_eq!(sql.matches("ILIKE").count(), 3);
        assert!(sql.contains("%btc%"));
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
