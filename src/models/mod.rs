// API request/response models

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::assets::{self, AssetStatus};
use crate::entity::{favorites, portfolio_items};

/// Query parameters for GET /assets
#[derive(Debug, Deserialize, Default)]
pub struct ListAssetsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default)]
    pub search: String,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    20
}

/// Asset shape shared by catalog, favorites and portfolio responses
#[derive(Debug, Serialize)]
pub struct AssetOut {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub status: AssetStatus,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_rank: Option<i32>,
}

impl From<assets::Model> for AssetOut {
    fn from(asset: assets::Model) -> Self {
        AssetOut {
            id: asset.id,
            symbol: asset.symbol,
            name: asset.name,
            image: asset.image,
            status: asset.status,
            current_price: asset.current_price.and_then(|d| d.to_f64()),
            price_change_percentage_24h: asset
                .price_change_percentage_24h
                .and_then(|d| d.to_f64()),
            market_cap_rank: asset.market_cap_rank,
        }
    }
}

/// Page envelope for GET /assets
#[derive(Debug, Serialize)]
pub struct AssetListOut {
    pub data: Vec<AssetOut>,
    pub page: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    pub total: u64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

/// Request body for POST /favorites and PUT /favorites/{id}
#[derive(Debug, Deserialize)]
pub struct FavoriteIn {
    pub asset_id: String,
}

/// Favorite with its resolved asset embedded
#[derive(Debug, Serialize)]
pub struct FavoriteOut {
    pub id: Uuid,
    pub asset: AssetOut,
}

impl FavoriteOut {
    pub fn from_parts(favorite: favorites::Model, asset: assets::Model) -> Self {
        FavoriteOut {
            id: favorite.id,
            asset: asset.into(),
        }
    }
}

/// Request body for POST /portfolio
#[derive(Debug, Deserialize)]
pub struct PortfolioItemCreateIn {
    pub asset_id: String,
    pub quantity: f64,
    pub avg_price: f64,
}

/// Request body for PUT /portfolio/{id}; absent fields stay unchanged
#[derive(Debug, Deserialize, Default)]
pub struct PortfolioItemUpdateIn {
    pub quantity: Option<f64>,
    pub avg_price: Option<f64>,
}

/// Holding with its resolved asset embedded
#[derive(Debug, Serialize)]
pub struct PortfolioItemOut {
    pub id: Uuid,
    pub asset: AssetOut,
    pub quantity: f64,
    pub avg_price: f64,
}

impl PortfolioItemOut {
    pub fn from_parts(item: portfolio_items::Model, asset: assets::Model) -> Self {
        PortfolioItemOut {
            id: item.id,
            asset: asset.into(),
            quantity: item.quantity.to_f64().unwrap_or(0.0),
            avg_price: item.avg_price.to_f64().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_asset() -> assets::Model {
        assets::Model {
            id: "bitcoin".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            image: String::new(),
            status: AssetStatus::Active,
            current_price: None,
            price_change_percentage_24h: None,
            market_cap_rank: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn asset_out_serializes_nullable_fields_as_null() {
        let out: AssetOut = sample_asset().into();
        let value = serde_json::to_value(&out).unwrap();

        assert_eq!(value["id"], "bitcoin");
        assert_eq!(value["status"], "active");
        assert!(value["current_price"].is_null());
        assert!(value["price_change_percentage_24h"].is_null());
        assert!(value["market_cap_rank"].is_null());
    }

    #[test]
    fn asset_out_serializes_decimals_as_numbers() {
        let mut asset = sample_asset();
        asset.current_price = Some(rust_decimal::Decimal::new(432505, 1));
        asset.market_cap_rank = Some(1);

        let value = serde_json::to_value(AssetOut::from(asset)).unwrap();
        assert_eq!(value["current_price"], serde_json::json!(43250.5));
        assert_eq!(value["market_cap_rank"], 1);
    }

    #[test]
    fn list_assets_query_defaults() {
        let query: ListAssetsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 20);
        assert!(query.search.is_empty());
    }
}
