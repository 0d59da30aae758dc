// Handlers Module
// This module contains the API endpoint handlers

pub mod assets;
pub mod favorites;
pub mod health;
pub mod portfolio;

pub use assets::{get_asset, list_assets};
pub use favorites::{
    create_favorite, delete_favorite, get_favorite, list_favorites, update_favorite,
};
pub use health::health_check;
pub use portfolio::{
    create_portfolio_item, delete_portfolio_item, get_portfolio_item, list_portfolio,
    update_portfolio_item,
};

use std::sync::Arc;

use crate::db::Repositories;

// Type alias for the application state
pub type AppState = Arc<Repositories>;
