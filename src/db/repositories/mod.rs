// Database repository management

mod asset_repository;
mod favorite_repository;
mod portfolio_repository;

pub use asset_repository::AssetRepository;
pub use favorite_repository::FavoriteRepository;
pub use portfolio_repository::PortfolioRepository;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Container for all database repositories
pub struct Repositories {
    pub assets: AssetRepository,
    pub favorites: FavoriteRepository,
    pub portfolio: PortfolioRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Repositories {
            assets: AssetRepository::new(conn.clone()),
            favorites: FavoriteRepository::new(conn.clone()),
            portfolio: PortfolioRepository::new(conn),
        }
    }
}
