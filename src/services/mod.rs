// Services Module
// Business logic between HTTP handlers and repositories

pub mod asset_service;
pub mod favorite_service;
pub mod portfolio_service;

pub use asset_service::AssetService;
pub use favorite_service::FavoriteService;
pub use portfolio_service::PortfolioService;
