//! Prelude module for convenient imports

pub use super::assets::Entity as Assets;
pub use super::favorites::Entity as Favorites;
pub use super::portfolio_items::Entity as PortfolioItems;
