//! Entity module for database models

pub mod assets;
pub mod favorites;
pub mod portfolio_items;
pub mod prelude;
