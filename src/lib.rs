pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::catalog::HttpCatalog;
pub use config::toml_config::TomlConfig;
pub use core::cart::{add, remove, total_item_count, total_price};
pub use core::storefront::{CatalogState, Storefront};
pub use domain::model::{Cart, CartLineItem, Product, ProductId};
pub use domain::ports::{CatalogProvider, ConfigProvider};
pub use utils::error::{Result, ShopError};
