pub mod cart;
pub mod storefront;

pub use crate::domain::model::{Cart, CartLineItem, Product, ProductId};
pub use crate::domain::ports::{CatalogProvider, ConfigProvider};
pub use crate::utils::error::Result;
