use crate::core::cart;
use crate::domain::model::{Cart, Product, ProductId};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::{Result, ShopError};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    NotStarted,
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

/// View state of one shopping session: the catalog, the cart and the cart
/// panel. Every cart change replaces the cart value.
pub struct Storefront<P: CatalogProvider> {
    provider: P,
    catalog: CatalogState,
    cart: Cart,
    cart_open: bool,
}

impl<P: CatalogProvider> Storefront<P> {
    /// Starts a session with an empty cart, a closed panel and no catalog.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            catalog: CatalogState::NotStarted,
            cart: Cart::new(),
            cart_open: false,
        }
    }

    /// Fetches the catalog once and records the outcome. Calling it again
    /// reloads; the cart is left alone either way.
    pub async fn load_catalog(&mut self) -> Result<usize> {
        self.catalog = CatalogState::Loading;
        tracing::debug!("Loading catalog");

        match self.provider.fetch_products().await {
            Ok(products) => {
                let count = products.len();
                tracing::info!("Loaded {} products", count);
                self.catalog = CatalogState::Loaded(products);
                Ok(count)
            }
            Err(e) => {
                let reason = match &e {
                    ShopError::CatalogFetchFailed { reason } => reason.clone(),
                    other => other.to_string(),
                };
                tracing::warn!("Catalog load failed: {}", reason);
                self.catalog = CatalogState::Failed(reason.clone());
                Err(ShopError::CatalogFetchFailed { reason })
            }
        }
    }

    /// Current load state of the catalog.
    pub fn catalog_state(&self) -> &CatalogState {
        &self.catalog
    }

    /// True while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self.catalog, CatalogState::Loading)
    }

    /// Reason of the last failed load.
    pub fn load_error(&self) -> Option<&str> {
        match &self.catalog {
            CatalogState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Loaded products, empty unless the catalog is loaded.
    pub fn products(&self) -> &[Product] {
        match &self.catalog {
            CatalogState::Loaded(products) => products.as_slice(),
            _ => &[],
        }
    }

    /// Looks `id` up in the loaded catalog.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Product that another unit of `id` can be added from: the catalog
    /// entry, or the cart's own copy when the catalog is not loaded.
    pub fn addable_product(&self, id: ProductId) -> Option<&Product> {
        self.product(id)
            .or_else(|| self.cart.get(id).map(|item| &item.product))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Puts one more unit of `product` in the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.cart = cart::add(&self.cart, product);
        tracing::debug!(
            "Added product {} (now {} in cart)",
            product.id,
            self.cart.amount_of(product.id)
        );
    }

    /// Takes one unit of `id` out of the cart; no-op when absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = cart::remove(&self.cart, id);
        tracing::debug!("Removed one of product {} (now {} in cart)", id, self.cart.amount_of(id));
    }

    /// Total units in the cart.
    pub fn badge_count(&self) -> u64 {
        cart::total_item_count(&self.cart)
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }
}
