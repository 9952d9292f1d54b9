use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A catalog entry as returned by the product source. Extra fields sent by
/// the source are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// A product in the cart together with how many units were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u64,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self { product, amount: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

/// Ordered line items, unique by product id, in first-added order.
///
/// Only `core::cart` builds non-empty carts, which keeps every amount at
/// least 1 and every id unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    pub(crate) items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Units of `id` in the cart, 0 when absent.
    pub fn amount_of(&self, id: ProductId) -> u64 {
        self.get(id).map(|item| item.amount).unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLineItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_ignores_unknown_fields() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL.jpg",
            "rating": {"rate": 3.9, "count": 120}
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
    }

    #[test]
    fn test_line_item_serializes_flat() {
        let item = CartLineItem {
            product: Product {
                id: 7,
                title: "Ring".to_string(),
                price: 9.99,
                category: "jewelery".to_string(),
                description: "Gold".to_string(),
                image: "ring.png".to_string(),
            },
            amount: 3,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Ring");
        assert_eq!(value["amount"], 3);
        assert!(value.get("product").is_none());
    }

    #[test]
    fn test_empty_cart_lookups() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.get(1).is_none());
        assert_eq!(cart.amount_of(1), 0);
        assert_eq!(serde_json::to_string(&cart).unwrap(), "[]");
    }
}
