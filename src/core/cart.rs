use crate::domain::model::{Cart, CartLineItem, Product, ProductId};

/// Returns a cart with one more unit of `product`.
///
/// An existing line item for the same id has its amount bumped in place;
/// otherwise a new line item with amount 1 is appended. The descriptive
/// fields of an existing line item are never refreshed from `product`.
pub fn add(cart: &Cart, product: &Product) -> Cart {
    if cart.get(product.id).is_some() {
        let items = cart
            .items
            .iter()
            .map(|item| {
                if item.id() == product.id {
                    CartLineItem {
                        amount: item.amount + 1,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        return Cart { items };
    }

    let mut items = Vec::with_capacity(cart.items.len() + 1);
    items.extend(cart.items.iter().cloned());
    items.push(CartLineItem::new(product.clone()));
    Cart { items }
}

/// Returns a cart with one unit of `id` taken out.
///
/// A line item at amount 1 is dropped. An absent id is a no-op.
pub fn remove(cart: &Cart, id: ProductId) -> Cart {
    let items = cart
        .items
        .iter()
        .filter_map(|item| {
            if item.id() != id {
                return Some(item.clone());
            }
            if item.amount <= 1 {
                None
            } else {
                Some(CartLineItem {
                    amount: item.amount - 1,
                    ..item.clone()
                })
            }
        })
        .collect();
    Cart { items }
}

/// Badge count: the sum of all amounts.
pub fn total_item_count(cart: &Cart) -> u64 {
    cart.items.iter().map(|item| item.amount).sum()
}

/// Unit price times amount.
pub fn line_total(item: &CartLineItem) -> f64 {
    item.product.price * item.amount as f64
}

/// Sum of line totals, 0.0 for an empty cart.
pub fn total_price(cart: &Cart) -> f64 {
    cart.items.iter().map(line_total).sum()
}

impl Cart {
    pub fn with_added(&self, product: &Product) -> Cart {
        add(self, product)
    }

    pub fn without_one(&self, id: ProductId) -> Cart {
        remove(self, id)
    }

    pub fn total_item_count(&self) -> u64 {
        total_item_count(self)
    }

    pub fn total_price(&self) -> f64 {
        total_price(self)
    }
}
