use crate::core::cart::{line_total, total_price};
use crate::core::storefront::{CatalogState, Storefront};
use crate::core::{Cart, CatalogProvider, Product};

/// Product grid, or the loading/error line for the other states.
pub fn render_catalog(state: &CatalogState) -> String {
    match state {
        CatalogState::NotStarted => "Catalog not loaded yet. Type 'reload'.".to_string(),
        CatalogState::Loading => "Loading products...".to_string(),
        CatalogState::Failed(reason) => format!("Failed to load products: {}", reason),
        CatalogState::Loaded(products) if products.is_empty() => {
            "No products available.".to_string()
        }
        CatalogState::Loaded(products) => products
            .iter()
            .map(render_product)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_product(product: &Product) -> String {
    format!(
        "[{:>3}] {} ({}) ${:.2}",
        product.id, product.title, product.category, product.price
    )
}

/// Cart panel: one row per line item and a total.
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines: Vec<String> = cart
        .iter()
        .map(|item| {
            format!(
                "[{:>3}] {} x{} @ ${:.2} = ${:.2}",
                item.id(),
                item.product.title,
                item.amount,
                item.product.price,
                line_total(item)
            )
        })
        .collect();
    lines.push(format!("Total: ${:.2}", total_price(cart)));
    lines.join("\n")
}

pub fn render_badge<P: CatalogProvider>(shop: &Storefront<P>) -> String {
    let panel = if shop.is_cart_open() { "open" } else { "closed" };
    format!("Cart ({}) [{}]", shop.badge_count(), panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cart::add;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: "jewelery".to_string(),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_render_catalog_states() {
        assert_eq!(render_catalog(&CatalogState::Loading), "Loading products...");
        assert_eq!(
            render_catalog(&CatalogState::Failed("HTTP 500".to_string())),
            "Failed to load products: HTTP 500"
        );
        assert_eq!(
            render_catalog(&CatalogState::Loaded(vec![])),
            "No products available."
        );

        let rendered = render_catalog(&CatalogState::Loaded(vec![
            product(1, "Ring", 9.5),
            product(12, "Bracelet", 168.0),
        ]));
        assert_eq!(
            rendered,
            "[  1] Ring (jewelery) $9.50\n[ 12] Bracelet (jewelery) $168.00"
        );
    }

    #[test]
    fn test_render_cart() {
        assert_eq!(render_cart(&Cart::new()), "Your cart is empty.");

        let ring = product(1, "Ring", 9.5);
        let cart = add(&add(&add(&Cart::new(), &ring), &ring), &product(2, "Chain", 1.25));

        assert_eq!(
            render_cart(&cart),
            "[  1] Ring x2 @ $9.50 = $19.00\n[  2] Chain x1 @ $1.25 = $1.25\nTotal: $20.25"
        );
    }
}
