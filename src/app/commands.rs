use crate::app::view::{render_badge, render_cart, render_catalog};
use crate::core::storefront::Storefront;
use crate::core::{CatalogProvider, ProductId};
use crate::utils::error::{Result, ShopError};

pub const HELP: &str = "Commands:
  products       list the catalog
  add <id>       put one unit of a product in the cart
  remove <id>    take one unit out of the cart
  cart           show the cart
  open | close   open or close the cart panel
  reload         fetch the catalog again
  help           show this message
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Add(ProductId),
    Remove(ProductId),
    Cart,
    Open,
    Close,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. The verb is case-insensitive.
    pub fn parse(line: &str) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().map(str::to_ascii_lowercase).ok_or_else(|| {
            ShopError::CommandError {
                input: line.to_string(),
                reason: "empty command".to_string(),
            }
        })?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(ShopError::CommandError {
                input: line.trim().to_string(),
                reason: "too many arguments".to_string(),
            });
        }

        let command = match (verb.as_str(), arg) {
            ("products" | "list", None) => Command::Products,
            ("add", Some(id)) => Command::Add(parse_id(line, id)?),
            ("remove" | "rm", Some(id)) => Command::Remove(parse_id(line, id)?),
            ("cart", None) => Command::Cart,
            ("open", None) => Command::Open,
            ("close", None) => Command::Close,
            ("reload", None) => Command::Reload,
            ("help", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            ("add" | "remove" | "rm", None) => {
                return Err(ShopError::CommandError {
                    input: line.trim().to_string(),
                    reason: "a product id is required".to_string(),
                })
            }
            _ => {
                return Err(ShopError::CommandError {
                    input: line.trim().to_string(),
                    reason: "unknown command".to_string(),
                })
            }
        };
        Ok(command)
    }
}

fn parse_id(line: &str, raw: &str) -> Result<ProductId> {
    raw.parse().map_err(|_| ShopError::CommandError {
        input: line.trim().to_string(),
        reason: format!("'{}' is not a product id", raw),
    })
}

/// What the front end should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Show(String),
    Quit,
}

/// Runs `command` against the session and returns the text to show.
pub async fn execute<P: CatalogProvider>(
    shop: &mut Storefront<P>,
    command: Command,
) -> Outcome {
    let text = match command {
        Command::Products => render_catalog(shop.catalog_state()),
        Command::Add(id) => match shop.addable_product(id).cloned() {
            Some(product) => {
                shop.add_to_cart(&product);
                format!("Added {}. {}", product.title, render_badge(shop))
            }
            None => format!("Unknown product {}", id),
        },
        Command::Remove(id) => {
            shop.remove_from_cart(id);
            render_badge(shop)
        }
        Command::Cart if shop.is_cart_open() => {
            format!("{}\n{}", render_badge(shop), render_cart(shop.cart()))
        }
        Command::Cart => format!("{}\nType 'open' to see the cart.", render_badge(shop)),
        Command::Open => {
            shop.open_cart();
            format!("{}\n{}", render_badge(shop), render_cart(shop.cart()))
        }
        Command::Close => {
            shop.close_cart();
            render_badge(shop)
        }
        Command::Reload => match shop.load_catalog().await {
            Ok(count) => format!("Loaded {} products", count),
            Err(_) => render_catalog(shop.catalog_state()),
        },
        Command::Help => HELP.to_string(),
        Command::Quit => return Outcome::Quit,
    };
    Outcome::Show(text)
}
