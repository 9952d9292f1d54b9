use clap::Parser;
use shopping_cart::app::commands::{execute, Command, Outcome, HELP};
use shopping_cart::app::view::{render_badge, render_catalog};
use shopping_cart::utils::{logger, validation::Validate};
use shopping_cart::{CatalogState, CliConfig, ConfigProvider, HttpCatalog, Storefront, TomlConfig};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    logger::init_cli_logger(cli.verbose, file_config.as_ref().and_then(|c| c.log_level()));
    tracing::info!("Starting shopping-cart");

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match file_config {
        Some(config) => run(config).await,
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider>(config: C) -> anyhow::Result<()> {
    let catalog = HttpCatalog::new(config)?;
    tracing::debug!("Catalog endpoint: {}", catalog.endpoint());
    let mut shop = Storefront::new(catalog);

    println!("{}", render_catalog(&CatalogState::Loading));
    if let Err(e) = shop.load_catalog().await {
        tracing::error!("{}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
    }
    println!("{}", render_catalog(shop.catalog_state()));
    println!("{}", render_badge(&shop));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                continue;
            }
        };
        match execute(&mut shop, command).await {
            Outcome::Show(text) => println!("{}", text),
            Outcome::Quit => break,
        }
    }

    tracing::info!("Session ended with {} items in the cart", shop.badge_count());
    Ok(())
}
