pub mod toml_config;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
mod cli {
    use super::{DEFAULT_CATALOG_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_range, validate_url, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "shopping-cart")]
    #[command(about = "Browse a product catalog and fill a shopping cart from the terminal")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_CATALOG_ENDPOINT)]
        pub api_endpoint: String,

        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
        pub timeout_seconds: u64,

        /// TOML file with catalog and logging settings; replaces the flags above
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn catalog_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn timeout_seconds(&self) -> u64 {
            self.timeout_seconds
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_url("api_endpoint", &self.api_endpoint)?;
            validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
            Ok(())
        }
    }

}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
