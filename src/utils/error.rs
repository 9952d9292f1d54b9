use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Catalog fetch failed: {reason}")]
    CatalogFetchFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot understand '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

impl From<reqwest::Error> for ShopError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_decode() {
            format!("unusable response body: {}", err)
        } else {
            err.to_string()
        };
        ShopError::CatalogFetchFailed { reason }
    }
}

impl ShopError {
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, ShopError::CatalogFetchFailed { .. })
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::CatalogFetchFailed { .. } => "Failed to load products!".to_string(),
            ShopError::IoError(e) => format!("Could not read input: {}", e),
            ShopError::ConfigError { message } => format!("Configuration problem: {}", message),
            ShopError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ShopError::CommandError { input, reason } => {
                format!("Unknown command '{}': {}", input, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShopError::CatalogFetchFailed { .. } => {
                "Check the catalog endpoint and your network connection, then type 'reload'"
            }
            ShopError::IoError(_) => "Check that the file exists and is readable",
            ShopError::ConfigError { .. } => "Fix the configuration file syntax",
            ShopError::InvalidConfigValueError { .. } => {
                "Correct the setting on the command line or in the config file"
            }
            ShopError::CommandError { .. } => "Type 'help' to list the available commands",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
