use crate::config::{DEFAULT_CATALOG_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Settings file: `[catalog]` for the product source, `[logging]` for the filter level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub logging: Option<LoggingConfig>,
}

/// `[catalog]`: where products come from and how to ask for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
            headers: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_CATALOG_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after substituting `${VAR}` placeholders.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShopError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Log level from `[logging]`, if set.
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.catalog.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn headers(&self) -> HashMap<String, String> {
        self.catalog.headers.clone().unwrap_or_default()
    }
}

/// Checks the endpoint URL, the timeout range, header names and the log level.
impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("catalog.endpoint", &self.catalog.endpoint)?;
        crate::utils::validation::validate_range(
            "catalog.timeout_seconds",
            self.timeout_seconds(),
            1,
            300,
        )?;
        if let Some(headers) = &self.catalog.headers {
            crate::utils::validation::validate_headers("catalog.headers", headers)?;
        }
        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(ShopError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
endpoint = "https://api.example.com/products"
timeout_seconds = 5

[catalog.headers]
Accept = "application/json"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog_endpoint(), "https://api.example.com/products");
        assert_eq!(config.timeout_seconds(), 5);
        assert_eq!(
            config.headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.catalog_endpoint(), DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.headers().is_empty());
        assert!(config.log_level().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHOPPING_CART_TEST_CATALOG_URL", "https://test.shop.com/products");

        let toml_content = r#"
[catalog]
endpoint = "${SHOPPING_CART_TEST_CATALOG_URL}"

[catalog.headers]
Authorization = "Bearer ${SHOPPING_CART_TEST_UNSET_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.endpoint, "https://test.shop.com/products");
        assert_eq!(
            config.headers().get("Authorization").map(String::as_str),
            Some("Bearer ${SHOPPING_CART_TEST_UNSET_TOKEN}")
        );

        std::env::remove_var("SHOPPING_CART_TEST_CATALOG_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[catalog]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout =
            TomlConfig::from_toml_str("[catalog]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            bad_level.validate(),
            Err(ShopError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[catalog\nendpoint = 1").unwrap_err();
        assert!(matches!(err, ShopError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\nendpoint = \"https://api.example.com\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog_endpoint(), "https://api.example.com");

        let missing = TomlConfig::from_file("/nonexistent/shop.toml").unwrap_err();
        assert!(matches!(missing, ShopError::IoError(_)));
    }
}
