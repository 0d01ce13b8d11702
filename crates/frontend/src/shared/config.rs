//! Dashboard configuration.
//!
//! The defaults come from `config.toml` next to the crate manifest, embedded
//! at build time. `DASHBOARD_API_BASE` (read at build time) overrides the
//! API base URL.

use anyhow::ensure;
use once_cell::sync::Lazy;
use serde::Deserialize;

use contracts::dashboards::d400_sales_analytics::analytics::{
    DEFAULT_TOP_PRODUCTS, DEFAULT_TREND_WINDOW,
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub routes: RoutesConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute base URL of the records API. Empty means "page host on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoutesConfig {
    pub login: String,
    pub home: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub trend_months: usize,
    pub top_products: usize,
}

fn default_api_port() -> u16 {
    8000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_api_port(),
            },
            routes: RoutesConfig {
                login: "/login".to_string(),
                home: "/".to_string(),
            },
            analytics: AnalyticsConfig {
                trend_months: DEFAULT_TREND_WINDOW,
                top_products: DEFAULT_TOP_PRODUCTS,
            },
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    ensure!(
        config.analytics.trend_months > 0,
        "analytics.trend_months must be at least 1"
    );
    ensure!(
        config.routes.login.starts_with('/'),
        "routes.login must be an absolute path, got '{}'",
        config.routes.login
    );
    Ok(config)
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> AppConfig {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config.toml, using defaults: {:#}", e);
            AppConfig::default()
        }
    };

    if let Some(base_url) = option_env!("DASHBOARD_API_BASE") {
        config.api.base_url = base_url.trim_end_matches('/').to_string();
    }

    config
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.routes.login, "/login");
        assert_eq!(config.analytics.trend_months, DEFAULT_TREND_WINDOW);
        assert_eq!(config.analytics.top_products, DEFAULT_TOP_PRODUCTS);
    }

    #[test]
    fn test_embedded_config_matches_builtin_defaults() {
        let mut parsed = parse_config(DEFAULT_CONFIG).unwrap();
        parsed.api.base_url.clear();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_rejects_empty_trend_window() {
        let contents = r#"
            [api]
            port = 8000
            [routes]
            login = "/login"
            home = "/"
            [analytics]
            trend_months = 0
            top_products = 5
        "#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_rejects_relative_login_route() {
        let contents = r#"
            [api]
            [routes]
            login = "login"
            home = "/"
            [analytics]
            trend_months = 6
            top_products = 5
        "#;
        assert!(parse_config(contents).is_err());
    }
}
