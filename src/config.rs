//! App Configuration
//!
//! Values baked in at compile time from the build environment.

/// Default prefix for backend calls (proxied by Trunk in development)
pub const DEFAULT_API_BASE: &str = "/api/v1";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Prefix prepended to every API path, without a trailing slash
    pub api_base: &'static str,
    pub log_level: log::Level,
}

impl AppConfig {
    /// Read `FORM_API_BASE` and `FORM_LOG_LEVEL` as set when the crate was built
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FORM_API_BASE"), option_env!("FORM_LOG_LEVEL"))
    }

    pub fn from_values(api_base: Option<&'static str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .filter(|base| !base.is_empty())
            .map(|base| base.trim_end_matches('/'))
            .unwrap_or(DEFAULT_API_BASE);
        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info);
        Self { api_base, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:8000/api/v1/"), Some("debug"));
        assert_eq!(config.api_base, "http://localhost:8000/api/v1");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("chatty"));
        assert_eq!(config, AppConfig::default());
    }
}
