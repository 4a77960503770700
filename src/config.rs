//! Build-time Configuration
//!
//! A CSR bundle has no process environment, so settings are baked in when
//! the wasm is built:
//! - `FOOD_API_URL`: base URL of the foods backend
//! - `FOOD_DASHBOARD_LOG`: `RUST_LOG`-style level

use log::LevelFilter;

/// Local mock server the dashboard is developed against
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_DASHBOARD_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            log_level: log_level.map(parse_log_level).unwrap_or(defaults.log_level),
        }
    }
}

/// Parse a `RUST_LOG`-style value, taking the level of the first directive
pub fn parse_log_level(value: &str) -> LevelFilter {
    let level_str = value
        .split(',')
        .next()
        .unwrap_or(value)
        .split('=')
        .next_back()
        .unwrap_or(value)
        .trim()
        .to_lowercase();

    match level_str.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_log_level("off"), LevelFilter::Off);
        assert_eq!(parse_log_level("food_dashboard=trace"), LevelFilter::Trace);
        assert_eq!(
            parse_log_level("food_dashboard=error,reqwest=info"),
            LevelFilter::Error
        );
        assert_eq!(parse_log_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_from_values_defaults() {
        assert_eq!(DashboardConfig::from_values(None, None), DashboardConfig::default());
        assert_eq!(DashboardConfig::from_values(Some("  "), None).api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_values_overrides() {
        let config = DashboardConfig::from_values(Some("https://foods.example.com"), Some("debug"));
        assert_eq!(config.api_url, "https://foods.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }
}
