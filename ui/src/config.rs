//! Site-wide configuration.
//!
//! The wasm bundle has no process environment, so every setting is read from
//! compile-time environment variables with an in-code default.

use std::str::FromStr;

use dioxus_logger::tracing::Level;

/// Default CDN that hosts every image, icon and video on the site.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.prod.website-files.com";

/// Default announcement shown above every page.
pub const DEFAULT_ANNOUNCEMENT: &str = "Help shape the future of digital journalism — we're hiring!";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level `{0}`; expected one of TRACE, DEBUG, INFO, WARN, ERROR")]
    InvalidLogLevel(String),
    #[error("CDN base `{0}` must be an absolute http(s) URL")]
    InvalidCdnBase(String),
}

/// Immutable configuration shared with the whole component tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    cdn_base: String,
    log_level: Level,
    reduced_motion: bool,
    announcement: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl SiteConfig {
    /// Builds the configuration from compile-time environment variables.
    ///
    /// # Environment Variables
    /// - `SITE_CDN_BASE`: absolute base URL of the asset CDN.
    /// - `SITE_LOG_LEVEL`: `TRACE`, `DEBUG`, `INFO`, `WARN` or `ERROR`.
    /// - `SITE_REDUCED_MOTION`: "true" or "1" renders every section statically.
    /// - `SITE_ANNOUNCEMENT`: replaces the announcement bar message.
    ///
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("SITE_CDN_BASE"),
            option_env!("SITE_LOG_LEVEL"),
            option_env!("SITE_REDUCED_MOTION"),
            option_env!("SITE_ANNOUNCEMENT"),
        )
    }

    fn from_vars(
        cdn_base: Option<&str>,
        log_level: Option<&str>,
        reduced_motion: Option<&str>,
        announcement: Option<&str>,
    ) -> Self {
        let cdn_base = match cdn_base.map(parse_cdn_base) {
            Some(Ok(base)) => base,
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("{e}; using default CDN");
                DEFAULT_CDN_BASE.to_string()
            }
            None => DEFAULT_CDN_BASE.to_string(),
        };

        let log_level = match log_level.map(parse_log_level) {
            Some(Ok(level)) => level,
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("{e}; using INFO");
                Level::INFO
            }
            None => Level::INFO,
        };

        let announcement = announcement
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ANNOUNCEMENT)
            .to_string();

        Self {
            cdn_base,
            log_level,
            reduced_motion: parse_flag(reduced_motion),
            announcement,
        }
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Resolves an asset path (e.g. `681dfdff4444ca819f7050a2/682786273e6c31f3343c6700_postlabs-logo-white.svg`)
    /// against the configured CDN.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.cdn_base, path.trim_start_matches('/'))
    }
}

/// Accepts "true" (any case) or "1".
fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
        .unwrap_or(false)
}

fn parse_log_level(value: &str) -> Result<Level, ConfigError> {
    Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel(value.to_string()))
}

fn parse_cdn_base(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidCdnBase(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SiteConfig::from_vars(None, None, None, None);
        assert_eq!(config.log_level(), Level::INFO);
        assert!(!config.reduced_motion());
        assert_eq!(config.announcement(), DEFAULT_ANNOUNCEMENT);
        assert_eq!(
            config.asset_url("logo.svg"),
            format!("{DEFAULT_CDN_BASE}/logo.svg")
        );
    }

    #[test]
    fn flags_accept_true_and_one() {
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = SiteConfig::from_vars(Some("ftp://nope"), Some("LOUD"), Some("0"), Some("  "));
        assert_eq!(config.log_level(), Level::INFO);
        assert_eq!(config.asset_url("/a.png"), format!("{DEFAULT_CDN_BASE}/a.png"));
        assert_eq!(config.announcement(), DEFAULT_ANNOUNCEMENT);
    }

    #[test]
    fn custom_values_are_used() {
        let config = SiteConfig::from_vars(
            Some("https://assets.example.com/"),
            Some("debug"),
            Some("true"),
            Some("We're live"),
        );
        assert_eq!(config.log_level(), Level::DEBUG);
        assert!(config.reduced_motion());
        assert_eq!(config.announcement(), "We're live");
        assert_eq!(
            config.asset_url("clip.mp4"),
            "https://assets.example.com/clip.mp4"
        );
    }

    #[test]
    fn log_level_errors_name_the_value() {
        let err = parse_log_level("LOUD").unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("LOUD".to_string()));
    }
}
