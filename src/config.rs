//! Environment-based platform configuration.
//!
//! A platform is enabled by the presence of its access-token variable.
//! With no platform configured the server has nothing to expose and the
//! binary exits non-zero at startup.

/// Access token variable; presence enables the Meta tool set.
pub const META_ACCESS_TOKEN_VAR: &str = "META_ACCESS_TOKEN";
/// Optional override for the Graph API version.
pub const META_API_VERSION_VAR: &str = "META_API_VERSION";
/// Optional override for the Graph API base URL.
pub const META_BASE_URL_VAR: &str = "META_BASE_URL";

pub const DEFAULT_API_VERSION: &str = "v23.0";
pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com";

/// Credential context for the Meta Graph API. Built once at startup,
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct MetaConfig {
    pub access_token: String,
    pub api_version: String,
    pub base_url: String,
}

/// Top-level configuration across ad platforms.
///
/// Only Meta exists today; additional platforms get their own optional
/// section here and a matching [`AdPlatform`](crate::platform::AdPlatform)
/// implementation.
#[derive(Debug, Clone, Default)]
pub struct AdsConfig {
    pub meta: Option<MetaConfig>,
}

impl AdsConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load_from(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let meta = lookup(META_ACCESS_TOKEN_VAR).map(|access_token| MetaConfig {
            access_token,
            api_version: lookup(META_API_VERSION_VAR)
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            base_url: lookup(META_BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        });

        Self { meta }
    }

    /// Names of the platforms enabled by the current configuration.
    pub fn enabled_platforms(&self) -> Vec<&'static str> {
        let mut platforms = Vec::new();
        if self.meta.is_some() {
            platforms.push("meta");
        }
        platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_token_disables_meta() {
        let vars = env(&[]);
        let config = AdsConfig::load_from(|name| vars.get(name).cloned());
        assert!(config.meta.is_none());
        assert!(config.enabled_platforms().is_empty());
    }

    #[test]
    fn test_token_enables_meta_with_defaults() {
        let vars = env(&[(META_ACCESS_TOKEN_VAR, "tok-123")]);
        let config = AdsConfig::load_from(|name| vars.get(name).cloned());
        let meta = config.meta.clone().expect("meta should be enabled");
        assert_eq!(meta.access_token, "tok-123");
        assert_eq!(meta.api_version, DEFAULT_API_VERSION);
        assert_eq!(meta.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.enabled_platforms(), vec!["meta"]);
    }

    #[test]
    fn test_version_and_base_url_overrides() {
        let vars = env(&[
            (META_ACCESS_TOKEN_VAR, "tok"),
            (META_API_VERSION_VAR, "v21.0"),
            (META_BASE_URL_VAR, "https://graph.example.test/"),
        ]);
        let config = AdsConfig::load_from(|name| vars.get(name).cloned());
        let meta = config.meta.expect("meta should be enabled");
        assert_eq!(meta.api_version, "v21.0");
        // Trailing slash is trimmed so URL assembly stays predictable.
        assert_eq!(meta.base_url, "https://graph.example.test");
    }
}
