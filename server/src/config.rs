//! Server configuration parsed from environment variables.
//!
//! All values are optional except that a present `PORT` must parse. Missing
//! backend or identity settings disable the features that need them instead
//! of failing startup.

use client::config::RuntimeConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL that `/api/backend/*` rewrites to; no trailing slash.
    pub api_base_url: Option<String>,
    /// Public values exposed to the browser.
    pub runtime: RuntimeConfig,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE_URL`: backend API for rewrites and credential checks
    /// - `AUTH_ISSUER`, `AUTH_CLIENT_ID`: exposed via `/api/runtime-config`
    /// - `COOKIE_SECURE`: defaults to true when `API_BASE_URL` is https
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build from a flat `name -> value` mapping.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let lookup = |key: &str| {
            vars.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.trim())
                .filter(|value| !value.is_empty())
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let api_base_url = lookup("API_BASE_URL").map(|url| url.trim_end_matches('/').to_owned());
        let cookie_secure = lookup("COOKIE_SECURE")
            .and_then(parse_bool)
            .unwrap_or_else(|| api_base_url.as_deref().is_some_and(|url| url.starts_with("https://")));
        let runtime = RuntimeConfig::from_vars(vars.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        Ok(Self { port, api_base_url, runtime, cookie_secure })
    }
}

/// Parse common boolean spellings; anything else is `None`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
