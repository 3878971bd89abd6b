//! Client configuration.

use std::fmt;

use crate::endpoint::STEAM_API_BASE_URL;

/// Environment variable holding the Steam Web API key.
pub const KEY_ENV: &str = "STEAM_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "STEAM_API_BASE_URL";

/// Where to send requests and which key to attach.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: STEAM_API_BASE_URL.to_string(),
            key: None,
        }
    }
}

impl ClientConfig {
    /// Read `STEAM_API_KEY` and `STEAM_API_BASE_URL`. Unset or empty
    /// variables keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name| lookup(name).filter(|value: &String| !value.is_empty());
        let mut config = Self::default();
        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.key = non_empty(KEY_ENV);
        config
    }

    /// Set the key. An empty key counts as no key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
