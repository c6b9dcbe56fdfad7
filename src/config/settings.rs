// src/config/settings.rs
use std::{path::PathBuf, time::Duration};

use super::consts::{BASE_URL, BROWSER_WAIT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::error::ConfigError;

/// Runtime overrides, read from the environment (and `.env` if present).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// `AUCTION_BASE_URL`
    pub base_url: String,
    /// `AUCTION_TIMEOUT_SECS`, per HTTP request
    pub timeout: Duration,
    /// `AUCTION_BROWSER_WAIT_SECS`: how long to wait for the results table
    pub browser_wait: Duration,
    /// `AUCTION_HEADLESS` (default true)
    pub headless: bool,
    /// `AUCTION_CHROME_PATH`; autodetected when unset
    pub chrome_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            browser_wait: Duration::from_secs(BROWSER_WAIT_SECS),
            headless: true,
            chrome_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Self::default();

        if let Some(url) = lookup("AUCTION_BASE_URL") {
            let url = url.trim().trim_end_matches('/');
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid { key: "AUCTION_BASE_URL", value: s!(url) });
            }
            s.base_url = s!(url);
        }
        if let Some(v) = lookup("AUCTION_TIMEOUT_SECS") {
            s.timeout = Duration::from_secs(parse_secs("AUCTION_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = lookup("AUCTION_BROWSER_WAIT_SECS") {
            s.browser_wait = Duration::from_secs(parse_secs("AUCTION_BROWSER_WAIT_SECS", &v)?);
        }
        if let Some(v) = lookup("AUCTION_HEADLESS") {
            s.headless = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::Invalid { key: "AUCTION_HEADLESS", value: v }),
            };
        }
        if let Some(v) = lookup("AUCTION_CHROME_PATH") {
            if !v.trim().is_empty() {
                s.chrome_path = Some(PathBuf::from(v.trim()));
            }
        }
        Ok(s)
    }

    pub fn url(&self, path: &str) -> String {
        join!(&self.base_url, path)
    }
}

fn parse_secs(key: &'static str, v: &str) -> Result<u64, ConfigError> {
    match v.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid { key, value: s!(v) }),
    }
}
