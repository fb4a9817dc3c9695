use std::env;
use std::time::Duration;

use tracing::warn;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which product service implementation backs the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Http,
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Backend::Http),
            "memory" => Ok(Backend::Memory),
            other => Err(format!("Invalid backend: {}", other)),
        }
    }
}

/// Remote product service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub backend: Backend,
}

impl ServiceConfig {
    /// Load service configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCT_API_URL: Service root (default: "http://localhost:3000")
    /// - PRODUCT_API_TIMEOUT_SECS: Per-request timeout (default: 30)
    /// - PRODUCT_BACKEND: "http" or "memory" (default: "http")
    ///
    /// Invalid values fall back to the defaults with a warning.
    pub fn from_env() -> Result<Self, url::ParseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, url::ParseError> {
        let configured_url = lookup("PRODUCT_API_URL").and_then(|raw| match parse_http_url(&raw) {
            Ok(url) => Some(url),
            Err(reason) => {
                warn!("Ignoring PRODUCT_API_URL={}: {}", raw, reason);
                None
            }
        });
        let base_url = match configured_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_URL)?,
        };

        let timeout_secs = lookup("PRODUCT_API_TIMEOUT_SECS")
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    warn!("Ignoring PRODUCT_API_TIMEOUT_SECS={}", raw);
                    None
                }
            })
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let backend = lookup("PRODUCT_BACKEND")
            .and_then(|raw| match raw.parse::<Backend>() {
                Ok(backend) => Some(backend),
                Err(reason) => {
                    warn!("{}", reason);
                    None
                }
            })
            .unwrap_or(Backend::Http);

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            backend,
        })
    }
}

fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("unsupported scheme {}", scheme)),
    }
}
