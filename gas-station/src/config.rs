use anyhow::Context;
use std::time::Duration;

/// Public ETH Gas Station endpoint.
///
/// More information available at https://ethgasstation.info
pub const ETH_GAS_STATION_URL: &str = "https://ethgasstation.info/json/ethgasAPI.json";

/// Key-authenticated endpoint; the key travels in the `api-key` query parameter.
pub const ETH_GAS_STATION_KEYED_URL: &str =
    "https://data-api.defipulse.com/api/v1/egs/api/ethgasAPI.json";

/// Default cache window for the suggester (seconds)
const DEFAULT_MAX_PRICE_AGE_SECONDS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Where gas prices are fetched from
    pub endpoint: OracleEndpoint,

    /// Maximum age of a cached gas station response
    pub max_price_age: Duration,
}

/// Which gas station endpoint to query
#[derive(Clone, PartialEq, Eq)]
pub enum OracleEndpoint {
    Public { url: String },
    Authenticated { url: String, api_key: String },
}

impl OracleEndpoint {
    pub fn public() -> Self {
        OracleEndpoint::Public {
            url: ETH_GAS_STATION_URL.to_string(),
        }
    }

    pub fn authenticated(api_key: impl Into<String>) -> Self {
        OracleEndpoint::Authenticated {
            url: ETH_GAS_STATION_KEYED_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            OracleEndpoint::Public { url } | OracleEndpoint::Authenticated { url, .. } => url,
        }
    }
}

impl Default for OracleEndpoint {
    fn default() -> Self {
        OracleEndpoint::public()
    }
}

// Keeps the api key out of logs
impl std::fmt::Debug for OracleEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleEndpoint::Public { url } => f.debug_struct("Public").field("url", url).finish(),
            OracleEndpoint::Authenticated { url, .. } => f
                .debug_struct("Authenticated")
                .field("url", url)
                .field("api_key", &"<redacted>")
                .finish(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    ///
    /// * `GAS_STATION_API_KEY` - selects the authenticated endpoint when set
    /// * `GAS_STATION_URL` - overrides the endpoint URL
    /// * `GAS_PRICE_MAX_AGE_SECONDS` - cache window, default 30
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GAS_STATION_API_KEY").filter(|key| !key.trim().is_empty());
        let url_override = lookup("GAS_STATION_URL").filter(|url| !url.trim().is_empty());

        let mut endpoint = match api_key {
            Some(api_key) => OracleEndpoint::authenticated(api_key),
            None => OracleEndpoint::public(),
        };
        if let Some(custom) = url_override {
            match &mut endpoint {
                OracleEndpoint::Public { url } | OracleEndpoint::Authenticated { url, .. } => {
                    *url = custom
                }
            }
        }

        let max_age_seconds = match lookup("GAS_PRICE_MAX_AGE_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid GAS_PRICE_MAX_AGE_SECONDS: {raw:?}"))?,
            None => DEFAULT_MAX_PRICE_AGE_SECONDS,
        };

        Ok(Config {
            endpoint,
            max_price_age: Duration::from_secs(max_age_seconds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.endpoint, OracleEndpoint::public());
        assert_eq!(config.endpoint.url(), ETH_GAS_STATION_URL);
        assert_eq!(config.max_price_age, Duration::from_secs(30));
    }

    #[test]
    fn test_api_key_selects_authenticated_endpoint() {
        let config = Config::from_lookup(lookup_from(&[
            ("GAS_STATION_API_KEY", "secret"),
            ("GAS_PRICE_MAX_AGE_SECONDS", "120"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, OracleEndpoint::authenticated("secret"));
        assert_eq!(config.endpoint.url(), ETH_GAS_STATION_KEYED_URL);
        assert_eq!(config.max_price_age, Duration::from_secs(120));
    }

    #[test]
    fn test_blank_key_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GAS_STATION_API_KEY", "  ")])).unwrap();
        assert_eq!(config.endpoint, OracleEndpoint::public());
    }

    #[test]
    fn test_url_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("GAS_STATION_API_KEY", "secret"),
            ("GAS_STATION_URL", "http://localhost:9000/gas.json"),
        ]))
        .unwrap();

        assert_eq!(
            config.endpoint,
            OracleEndpoint::Authenticated {
                url: "http://localhost:9000/gas.json".to_string(),
                api_key: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_max_age() {
        let err = Config::from_lookup(lookup_from(&[("GAS_PRICE_MAX_AGE_SECONDS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("GAS_PRICE_MAX_AGE_SECONDS"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", OracleEndpoint::authenticated("secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("redacted"));
    }
}
