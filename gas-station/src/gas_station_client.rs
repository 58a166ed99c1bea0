use crate::{
    config::{Config, OracleEndpoint},
    error::Result,
    types::GasPriceQuotes,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Anything that can produce a fresh set of gas price quotes.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quotes(&self) -> Result<GasPriceQuotes>;
}

#[async_trait]
impl<T: QuoteSource + ?Sized> QuoteSource for Arc<T> {
    async fn fetch_quotes(&self) -> Result<GasPriceQuotes> {
        (**self).fetch_quotes().await
    }
}

/// HTTP client for the ETH Gas Station API
#[derive(Debug, Clone)]
pub struct EthGasStation {
    http: reqwest::Client,
    endpoint: OracleEndpoint,
}

impl EthGasStation {
    /// Client for the public, unauthenticated endpoint
    pub fn new() -> Self {
        Self::with_endpoint(OracleEndpoint::public())
    }

    /// Client for the key-authenticated endpoint
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(OracleEndpoint::authenticated(api_key))
    }

    /// Create a client for an explicit endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Public or key-authenticated gas station URL
    ///
    /// # Example
    /// ```no_run
    /// use gas_station::{EthGasStation, OracleEndpoint};
    ///
    /// let client = EthGasStation::with_endpoint(OracleEndpoint::Public {
    ///     url: "http://localhost:9000/json/ethgasAPI.json".to_string(),
    /// });
    /// ```
    pub fn with_endpoint(endpoint: OracleEndpoint) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a client for the endpoint selected by configuration
    ///
    /// # Arguments
    /// * `config` - Loaded application configuration
    ///
    /// # Example
    /// ```no_run
    /// use gas_station::{Config, EthGasStation};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_env()?;
    /// let client = EthGasStation::from_config(&config);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoint(config.endpoint.clone())
    }

    /// Create a client on top of a preconfigured `reqwest::Client`
    ///
    /// Timeouts, proxies and TLS settings all come from `http`.
    ///
    /// # Arguments
    /// * `http` - HTTP client used for every fetch
    /// * `endpoint` - Public or key-authenticated gas station URL
    ///
    /// # Example
    /// ```no_run
    /// use gas_station::{EthGasStation, OracleEndpoint};
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), reqwest::Error> {
    /// let http = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// let client = EthGasStation::with_client(http, OracleEndpoint::authenticated("my-api-key"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(http: reqwest::Client, endpoint: OracleEndpoint) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &OracleEndpoint {
        &self.endpoint
    }
}

impl Default for EthGasStation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for EthGasStation {
    async fn fetch_quotes(&self) -> Result<GasPriceQuotes> {
        let request = match &self.endpoint {
            OracleEndpoint::Public { url } => self.http.get(url),
            OracleEndpoint::Authenticated { url, api_key } => {
                self.http.get(url).query(&[("api-key", api_key)])
            }
        };

        debug!("Fetching gas prices from {}", self.endpoint.url());

        let body = request.send().await?.error_for_status()?.text().await?;
        let quotes: GasPriceQuotes = serde_json::from_str(&body)?;

        debug!(
            "Gas station quotes: fast={} fastest={} safeLow={} average={}",
            quotes.fast, quotes.fastest, quotes.safe_low, quotes.average
        );

        Ok(quotes)
    }
}
