//! Gas price suggestions
//!
//! Two ways to ask for a price:
//! - [`suggest_gas_price`] always calls the gas station
//! - [`GasPriceSuggester`] keeps the last response and only calls the gas
//!   station again once that response is older than `max_age`
//!
//! # Cache flow
//! ```text
//! suggest(priority) → lock → stale? → no  → copy quotes → unlock → convert
//!                               ↓
//!                              yes → fetch (lock held) → ok?  → swap quotes + timestamp
//!                                                        err? → return error, keep old state
//! ```
//!
//! The lock is held across the fetch, so callers arriving during a refresh
//! wait for it instead of starting their own.

use crate::{
    error::Result,
    gas_station_client::QuoteSource,
    types::{GasPriceQuotes, GasPriority, Wei},
    units,
};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Suggested gas price in wei for `priority`. Always fetches fresh quotes.
pub async fn suggest_gas_price<S>(source: &S, priority: GasPriority) -> Result<Wei>
where
    S: QuoteSource + ?Sized,
{
    let quotes = source.fetch_quotes().await?;
    price_for(&quotes, priority)
}

/// [`suggest_gas_price`] for [`GasPriority::Fast`]
pub async fn suggest_fast_gas_price<S>(source: &S) -> Result<Wei>
where
    S: QuoteSource + ?Sized,
{
    suggest_gas_price(source, GasPriority::Fast).await
}

fn price_for(quotes: &GasPriceQuotes, priority: GasPriority) -> Result<Wei> {
    let raw = quotes.get(priority);
    let wei = units::to_wei(raw)?;
    debug!("{} gas price: {} (raw) => {} wei", priority, raw, wei);
    Ok(wei)
}

struct CacheState {
    quotes: GasPriceQuotes,
    fetched_at: Instant,
}

impl CacheState {
    fn is_stale(&self, max_age: Duration) -> bool {
        max_age.is_zero() || self.fetched_at.elapsed() > max_age
    }
}

/// Gas price suggester that reuses gas station responses for up to `max_age`
pub struct GasPriceSuggester<S> {
    source: S,
    max_age: Duration,
    state: Mutex<CacheState>,
}

impl<S: QuoteSource> GasPriceSuggester<S> {
    /// Fetch the first set of quotes and build the suggester.
    ///
    /// Fails if that first fetch fails; there is no suggester without quotes.
    ///
    /// # Arguments
    /// * `source` - Where quotes come from (usually [`EthGasStation`](crate::EthGasStation))
    /// * `max_age` - How long a response is reused before refetching; zero disables caching
    ///
    /// # Example
    /// ```no_run
    /// use gas_station::{EthGasStation, GasPriceSuggester, GasPriority};
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// # async fn run() -> gas_station::Result<()> {
    /// let suggester = Arc::new(
    ///     GasPriceSuggester::new(EthGasStation::with_key("my-api-key"), Duration::from_secs(60)).await?,
    /// );
    ///
    /// // Shared across tasks; only one refetch per minute
    /// let wei = suggester.suggest(GasPriority::SafeLow).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(source: S, max_age: Duration) -> Result<Self> {
        let quotes = source.fetch_quotes().await?;
        debug!("Gas price suggester ready (max age: {:?})", max_age);

        Ok(Self {
            source,
            max_age,
            state: Mutex::new(CacheState {
                quotes,
                fetched_at: Instant::now(),
            }),
        })
    }

    /// Suggested gas price in wei for `priority`.
    ///
    /// Refetches first when the cached response is older than `max_age`. If
    /// that refetch fails the error is returned and the cached response is
    /// kept for later callers.
    pub async fn suggest(&self, priority: GasPriority) -> Result<Wei> {
        let quotes = {
            let mut state = self.state.lock().await;

            if state.is_stale(self.max_age) {
                debug!(
                    "Cached gas prices are {:?} old, refreshing",
                    state.fetched_at.elapsed()
                );
                match self.source.fetch_quotes().await {
                    Ok(quotes) => {
                        *state = CacheState {
                            quotes,
                            fetched_at: Instant::now(),
                        };
                    }
                    Err(e) => {
                        warn!("Gas price refresh failed, keeping cached prices: {}", e);
                        return Err(e);
                    }
                }
            } else {
                debug!("Serving {} gas price from cache", priority);
            }

            state.quotes
        };

        price_for(&quotes, priority)
    }

    /// Like [`suggest`](Self::suggest) with the API name of the priority
    /// (`"fast"`, `"fastest"`, `"safeLow"`, `"average"`).
    ///
    /// Unknown names fail before the cache or gas station is touched.
    pub async fn suggest_named(&self, priority: &str) -> Result<Wei> {
        let priority: GasPriority = priority.parse()?;
        self.suggest(priority).await
    }

    /// Cached quotes, without refreshing
    pub async fn quotes(&self) -> GasPriceQuotes {
        self.state.lock().await.quotes
    }

    /// Time since the cached quotes were fetched
    pub async fn cache_age(&self) -> Duration {
        self.state.lock().await.fetched_at.elapsed()
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}
