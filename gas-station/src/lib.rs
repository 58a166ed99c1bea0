//! ETH Gas Station client
//!
//! Fetches recommended gas prices, converts them from tenths of gwei to wei,
//! and optionally caches the gas station response for a configurable window.
//!
//! ```no_run
//! use gas_station::{EthGasStation, GasPriceSuggester, GasPriority};
//! use std::time::Duration;
//!
//! # async fn run() -> gas_station::Result<()> {
//! let suggester = GasPriceSuggester::new(EthGasStation::new(), Duration::from_secs(30)).await?;
//! let wei = suggester.suggest(GasPriority::Fast).await?;
//! println!("fast: {wei} wei");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gas_station_client;
pub mod suggester;
pub mod types;
pub mod units;

pub use config::{Config, OracleEndpoint};
pub use error::{GasPriceError, Result};
pub use gas_station_client::{EthGasStation, QuoteSource};
pub use suggester::{GasPriceSuggester, suggest_fast_gas_price, suggest_gas_price};
pub use types::{GasPriceQuotes, GasPriority, Wei};
