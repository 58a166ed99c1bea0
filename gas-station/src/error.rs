use thiserror::Error;

#[derive(Error, Debug)]
pub enum GasPriceError {
    #[error("Gas station request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed gas station response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unknown gas priority: {0}")]
    UnknownTier(String),

    #[error("Gas price {0} cannot be expressed as a whole number of wei")]
    NonIntegralConversion(f64),

    #[error("Gas price is negative: {0}")]
    NegativeQuote(f64),
}

impl GasPriceError {
    /// True when the oracle could not be reached or its response could not be read.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, GasPriceError::Transport(_) | GasPriceError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, GasPriceError>;
