use crate::error::GasPriceError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Amount of wei. Unbounded so large prices never overflow.
pub type Wei = num_bigint::BigUint;

/// Urgency level the gas station reports a distinct price for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GasPriority {
    /// Mined in less than 2 minutes.
    Fast,

    /// Mined in less than 30 seconds.
    Fastest,

    /// Cheapest price still mined in less than 30 minutes.
    SafeLow,

    /// Mined in less than 5 minutes.
    Average,
}

impl GasPriority {
    pub const ALL: [GasPriority; 4] = [
        GasPriority::Fast,
        GasPriority::Fastest,
        GasPriority::SafeLow,
        GasPriority::Average,
    ];

    /// Field name used by the gas station API
    pub fn as_str(&self) -> &'static str {
        match self {
            GasPriority::Fast => "fast",
            GasPriority::Fastest => "fastest",
            GasPriority::SafeLow => "safeLow",
            GasPriority::Average => "average",
        }
    }
}

impl fmt::Display for GasPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GasPriority {
    type Err = GasPriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GasPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| GasPriceError::UnknownTier(s.to_string()))
    }
}

/// One snapshot of the gas station response.
///
/// Values are in the oracle's native scale (tenths of gwei) and must be JSON
/// numbers; a quoted string is a malformed response.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct GasPriceQuotes {
    pub fast: f64,
    pub fastest: f64,
    #[serde(rename = "safeLow")]
    pub safe_low: f64,
    pub average: f64,
}

impl GasPriceQuotes {
    pub fn get(&self, priority: GasPriority) -> f64 {
        match priority {
            GasPriority::Fast => self.fast,
            GasPriority::Fastest => self.fastest,
            GasPriority::SafeLow => self.safe_low,
            GasPriority::Average => self.average,
        }
    }
}
