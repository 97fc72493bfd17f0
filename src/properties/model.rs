//! Property record model.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A listed property. Read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
    /// Serialized as RFC 3339
    pub created_at: DateTime<Utc>,
}

/// Exact decimal amount. Always serialized as a string so no precision
/// is lost on the way through JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(BigDecimal);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid decimal price: {0:?}")]
pub struct ParsePriceError(String);

impl Price {
    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }
}

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s)
            .map(Price)
            .map_err(|_| ParsePriceError(s.to_string()))
    }
}

impl From<BigDecimal> for Price {
    fn from(value: BigDecimal) -> Self {
        Price(value)
    }
}

impl TryFrom<String> for Price {
    type Error = ParsePriceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
