//! # Monetary Amounts
//!
//! Rupiah amounts for remittance and checkout are whole numbers. `Amount`
//! wraps a `rust_decimal::Decimal` whose scale is always zero, so values never
//! pass through floating point and always serialize without a fractional part.

use crate::error::{OyError, OyResult};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Smallest amount OY! accepts for a disbursement (IDR)
pub const MIN_DISBURSEMENT_AMOUNT: u64 = 10_000;

/// Integer monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from a decimal value.
    ///
    /// Trailing zeros are dropped (`10000.00` is accepted); any non-zero
    /// fractional part is rejected.
    pub fn new(value: Decimal) -> OyResult<Self> {
        let value = value.normalize();
        if value.scale() != 0 {
            return Err(OyError::InvalidAmount(format!(
                "{} has a fractional part",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check against the provider's disbursement minimum.
    ///
    /// The client never enforces this; the provider rejects smaller amounts.
    pub fn meets_disbursement_minimum(&self) -> bool {
        self.0 >= Decimal::from(MIN_DISBURSEMENT_AMOUNT)
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = OyError;

    fn try_from(value: Decimal) -> OyResult<Self> {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = OyError;

    fn from_str(s: &str) -> OyResult<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| OyError::InvalidAmount(format!("{}: {}", s, e)))?;
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}
