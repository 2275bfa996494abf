use std::fmt::Display;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Signed;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[cfg(test)]
#[path = "bigint_test.rs"]
mod test;

/// A signed big integer written as a `0x`-prefixed hex string, with a leading `-` when negative,
/// e.g. `"-0x1f"`.
///
/// Hint descriptors carry their immediate operands this way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigIntAsHex {
    pub value: BigInt,
}

impl From<BigInt> for BigIntAsHex {
    fn from(value: BigInt) -> Self {
        Self { value }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    #[error("`{0}` does not start with `0x`.")]
    MissingPrefix(String),
    #[error("`{0}` has no hex digits or has a non hex digit.")]
    InvalidDigits(String),
}

impl FromStr for BigIntAsHex {
    type Err = ParseHexError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(unsigned) => (Sign::Minus, unsigned),
            None => (Sign::Plus, text),
        };
        let digits =
            unsigned.strip_prefix("0x").ok_or_else(|| ParseHexError::MissingPrefix(text.into()))?;
        let magnitude = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| ParseHexError::InvalidDigits(text.into()))?;
        Ok(Self { value: BigInt::from_biguint(sign, magnitude) })
    }
}

impl Display for BigIntAsHex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.value.is_negative() { "-" } else { "" };
        write!(f, "{sign}{:#x}", self.value.magnitude())
    }
}

impl Serialize for BigIntAsHex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigIntAsHex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}
