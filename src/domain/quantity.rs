//! Lenient numeric fields for estimator input.
//!
//! Form values arrive as numbers, numeric strings, empty strings or not at
//! all. None of these are errors: anything that does not read as a positive
//! number counts as zero so the estimate stays computable.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Largest quantity accepted; anything bigger is clamped to it.
pub const MAX_QUANTITY: Decimal = dec!(1000000);

/// Read a JSON value as a non-negative decimal, falling back to zero.
///
/// Strings are read by their leading numeric prefix, so `"12ft"` is 12.
/// Negative, non-finite and non-numeric values are all zero.
pub fn parse_positive_number_or_zero(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| n.as_u64().map(Decimal::from))
            .or_else(|| n.as_f64().and_then(Decimal::from_f64)),
        Value::String(s) => numeric_prefix(s).and_then(Decimal::from_f64),
        _ => None,
    };

    parsed
        .filter(|d| d.is_sign_positive() && !d.is_zero())
        .map(|d| d.min(MAX_QUANTITY).normalize())
        .unwrap_or(Decimal::ZERO)
}

fn numeric_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    (1..=end)
        .rev()
        .find_map(|i| s[..i].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// A length, area or other continuous quantity (feet, square feet, linear feet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Measure(pub Decimal);

impl Measure {
    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Measure {
    fn from(d: Decimal) -> Self {
        Self(d.max(Decimal::ZERO))
    }
}

impl From<u32> for Measure {
    fn from(n: u32) -> Self {
        Self(Decimal::from(n))
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(parse_positive_number_or_zero(&value)))
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_i64().filter(|_| self.0.fract().is_zero()) {
            Some(whole) => serializer.serialize_i64(whole),
            None => serializer.serialize_f64(self.0.to_f64().unwrap_or_default()),
        }
    }
}

/// A whole number of items (doors, drawers, shutters). Fractions truncate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Count(pub u32);

impl Count {
    pub fn value(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let n = parse_positive_number_or_zero(&value)
            .trunc()
            .to_u32()
            .unwrap_or(u32::MAX);
        Ok(Self(n))
    }
}
