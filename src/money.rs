// src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use thiserror::Error;

/// Hundredths of the display unit.
pub type AmountValue = i64;

const SCALE: AmountValue = 100;

// Keeps `value * SCALE` well inside `i64` when parsing.
const MAX_WHOLE: f64 = 1e15;

/// A decimal amount with two fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    value: AmountValue,
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Amount::from_str(&text)
            .map_err(serde::de::Error::custom)
    }
}

impl Amount {
    pub const ZERO: Amount = Amount { value: 0 };

    pub fn from_hundredths(value: AmountValue) -> Self {
        Amount { value }
    }

    /// `i32` units always fit once scaled.
    pub fn whole(units: i32) -> Self {
        Amount { value: AmountValue::from(units) * SCALE }
    }

    pub fn hundredths(&self) -> AmountValue {
        self.value
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.value.checked_add(other.value).map(Amount::from_hundredths)
    }

    /// `None` if the running total leaves the representable range.
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(amounts: I) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Amount::ZERO, Amount::checked_add)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

impl Add for Amount {
    type Output = Result<Amount, MoneyError>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
            .ok_or_else(|| MoneyError::OutOfRange(format!("{} + {}", self, other)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let abs = self.value.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / SCALE as u64, abs % SCALE as u64)
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    /// Accepts anything a numeric text field would: surrounding whitespace,
    /// a sign, a fraction of any length and exponent notation. The value is
    /// rounded to the nearest hundredth.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parsed = text.parse::<f64>()
            .map_err(|_| MoneyError::NotANumber(s.to_string()))?;

        if !parsed.is_finite() {
            return Err(MoneyError::NotANumber(s.to_string()));
        }
        if parsed.abs() >= MAX_WHOLE {
            return Err(MoneyError::OutOfRange(s.to_string()));
        }

        Ok(Amount {
            value: (parsed * SCALE as f64).round() as AmountValue,
        })
    }
}
