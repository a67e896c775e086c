//! Exact decimal values.
//!
//! [`Decimal`] stores an arbitrary-precision unscaled integer and a scale
//! instead of rounding into a float, so `"0.10"` and
//! `"123456789012345678901234567890.5"` survive unchanged. It carries no
//! arithmetic; it is the lossless result of
//! [`to_big_decimal`](crate::number::to_big_decimal).
use core::fmt;

use num_bigint::{BigInt, Sign};

use crate::number::{NumberKind, is_number};

/// An arbitrary-precision decimal number: an unscaled integer and a scale
/// (the count of digits after the decimal point). The value is
/// `unscaled * 10^-scale`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: usize,
}

impl Decimal {
    /// Parses a rational number such as `-12.50`, `+3` or `.5`.
    ///
    /// Returns `None` unless `text` classifies as [`NumberKind::Rational`].
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if !is_number(text, NumberKind::Rational) {
            return None;
        }

        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let digits: String = int_part.chars().chain(frac_part.chars()).collect();
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
        Some(Self {
            unscaled: if negative { -magnitude } else { magnitude },
            scale: frac_part.len(),
        })
    }

    /// `true` for values below zero. Zero is never negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.sign() == Sign::Minus
    }

    /// Number of digits after the decimal point.
    #[must_use]
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// The value with the decimal point removed: `-12.25` has unscaled value
    /// `-1225`.
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Nearest `f64` to this value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.unscaled.magnitude().to_string();
        if self.scale == 0 {
            return f.write_str(&digits);
        }

        if digits.len() <= self.scale {
            f.write_str("0.")?;
            for _ in digits.len()..self.scale {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        } else {
            let (int_part, frac_part) = digits.split_at(digits.len() - self.scale);
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Decimal::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid decimal: {text:?}")))
    }
}
