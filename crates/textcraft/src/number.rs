//! Number classification and guarded parsing.
//!
//! Every parser in this module first classifies its input with
//! [`is_number`] and only then hands it to the standard numeric conversion,
//! so malformed input is reported as `None` rather than as an error.
use num_bigint::BigInt;

use crate::decimal::Decimal;

/// The family of numbers a piece of text is checked against.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// 1, 2, 3, ...
    Natural,
    /// 0, 1, 2, 3, ...
    Whole,
    /// ..., -1, 0, 1, ...
    Integer,
    /// Signed decimals with at most one decimal point: -1.1, -.5, 0, 1.5
    #[default]
    Rational,
}

const NEGATIVE: char = '-';
const POSITIVE: char = '+';
const DECIMAL: char = '.';

/// Whether `text` is a number of the requested `kind`.
///
/// The text is scanned once, left to right:
///
/// - empty or blank text, a single non-digit, or a trailing `.` is rejected;
/// - a `-` may only lead, and only for [`NumberKind::Integer`] and
///   [`NumberKind::Rational`];
/// - a `+` may only lead;
/// - a single `.` is allowed for [`NumberKind::Rational`] only;
/// - everything else must be an ASCII digit.
///
/// [`NumberKind::Natural`] additionally rejects text made up only of `0`
/// digits. The check looks at the raw text, so a signed zero such as `+0`
/// still passes.
///
/// ```rust
/// use textcraft::{NumberKind, is_number};
///
/// assert!(is_number("42", NumberKind::Natural));
/// assert!(!is_number("0", NumberKind::Natural));
/// assert!(is_number("+0", NumberKind::Natural));
/// assert!(is_number("-.5", NumberKind::Rational));
/// assert!(!is_number("1.", NumberKind::Rational));
/// ```
#[must_use]
pub fn is_number(text: &str, kind: NumberKind) -> bool {
    let mut chars = text.chars();
    let (Some(first), last) = (chars.next(), chars.next_back()) else {
        return false;
    };
    if is_blank(text) || (last.is_none() && !first.is_ascii_digit()) || text.ends_with(DECIMAL) {
        return false;
    }

    let mut dotted = false;
    for (i, c) in text.chars().enumerate() {
        match c {
            NEGATIVE => {
                if i > 0 || matches!(kind, NumberKind::Natural | NumberKind::Whole) {
                    return false;
                }
            }
            POSITIVE => {
                if i > 0 {
                    return false;
                }
            }
            DECIMAL => {
                if dotted || kind != NumberKind::Rational {
                    return false;
                }
                dotted = true;
            }
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }

    kind != NumberKind::Natural || text.bytes().any(|b| b != b'0')
}

/// Whether `text` is a signed whole number.
#[must_use]
pub fn is_integer(text: &str) -> bool {
    is_number(text, NumberKind::Integer)
}

/// Whether `text` is exactly `true` or `false`.
#[must_use]
pub fn is_boolean(text: &str) -> bool {
    matches!(text, "true" | "false")
}

/// Whether `text` has no characters.
#[must_use]
pub fn is_empty(text: &str) -> bool {
    text.is_empty()
}

/// Whether `text` is empty or consists only of whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Parses a `bool` from exactly `true` or `false`.
#[must_use]
pub fn to_boolean(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses an `i32`, guarded by [`NumberKind::Integer`].
#[must_use]
pub fn to_integer(text: &str) -> Option<i32> {
    if is_integer(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// Parses an `i64`, guarded by [`NumberKind::Rational`].
///
/// Text with a fractional part classifies as a number but does not convert,
/// so `"1.5"` yields `None`.
#[must_use]
pub fn to_long(text: &str) -> Option<i64> {
    parse_rational(text)
}

/// Parses an `f64`, guarded by [`NumberKind::Rational`].
#[must_use]
pub fn to_double(text: &str) -> Option<f64> {
    parse_rational(text)
}

/// Parses an arbitrary-precision [`BigInt`], guarded by
/// [`NumberKind::Rational`]. Text with a fractional part yields `None`.
#[must_use]
pub fn to_big_integer(text: &str) -> Option<BigInt> {
    parse_rational(text)
}

/// Parses an exact [`Decimal`], guarded by [`NumberKind::Rational`].
#[must_use]
pub fn to_big_decimal(text: &str) -> Option<Decimal> {
    Decimal::parse(text)
}

/// The first character of `text`, if any.
#[must_use]
pub fn to_char(text: &str) -> Option<char> {
    text.chars().next()
}

fn parse_rational<T: core::str::FromStr>(text: &str) -> Option<T> {
    if is_number(text, NumberKind::Rational) {
        text.parse().ok()
    } else {
        None
    }
}
