//! A mutable string buffer with a fluent editing API.
//!
//! [`TextBuffer`] holds text as characters and offers the edits a code or
//! document generator needs: literal and regex find-and-replace, range
//! replacement between markers, slicing with negative indices, multi-pattern
//! trimming and delimiter-aware case conversion. Every mutating method
//! returns `&mut TextBuffer`, so edits chain without copying:
//!
//! ```rust
//! use textcraft::{SlicePolicy, TextBuffer};
//!
//! let mut name = TextBuffer::from("  acme.WidgetService  ");
//! name.trim()
//!     .slice(5, -1, SlicePolicy::Include)
//!     .to_kebab();
//! assert_eq!(name, "widget-service");
//! ```
//!
//! Numbers are classified before they are parsed, so parsing never fails
//! loudly; see [`is_number`] and [`NumberKind`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

mod buffer;
mod case;
mod decimal;
mod error;
pub mod number;
mod options;
mod replace;
mod search;
mod slice;
pub mod text;
mod trim;

#[cfg(test)]
mod tests;

pub use buffer::TextBuffer;
pub use decimal::Decimal;
pub use error::TextError;
pub use number::{NumberKind, is_number};
pub use options::{LineEnding, TextOptions};
pub use slice::SlicePolicy;
pub use trim::TrimSide;

/// Arbitrary-precision integer returned by `to_big_integer`.
pub use num_bigint::BigInt;
