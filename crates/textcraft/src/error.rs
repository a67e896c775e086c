use thiserror::Error;

/// Errors raised by [`TextBuffer`](crate::TextBuffer) operations.
///
/// Only structural misuse is reported as an error. Lookups and parsing report
/// absence with `Option::None` instead.
#[derive(Debug, Error, PartialEq)]
pub enum TextError {
    /// A character position or sub-sequence bound fell outside the buffer.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The buffer length at the time of the call.
        len: usize,
    },
    /// A checked slice resolved to an inverted or out-of-bounds range.
    #[error("begin {from}, end {to}, length {len}")]
    RangeViolation {
        /// Resolved start index.
        from: isize,
        /// Resolved end index.
        to: isize,
        /// The buffer length at the time of the call.
        len: usize,
    },
    /// A pattern handed to [`TextBuffer::replace`](crate::TextBuffer::replace)
    /// failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
