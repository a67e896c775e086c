//! The mutable character buffer.
//!
//! [`TextBuffer`] stores text as a sequence of `char`s, so every index the
//! API accepts or returns is a character position, never a byte offset.
//! Mutating methods return `&mut Self` to allow chaining:
//!
//! ```rust
//! use textcraft::TextBuffer;
//!
//! let mut text = TextBuffer::from("  helloWorld  ");
//! text.trim().to_kebab().capitalize();
//! assert_eq!(text, "Hello-world");
//! ```
use core::{
    cmp::Ordering,
    fmt::{self, Write as _},
    hash::{Hash, Hasher},
};

use bstr::ByteSlice;
use num_bigint::BigInt;

use crate::{
    TextError,
    decimal::Decimal,
    number::{self, NumberKind},
    options::TextOptions,
};

/// A growable, mutable sequence of characters with a fluent editing API.
///
/// Equality, ordering and hashing only look at the characters. Buffers
/// compare equal to `str` and `String` holding the same text.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    chars: Vec<char>,
    options: TextOptions,
}

impl TextBuffer {
    /// Creates an empty buffer with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer that can hold `capacity` characters before
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            options: TextOptions::default(),
        }
    }

    /// Creates an empty buffer with the given options.
    #[must_use]
    pub fn with_options(options: TextOptions) -> Self {
        Self {
            chars: Vec::new(),
            options,
        }
    }

    /// Creates a buffer holding the concatenation of `parts`, in order.
    ///
    /// ```rust
    /// use textcraft::TextBuffer;
    ///
    /// assert_eq!(TextBuffer::from_parts(["ab", "", "cd"]), "abcd");
    /// ```
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        for part in parts {
            buffer.chars.extend(part.as_ref().chars());
        }
        buffer
    }

    /// Decodes possibly invalid UTF-8, substituting U+FFFD for every invalid
    /// sequence.
    #[must_use]
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        bytes.chars().collect()
    }

    /// The options this buffer was created with.
    #[must_use]
    pub fn options(&self) -> TextOptions {
        self.options
    }

    /// Number of characters currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// `true` when the buffer holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// `true` when the buffer is empty or holds only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }

    /// The characters of the buffer.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The character at `index`.
    ///
    /// # Errors
    ///
    /// [`TextError::IndexOutOfRange`] unless `index < self.len()`.
    pub fn char_at(&self, index: usize) -> Result<char, TextError> {
        self.chars
            .get(index)
            .copied()
            .ok_or(TextError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The characters in `start..end` as a new `String`.
    ///
    /// # Errors
    ///
    /// [`TextError::IndexOutOfRange`] if `start > end` or `end > self.len()`.
    pub fn sub_sequence(&self, start: usize, end: usize) -> Result<String, TextError> {
        let len = self.len();
        if end > len {
            return Err(TextError::IndexOutOfRange { index: end, len });
        }
        if start > end {
            return Err(TextError::IndexOutOfRange { index: start, len });
        }
        Ok(self.chars[start..end].iter().collect())
    }

    /// The content encoded as UTF-8.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Appends the textual form of `value`.
    ///
    /// Accepts anything that implements [`Display`](fmt::Display): string
    /// slices, characters and numbers alike.
    pub fn add(&mut self, value: impl fmt::Display) -> &mut Self {
        self.chars.extend(value.to_string().chars());
        self
    }

    /// Appends every item of `values` in order.
    pub fn add_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for value in values {
            self.add(value);
        }
        self
    }

    /// Appends a single character.
    pub fn add_char(&mut self, c: char) -> &mut Self {
        self.chars.push(c);
        self
    }

    /// Inserts each of `parts` in turn, starting at `offset`.
    ///
    /// Each insertion advances the offset by the inserted length, so the parts
    /// keep their relative order. A negative `offset` counts from the end; the
    /// resolved offset is clamped to `0..=len`.
    ///
    /// ```rust
    /// use textcraft::TextBuffer;
    ///
    /// let mut text = TextBuffer::from("ad");
    /// text.insert(-1, ["b", "c"]);
    /// assert_eq!(text, "abcd");
    /// ```
    pub fn insert<I, S>(&mut self, offset: isize, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut offset = self.clamp_index(self.resolve(offset));
        for part in parts {
            let before = self.len();
            self.splice(offset, offset, part.as_ref());
            offset += self.len() - before;
        }
        self
    }

    /// Removes every character.
    pub fn delete(&mut self) -> &mut Self {
        self.chars.clear();
        self
    }

    /// Removes the first `n` characters.
    pub fn skip(&mut self, n: usize) -> &mut Self {
        let n = n.min(self.len());
        self.chars.drain(..n);
        self
    }

    /// Keeps only the first `n` characters.
    pub fn take(&mut self, n: usize) -> &mut Self {
        self.chars.truncate(n);
        self
    }

    /// Appends `count` copies of `text`; a negative `count` prepends
    /// `|count|` copies instead.
    pub fn repeat(&mut self, text: &str, count: isize) -> &mut Self {
        let copies = text.repeat(count.unsigned_abs());
        match count.cmp(&0) {
            Ordering::Greater => self.chars.extend(copies.chars()),
            Ordering::Less => self.splice(0, 0, &copies),
            Ordering::Equal => {}
        }
        self
    }

    /// Appends (or for a negative `count`, prepends) `c` repeated `count`
    /// times.
    pub fn repeat_char(&mut self, c: char, count: isize) -> &mut Self {
        let mut encoded = [0; 4];
        self.repeat(c.encode_utf8(&mut encoded), count)
    }

    /// Appends `count` spaces.
    pub fn space(&mut self, count: usize) -> &mut Self {
        let n = self.len();
        self.chars.resize(n + count, ' ');
        self
    }

    /// Appends `count` line separators, as configured by
    /// [`TextOptions::line_ending`].
    pub fn br(&mut self, count: usize) -> &mut Self {
        let separator = self.options.line_ending.as_str();
        for _ in 0..count {
            self.chars.extend(separator.chars());
        }
        self
    }

    /// Whether the content is a number of the given kind. See
    /// [`is_number`](crate::is_number).
    #[must_use]
    pub fn is_number(&self, kind: NumberKind) -> bool {
        number::is_number(&self.to_string(), kind)
    }

    /// Whether the content is a signed whole number.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.is_number(NumberKind::Integer)
    }

    /// The content as an `i32`, if it is an integer that fits.
    #[must_use]
    pub fn to_integer(&self) -> Option<i32> {
        number::to_integer(&self.to_string())
    }

    /// The content as an `i64`. See [`to_long`](crate::number::to_long).
    #[must_use]
    pub fn to_long(&self) -> Option<i64> {
        number::to_long(&self.to_string())
    }

    /// The content as an `f64`.
    #[must_use]
    pub fn to_double(&self) -> Option<f64> {
        number::to_double(&self.to_string())
    }

    /// The content as an arbitrary-precision [`BigInt`].
    #[must_use]
    pub fn to_big_integer(&self) -> Option<BigInt> {
        number::to_big_integer(&self.to_string())
    }

    /// The content as an exact [`Decimal`].
    #[must_use]
    pub fn to_big_decimal(&self) -> Option<Decimal> {
        number::to_big_decimal(&self.to_string())
    }

    /// The content as a `bool`, if it is exactly `true` or `false`.
    #[must_use]
    pub fn to_boolean(&self) -> Option<bool> {
        number::to_boolean(&self.to_string())
    }

    /// The first character, if any.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        self.chars.first().copied()
    }

    /// Resolves a possibly negative index against the current length:
    /// `-1` is the last character. The result may still be out of range.
    pub(crate) fn resolve(&self, index: isize) -> isize {
        if index >= 0 {
            index
        } else {
            self.signed_len() + index
        }
    }

    /// Clamps a resolved index into `0..=len`.
    pub(crate) fn clamp_index(&self, index: isize) -> usize {
        usize::try_from(index).map_or(0, |index| index.min(self.len()))
    }

    #[expect(clippy::cast_possible_wrap)]
    pub(crate) fn signed_len(&self) -> isize {
        // A `Vec` never holds more than `isize::MAX` bytes.
        self.len() as isize
    }

    /// Replaces `start..end` with the characters of `replacement`.
    pub(crate) fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        self.chars.splice(start..end, replacement.chars());
    }

    pub(crate) fn chars_mut(&mut self) -> &mut Vec<char> {
        &mut self.chars
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| f.write_char(*c))
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.chars.extend(s.chars());
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.chars.push(c);
        Ok(())
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<char> for TextBuffer {
    fn from(c: char) -> Self {
        Self {
            chars: vec![c],
            options: TextOptions::default(),
        }
    }
}

impl From<&TextBuffer> for String {
    fn from(buffer: &TextBuffer) -> Self {
        buffer.chars.iter().collect()
    }
}

impl FromIterator<char> for TextBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
            options: TextOptions::default(),
        }
    }
}

impl Extend<char> for TextBuffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl AsRef<[char]> for TextBuffer {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for TextBuffer {}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chars.hash(state);
    }
}

impl PartialOrd for TextBuffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TextBuffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars.cmp(&other.chars)
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for TextBuffer {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<TextBuffer> for str {
    fn eq(&self, other: &TextBuffer) -> bool {
        other == self
    }
}

impl PartialEq<TextBuffer> for &str {
    fn eq(&self, other: &TextBuffer) -> bool {
        other == *self
    }
}

impl PartialEq<TextBuffer> for String {
    fn eq(&self, other: &TextBuffer) -> bool {
        other == self
    }
}

impl PartialOrd<str> for TextBuffer {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.chars.iter().copied().cmp(other.chars()))
    }
}

impl PartialOrd<&str> for TextBuffer {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        self.partial_cmp(*other)
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for TextBuffer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(any(test, feature = "serde"))]
impl<'de> serde::Deserialize<'de> for TextBuffer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_are_concatenated_in_order() {
        let text = TextBuffer::from_parts(["one", "-", "two"]);
        assert_eq!(text.len(), 7);
        assert_eq!(text, "one-two");
    }

    #[test]
    fn capacity_only_buffer_starts_empty() {
        let text = TextBuffer::with_capacity(64);
        assert!(text.is_empty());
        assert!(text.is_blank());
    }

    #[test]
    fn char_at_rejects_out_of_range() {
        let text = TextBuffer::from("åβc");
        assert_eq!(text.char_at(1), Ok('β'));
        assert_eq!(
            text.char_at(3),
            Err(TextError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn sub_sequence_is_half_open() {
        let text = TextBuffer::from("abcdef");
        assert_eq!(text.sub_sequence(1, 3).as_deref(), Ok("bc"));
        assert_eq!(text.sub_sequence(2, 2).as_deref(), Ok(""));
        assert!(text.sub_sequence(3, 2).is_err());
        assert!(text.sub_sequence(0, 7).is_err());
    }

    #[test]
    fn ordering_is_lexicographic_with_prefixes_first() {
        let ab = TextBuffer::from("ab");
        let abc = TextBuffer::from("abc");
        let b = TextBuffer::from("b");
        assert!(ab < abc);
        assert!(abc < b);
        assert_eq!(ab.partial_cmp("ab"), Some(Ordering::Equal));
        assert!(ab < "abc");
    }

    #[test]
    fn equality_ignores_options() {
        let plain = TextBuffer::from("x");
        let mut configured = TextBuffer::with_options(TextOptions {
            line_ending: crate::LineEnding::CrLf,
        });
        configured.add('x');
        assert_eq!(plain, configured);
    }

    #[test]
    fn add_accepts_text_chars_and_numbers() {
        let mut text = TextBuffer::new();
        text.add("v").add(1).add('.').add(2.5).add_all(["-", "rc"]);
        assert_eq!(text, "v1.2.5-rc");
    }

    #[test]
    fn add_appends_the_full_rendering() {
        struct Version(u8, u8);

        impl fmt::Display for Version {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "v{}", self.0)?;
                f.write_str(".")?;
                write!(f, "{}", self.1)
            }
        }

        let mut text = TextBuffer::from("at ");
        text.add(Version(1, 12)).add(format_args!("-{}", "rc"));
        assert_eq!(text, "at v1.12-rc");
    }

    #[test]
    fn repeat_prepends_for_negative_counts() {
        let mut text = TextBuffer::from("x");
        text.repeat("ab", 2).repeat("-", -3).repeat_char('!', 0);
        assert_eq!(text, "---xabab");
    }

    #[test]
    fn skip_and_take_clamp() {
        let mut text = TextBuffer::from("abcdef");
        text.skip(2).take(3);
        assert_eq!(text, "cde");
        text.take(10).skip(10);
        assert!(text.is_empty());
    }

    #[test]
    fn lossy_bytes_round_trip_through_to_bytes() {
        let text = TextBuffer::from_utf8_lossy(b"caf\xc3\xa9 \xff");
        assert_eq!(text, "café \u{FFFD}");
        assert_eq!(TextBuffer::from("café").to_bytes(), "café".as_bytes());
    }

    #[test]
    fn line_breaks_follow_options() {
        let mut text = TextBuffer::with_options(TextOptions {
            line_ending: crate::LineEnding::Lf,
        });
        text.add("a").br(2).space(2).add("b");
        assert_eq!(text, "a\n\n  b");
    }

    #[test]
    fn parsing_methods_classify_content() {
        assert_eq!(TextBuffer::from("-12").to_integer(), Some(-12));
        assert!(TextBuffer::from("-12").is_int());
        assert_eq!(TextBuffer::from("1.5").to_long(), None);
        assert_eq!(TextBuffer::from("true").to_boolean(), Some(true));
        assert_eq!(TextBuffer::from("").to_char(), None);
    }
}
