/// Configuration options for a [`TextBuffer`](crate::TextBuffer).
///
/// Options only affect operations that have to pick a platform convention.
/// They never take part in equality, ordering or hashing of a buffer.
///
/// # Examples
///
/// ```rust
/// use textcraft::{LineEnding, TextBuffer, TextOptions};
///
/// let mut text = TextBuffer::with_options(TextOptions {
///     line_ending: LineEnding::CrLf,
/// });
/// text.add("a").br(1).add("b");
/// assert_eq!(text, "a\r\nb");
/// ```
///
/// # Default
///
/// The default line ending is [`LineEnding::Native`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Line separator written by [`TextBuffer::br`](crate::TextBuffer::br).
    ///
    /// # Default
    ///
    /// [`LineEnding::Native`]
    pub line_ending: LineEnding,
}

/// Line separator convention.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r\n` on Windows targets, `\n` everywhere else.
    #[default]
    Native,
}

impl LineEnding {
    /// The separator as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            #[cfg(windows)]
            LineEnding::Native => "\r\n",
            #[cfg(not(windows))]
            LineEnding::Native => "\n",
        }
    }
}
