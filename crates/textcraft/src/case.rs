use crate::TextBuffer;

/// Characters recognised as word delimiters in existing text.
const DELIMITERS: [char; 4] = [' ', '-', '.', '_'];

impl TextBuffer {
    /// Rewrites the content as words joined by `delimiter`.
    ///
    /// Walks the text once, left to right:
    ///
    /// - an existing delimiter (space, `-`, `_`, `.`) becomes `delimiter`,
    ///   unless it directly follows another delimiter or sits at either end,
    ///   in which case it is removed;
    /// - an uppercase letter starts a new word: `delimiter` is inserted before
    ///   it unless one precedes it already, and it is lowercased when
    ///   `lowercase` is set;
    /// - with `lowercase` unset, the first letter after a delimiter is
    ///   uppercased instead.
    ///
    /// A trailing `delimiter` is trimmed at the end.
    ///
    /// ```rust
    /// use textcraft::TextBuffer;
    ///
    /// let mut text = TextBuffer::from("my_appName");
    /// text.to_delimited_name('.', false);
    /// assert_eq!(text, "my.App.Name");
    /// ```
    pub fn to_delimited_name(&mut self, delimiter: char, lowercase: bool) -> &mut Self {
        let chars = self.chars_mut();
        let mut delimited = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if DELIMITERS.contains(&c) {
                if delimited || i == 0 || i + 1 >= chars.len() {
                    chars.remove(i);
                    delimited = true;
                    continue;
                }
                chars[i] = delimiter;
                delimited = true;
                i += 1;
            } else if c.is_uppercase() {
                let width = if lowercase {
                    replace_char(chars, i, c.to_lowercase())
                } else {
                    1
                };
                if !delimited && i > 0 {
                    chars.insert(i, delimiter);
                    i += 1;
                }
                delimited = false;
                i += width;
            } else {
                let width = if !lowercase && delimited {
                    replace_char(chars, i, c.to_uppercase())
                } else {
                    1
                };
                delimited = false;
                i += width;
            }
        }

        self.rtrim_char(delimiter)
    }

    /// Rewrites the content in lower kebab case: `fooBar baz` becomes
    /// `foo-bar-baz`.
    pub fn to_kebab(&mut self) -> &mut Self {
        self.to_delimited_name('-', true)
    }

    /// Rewrites the content in lower snake case: `fooBar baz` becomes
    /// `foo_bar_baz`.
    pub fn to_snake(&mut self) -> &mut Self {
        self.to_delimited_name('_', true)
    }

    /// Uppercases the first alphabetic character if it is lowercase.
    ///
    /// Leading non-alphabetic characters are skipped, so `"1st place"`
    /// becomes `"1St place"`.
    pub fn capitalize(&mut self) -> &mut Self {
        let chars = self.chars_mut();
        if let Some(i) = chars.iter().position(|c| c.is_alphabetic()) {
            let c = chars[i];
            if c.is_lowercase() {
                replace_char(chars, i, c.to_uppercase());
            }
        }
        self
    }
}

/// Replaces the char at `i` with `mapped`, which may be more than one char
/// long. Returns the number of chars written.
fn replace_char(chars: &mut Vec<char>, i: usize, mapped: impl Iterator<Item = char>) -> usize {
    let before = chars.len();
    chars.splice(i..=i, mapped);
    chars.len() + 1 - before
}
