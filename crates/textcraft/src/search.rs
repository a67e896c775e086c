use crate::TextBuffer;

impl TextBuffer {
    /// Position of the first occurrence of `needle`.
    #[must_use]
    pub fn index_of(&self, needle: &str) -> Option<usize> {
        self.index_of_from(needle, 0)
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    ///
    /// A negative `from` counts from the end. A `from` past the end finds
    /// nothing.
    #[must_use]
    pub fn index_of_from(&self, needle: &str, from: isize) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        let from = self.clamp_index(self.resolve(from));
        find(self.chars(), &needle, from)
    }

    /// Position of the first occurrence of `c`.
    #[must_use]
    pub fn index_of_char(&self, c: char) -> Option<usize> {
        self.chars().iter().position(|&x| x == c)
    }

    /// Position of the last occurrence of `needle`.
    #[must_use]
    pub fn last_index_of(&self, needle: &str) -> Option<usize> {
        self.last_index_of_from(needle, self.signed_len())
    }

    /// Position of the last occurrence of `needle` that starts at or before
    /// `from`.
    ///
    /// A negative `from` counts from the end; one that still resolves below
    /// zero finds nothing.
    #[must_use]
    pub fn last_index_of_from(&self, needle: &str, from: isize) -> Option<usize> {
        let from = usize::try_from(self.resolve(from)).ok()?;
        let needle: Vec<char> = needle.chars().collect();
        rfind(self.chars(), &needle, from)
    }

    /// Position of the last occurrence of `c`.
    #[must_use]
    pub fn last_index_of_char(&self, c: char) -> Option<usize> {
        self.chars().iter().rposition(|&x| x == c)
    }
}

/// First start position `>= from` where `needle` occurs in `haystack`.
pub(crate) fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    if needle.is_empty() {
        return Some(from);
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}

/// Last start position `<= from` where `needle` occurs in `haystack`.
pub(crate) fn rfind(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    let last_start = haystack.len().checked_sub(needle.len())?.min(from);
    (0..=last_start)
        .rev()
        .find(|&i| haystack[i..i + needle.len()] == *needle)
}
