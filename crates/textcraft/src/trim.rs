use std::collections::BTreeMap;

use crate::TextBuffer;

/// Which ends of the buffer a trim applies to.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrimSide {
    /// The beginning only.
    Left,
    /// The end only.
    Right,
    /// Both ends.
    #[default]
    Both,
}

impl TrimSide {
    fn left(self) -> bool {
        matches!(self, TrimSide::Left | TrimSide::Both)
    }

    fn right(self) -> bool {
        matches!(self, TrimSide::Right | TrimSide::Both)
    }
}

impl TextBuffer {
    /// Removes leading and trailing whitespace.
    pub fn trim(&mut self) -> &mut Self {
        self.ltrim().rtrim()
    }

    /// Removes leading whitespace.
    pub fn ltrim(&mut self) -> &mut Self {
        let n = self.chars().iter().take_while(|c| c.is_whitespace()).count();
        self.skip(n)
    }

    /// Removes trailing whitespace.
    pub fn rtrim(&mut self) -> &mut Self {
        let n = self.chars().iter().rev().take_while(|c| c.is_whitespace()).count();
        self.take(self.len() - n)
    }

    /// Removes every leading `c`.
    pub fn ltrim_char(&mut self, c: char) -> &mut Self {
        let n = self.chars().iter().take_while(|&&x| x == c).count();
        self.skip(n)
    }

    /// Removes every trailing `c`.
    pub fn rtrim_char(&mut self, c: char) -> &mut Self {
        let n = self.chars().iter().rev().take_while(|&&x| x == c).count();
        self.take(self.len() - n)
    }

    /// Strips any of `patterns` from the beginning, repeatedly. With no
    /// patterns at all this trims whitespace.
    pub fn ltrim_any<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trim_matches(TrimSide::Left, patterns)
    }

    /// Strips any of `patterns` from the end, repeatedly. With no patterns at
    /// all this trims whitespace.
    pub fn rtrim_any<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trim_matches(TrimSide::Right, patterns)
    }

    /// Strips any of `patterns` from both ends, repeatedly. With no patterns
    /// at all this trims whitespace.
    pub fn trim_any<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trim_matches(TrimSide::Both, patterns)
    }

    /// Strips `patterns` from the chosen `side` until none of them matches.
    ///
    /// At each step the longest matching pattern wins, so a shorter pattern
    /// that happens to be a prefix of a longer one never shadows it. Empty
    /// patterns are ignored; an empty pattern set trims whitespace instead.
    ///
    /// ```rust
    /// use textcraft::{TextBuffer, TrimSide};
    ///
    /// let mut text = TextBuffer::from("ababx");
    /// text.trim_matches(TrimSide::Left, ["a", "ab"]);
    /// assert_eq!(text, "x");
    /// ```
    pub fn trim_matches<I, S>(&mut self, side: TrimSide, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(candidates) = Candidates::new(patterns) else {
            return match side {
                TrimSide::Left => self.ltrim(),
                TrimSide::Right => self.rtrim(),
                TrimSide::Both => self.trim(),
            };
        };

        if side.left() {
            let mut start = 0;
            while let Some(len) = candidates.longest_at(self.chars(), start) {
                start += len;
            }
            self.skip(start);
        }

        if side.right() {
            let mut end = self.len();
            while let Some(len) = candidates.longest_before(self.chars(), end) {
                end -= len;
            }
            self.take(end);
        }
        self
    }
}

/// Trim candidates grouped by length, so the longest can be tried first.
struct Candidates {
    by_len: BTreeMap<usize, Vec<Vec<char>>>,
}

impl Candidates {
    /// `None` when no patterns were supplied at all.
    fn new<I, S>(patterns: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut supplied = false;
        let mut by_len: BTreeMap<usize, Vec<Vec<char>>> = BTreeMap::new();
        for pattern in patterns {
            supplied = true;
            let chars: Vec<char> = pattern.as_ref().chars().collect();
            if !chars.is_empty() {
                by_len.entry(chars.len()).or_default().push(chars);
            }
        }
        supplied.then_some(Self { by_len })
    }

    /// Length of the longest candidate occurring at `start`.
    fn longest_at(&self, text: &[char], start: usize) -> Option<usize> {
        self.by_len.iter().rev().find_map(|(&len, group)| {
            let window = text.get(start..start.checked_add(len)?)?;
            group.iter().any(|c| c == window).then_some(len)
        })
    }

    /// Length of the longest candidate ending at `end`.
    fn longest_before(&self, text: &[char], end: usize) -> Option<usize> {
        self.by_len.iter().rev().find_map(|(&len, group)| {
            let window = text.get(end.checked_sub(len)?..end)?;
            group.iter().any(|c| c == window).then_some(len)
        })
    }
}
