use log::{debug, trace};
use regex::Regex;

use crate::{
    TextBuffer, TextError,
    search::{find, rfind},
};

impl TextBuffer {
    /// Replaces every occurrence of `search` with `replacement`.
    ///
    /// Matching is literal. See [`find_and_replace_n`](Self::find_and_replace_n).
    pub fn find_and_replace(&mut self, search: &str, replacement: &str) -> &mut Self {
        let max = self.signed_len();
        self.find_and_replace_n(search, replacement, max)
    }

    /// Replaces up to `|max|` literal occurrences of `search`.
    ///
    /// The sign of `max` picks the direction:
    ///
    /// - `max >= 0` scans left to right and replaces the first `max`
    ///   occurrences;
    /// - `max < 0` scans right to left and replaces the last `|max|`
    ///   occurrences.
    ///
    /// Occurrences never overlap and inserted text is never rescanned, in
    /// either direction. Going right to left, the scan resumes just before
    /// the replaced occurrence, so a replacement that forms a new occurrence
    /// together with the text before it is left alone: `"aab"` with `"ab"`
    /// → `"b"` and `max = -2` gives `"ab"`, not `"b"`. An empty `search`
    /// leaves the buffer untouched.
    ///
    /// ```rust
    /// use textcraft::TextBuffer;
    ///
    /// assert_eq!(TextBuffer::from("aaa").find_and_replace_n("a", "b", 2), &"bba");
    /// assert_eq!(TextBuffer::from("aaa").find_and_replace_n("a", "b", -2), &"abb");
    /// ```
    pub fn find_and_replace_n(&mut self, search: &str, replacement: &str, max: isize) -> &mut Self {
        if search.is_empty() {
            return self;
        }

        let search: Vec<char> = search.chars().collect();
        let replacement: Vec<char> = replacement.chars().collect();
        let limit = max.unsigned_abs();
        let mut count = 0;

        if max < 0 {
            let mut end = self.len();
            while count < limit && end >= search.len() {
                let start = end - search.len();
                if self.chars()[start..end] == *search {
                    self.chars_mut()
                        .splice(start..end, replacement.iter().copied());
                    count += 1;
                    end = start;
                } else {
                    end -= 1;
                }
            }
        } else {
            let mut from = 0;
            while count < limit {
                let Some(start) = find(self.chars(), &search, from) else {
                    break;
                };
                self.chars_mut()
                    .splice(start..start + search.len(), replacement.iter().copied());
                count += 1;
                from = start + replacement.len();
            }
        }

        trace!("find_and_replace: {count} of at most {max} occurrences replaced");
        self
    }

    /// Replaces every match of the regular expression `pattern` with the
    /// literal `replacement`.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidPattern`] if `pattern` does not compile. The buffer
    /// is unchanged in that case.
    pub fn replace(&mut self, pattern: &str, replacement: &str) -> Result<&mut Self, TextError> {
        self.replace_n(pattern, replacement, usize::MAX)
    }

    /// Replaces the first `max` matches of the regular expression `pattern`
    /// with the literal `replacement`.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidPattern`] if `pattern` does not compile.
    pub fn replace_n(
        &mut self,
        pattern: &str,
        replacement: &str,
        max: usize,
    ) -> Result<&mut Self, TextError> {
        let regex = Regex::new(pattern)
            .inspect_err(|err| debug!("rejected replacement pattern {pattern:?}: {err}"))?;
        Ok(self.replace_regex(&regex, replacement, max))
    }

    /// Replaces the first `max` matches of `regex` with the literal
    /// `replacement`.
    ///
    /// Matches are found in a snapshot of the content taken before any
    /// replacement, so replaced text is never matched again. `$` in
    /// `replacement` has no special meaning.
    pub fn replace_regex(&mut self, regex: &Regex, replacement: &str, max: usize) -> &mut Self {
        let snapshot = self.to_string();
        let replacement_len = replacement.chars().count();

        // Char position of `scanned_bytes` within the snapshot.
        let mut scanned_bytes = 0;
        let mut scanned_chars = 0;
        let mut grown = 0;
        let mut shrunk = 0;
        let mut count = 0;

        for found in regex.find_iter(&snapshot).take(max) {
            scanned_chars += snapshot[scanned_bytes..found.start()].chars().count();
            let matched_len = found.as_str().chars().count();
            let start = scanned_chars + grown - shrunk;

            self.splice(start, start + matched_len, replacement);

            grown += replacement_len;
            shrunk += matched_len;
            scanned_chars += matched_len;
            scanned_bytes = found.end();
            count += 1;
        }

        trace!("replace: {count} matches of {:?} replaced", regex.as_str());
        self
    }

    /// Replaces the characters in `from..to` (or `from..=to` when `inclusive`)
    /// with the concatenation of `parts`.
    ///
    /// Both bounds are clamped to the buffer length; a range that is inverted
    /// after clamping leaves the buffer untouched.
    pub fn replace_from<I, S>(&mut self, from: usize, to: usize, inclusive: bool, parts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let len = self.len();
        let end = if inclusive { to.saturating_add(1) } else { to };
        let (start, end) = (from.min(len), end.min(len));
        if start > end {
            trace!("replace_from: skipped inverted range {start}..{end}");
            return self;
        }

        let replacement = concat(parts);
        self.splice(start, end, &replacement);
        self
    }

    /// Replaces the region that starts at the first `from_marker` and ends at
    /// the first `to_marker` found after it.
    ///
    /// The region always includes `from_marker`. It includes `to_marker` only
    /// when `inclusive` is set. Nothing happens unless both markers are found.
    ///
    /// ```rust
    /// use textcraft::TextBuffer;
    ///
    /// let mut text = TextBuffer::from("pre{old}post");
    /// text.replace_between("{", "}", true, ["X"]);
    /// assert_eq!(text, "preXpost");
    /// ```
    pub fn replace_between<I, S>(
        &mut self,
        from_marker: &str,
        to_marker: &str,
        inclusive: bool,
        parts: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let to_marker: Vec<char> = to_marker.chars().collect();
        let Some(from) = self.index_of(from_marker) else {
            trace!("replace_between: start marker {from_marker:?} not found");
            return self;
        };
        let Some(to) = find(self.chars(), &to_marker, from) else {
            trace!("replace_between: end marker not found after {from}");
            return self;
        };

        let end = if inclusive { to + to_marker.len() } else { to };
        self.replace_from(from, end, false, parts)
    }

    /// Replaces the region from the last `from_marker` to the last
    /// `to_marker` at or after it.
    ///
    /// Marker handling matches [`replace_between`](Self::replace_between),
    /// searching from the end instead.
    pub fn replace_last_between<I, S>(
        &mut self,
        from_marker: &str,
        to_marker: &str,
        inclusive: bool,
        parts: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let to_marker: Vec<char> = to_marker.chars().collect();
        let Some(from) = self.last_index_of(from_marker) else {
            return self;
        };
        let Some(to) = rfind(self.chars(), &to_marker, self.len()).filter(|&to| to >= from) else {
            return self;
        };

        let end = if inclusive { to + to_marker.len() } else { to };
        self.replace_from(from, end, false, parts)
    }
}

fn concat<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().fold(String::new(), |mut joined, part| {
        joined.push_str(part.as_ref());
        joined
    })
}
