//! One-shot helpers over plain string slices.
//!
//! Each function copies its input into a transient [`TextBuffer`], applies a
//! single operation and returns the resulting `String`. Reach for the buffer
//! itself when chaining several edits.
//!
//! ```rust
//! use textcraft::text;
//!
//! assert_eq!(text::to_kebab("MyApp"), "my-app");
//! assert_eq!(text::capitalize("my app"), "My app");
//! ```
use core::cmp::Ordering;

use crate::{SlicePolicy, TextBuffer, TextError, TrimSide};

/// Lexicographic comparison by code point; a strict prefix sorts first.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().cmp(b.chars())
}

/// Removes leading and trailing whitespace.
#[must_use]
pub fn trim(s: &str) -> String {
    TextBuffer::from(s).trim().to_string()
}

/// Strips `patterns` from the chosen side of `s`, longest match first.
#[must_use]
pub fn trim_matches(s: &str, side: TrimSide, patterns: &[&str]) -> String {
    TextBuffer::from(s).trim_matches(side, patterns).to_string()
}

/// Uppercases the first alphabetic character of `s` if it is lowercase.
#[must_use]
pub fn capitalize(s: &str) -> String {
    TextBuffer::from(s).capitalize().to_string()
}

/// Converts `s` to lower kebab case.
#[must_use]
pub fn to_kebab(s: &str) -> String {
    TextBuffer::from(s).to_kebab().to_string()
}

/// Converts `s` to lower snake case.
#[must_use]
pub fn to_snake(s: &str) -> String {
    TextBuffer::from(s).to_snake().to_string()
}

/// Replaces every literal occurrence of `search` in `s`.
#[must_use]
pub fn find_and_replace(s: &str, search: &str, replacement: &str) -> String {
    TextBuffer::from(s)
        .find_and_replace(search, replacement)
        .to_string()
}

/// Replaces every match of the regular expression `pattern` in `s` with the
/// literal `replacement`.
///
/// # Errors
///
/// [`TextError::InvalidPattern`] if `pattern` does not compile.
pub fn replace(s: &str, pattern: &str, replacement: &str) -> Result<String, TextError> {
    Ok(TextBuffer::from(s).replace(pattern, replacement)?.to_string())
}

/// Replaces the first `max` matches of `pattern` in `s`.
///
/// # Errors
///
/// [`TextError::InvalidPattern`] if `pattern` does not compile.
pub fn replace_n(
    s: &str,
    pattern: &str,
    replacement: &str,
    max: usize,
) -> Result<String, TextError> {
    Ok(TextBuffer::from(s)
        .replace_n(pattern, replacement, max)?
        .to_string())
}

/// Slices `s` with the given policy, clamping out-of-range indices.
#[must_use]
pub fn slice(s: &str, from: isize, to: isize, policy: SlicePolicy) -> String {
    TextBuffer::from(s).slice(from, to, policy).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_leave_their_input_alone() {
        let input = String::from("  fooBar  ");
        assert_eq!(trim(&input), "fooBar");
        assert_eq!(to_kebab(input.trim()), "foo-bar");
        assert_eq!(to_snake(input.trim()), "foo_bar");
        assert_eq!(input, "  fooBar  ");
    }

    #[test]
    fn compare_orders_prefixes_first() {
        assert_eq!(compare("ab", "abc"), Ordering::Less);
        assert_eq!(compare("b", "abc"), Ordering::Greater);
        assert_eq!(compare("", ""), Ordering::Equal);
    }

    #[test]
    fn replace_reports_bad_patterns() {
        assert!(matches!(
            replace("abc", "(", "x"),
            Err(TextError::InvalidPattern(_))
        ));
        assert_eq!(replace_n("a1b22c333", r"\d+", "#", 2).unwrap(), "a#b#c333");
    }

    #[test]
    fn trims_and_slices() {
        assert_eq!(trim_matches("--x--", TrimSide::Right, &["-"]), "--x");
        assert_eq!(slice("abcdef", -3, -1, SlicePolicy::Include), "def");
        assert_eq!(find_and_replace("a.b.c", ".", "::"), "a::b::c");
        assert_eq!(capitalize("élan"), "Élan");
    }
}
