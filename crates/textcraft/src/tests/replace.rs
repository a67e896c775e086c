use regex::Regex;
use rstest::rstest;

use crate::{TextBuffer, TextError};

#[rstest]
#[case("aaa", "a", "b", 2, "bba")]
#[case("aaa", "a", "b", -2, "abb")]
#[case("aaa", "a", "b", 0, "aaa")]
#[case("aaa", "a", "b", 10, "bbb")]
#[case("aaa", "a", "b", -10, "bbb")]
#[case("aaaa", "aa", "b", 1, "baa")]
#[case("aaaa", "aa", "b", -1, "aab")]
#[case("aaa", "aa", "x", -5, "ax")]
#[case("a.b.c", ".", "::", -1, "a.b::c")]
#[case("aab", "ab", "b", -2, "ab")]
#[case("aab", "ab", "b", 2, "ab")]
#[case("abc", "", "x", 5, "abc")]
#[case("", "a", "b", 1, "")]
fn literal_replace_with_direction(
    #[case] text: &str,
    #[case] search: &str,
    #[case] replacement: &str,
    #[case] max: isize,
    #[case] expected: &str,
) {
    let mut buffer = TextBuffer::from(text);
    buffer.find_and_replace_n(search, replacement, max);
    assert_eq!(buffer, expected);
}

#[test]
fn inserted_text_is_never_rescanned() {
    let mut text = TextBuffer::from("a-a");
    text.find_and_replace("a", "aa");
    assert_eq!(text, "aa-aa");

    let mut text = TextBuffer::from("x-x");
    text.find_and_replace_n("x", "xx", -5);
    assert_eq!(text, "xx-xx");
}

#[test]
fn regex_replacement_is_literal_and_offset_corrected() {
    let mut text = TextBuffer::from("a1b22c333d");
    text.replace(r"\d+", "<$0>").unwrap();
    assert_eq!(text, "a<$0>b<$0>c<$0>d");

    let mut text = TextBuffer::from("x1234y5z");
    text.replace(r"\d+", "").unwrap();
    assert_eq!(text, "xyz");
}

#[test]
fn regex_replacement_respects_max() {
    let mut text = TextBuffer::from("one two three");
    text.replace_n(r"\w+", "w", 2).unwrap();
    assert_eq!(text, "w w three");

    let mut text = TextBuffer::from("one two three");
    text.replace_n(r"\w+", "w", 0).unwrap();
    assert_eq!(text, "one two three");
}

#[test]
fn regex_offsets_count_characters() {
    let mut text = TextBuffer::from("ååå1ßß2");
    let digits = Regex::new(r"\d").unwrap();
    text.replace_regex(&digits, "··", usize::MAX);
    assert_eq!(text, "ååå··ßß··");
    assert_eq!(text.len(), 9);
}

#[test]
fn invalid_pattern_leaves_buffer_untouched() {
    let mut text = TextBuffer::from("keep");
    let err = text.replace("[", "x").map(|_| ()).unwrap_err();
    assert!(matches!(err, TextError::InvalidPattern(_)));
    assert!(err.to_string().starts_with("invalid pattern"));
    assert_eq!(text, "keep");
}

#[rstest]
#[case(0, 2, false, "Xcdef")]
#[case(0, 2, true, "Xdef")]
#[case(4, 100, false, "abcdX")]
#[case(6, 6, false, "abcdefX")]
#[case(10, 12, true, "abcdefX")]
#[case(4, 2, false, "abcdef")]
fn range_replacement_clamps(
    #[case] from: usize,
    #[case] to: usize,
    #[case] inclusive: bool,
    #[case] expected: &str,
) {
    let mut text = TextBuffer::from("abcdef");
    text.replace_from(from, to, inclusive, ["X"]);
    assert_eq!(text, expected);
}

#[rstest]
#[case("pre{old}post", "{", "}", true, "preXpost")]
#[case("pre{old}post", "{", "}", false, "preX}post")]
#[case("pre{old}post", "<", "}", true, "pre{old}post")]
#[case("pre{old}post", "{", ">", true, "pre{old}post")]
#[case("}{a}", "{", "}", true, "}X")]
#[case("/* a */ b /* c */", "/*", "*/", true, "X b /* c */")]
fn marker_replacement(
    #[case] text: &str,
    #[case] from: &str,
    #[case] to: &str,
    #[case] inclusive: bool,
    #[case] expected: &str,
) {
    let mut buffer = TextBuffer::from(text);
    buffer.replace_between(from, to, inclusive, ["X"]);
    assert_eq!(buffer, expected);
}

#[test]
fn last_marker_replacement_targets_final_region() {
    let mut text = TextBuffer::from("/* a */ b /* c */");
    text.replace_last_between("/*", "*/", true, ["/* ", "d", " */"]);
    assert_eq!(text, "/* a */ b /* d */");

    let mut text = TextBuffer::from("*/ then /*");
    text.replace_last_between("/*", "*/", true, ["X"]);
    assert_eq!(text, "*/ then /*");
}

#[test]
fn replacement_parts_are_concatenated() {
    let mut text = TextBuffer::from("fn main() {}");
    text.replace_between("{", "}", true, ["{ ", "run()", "; }"]);
    assert_eq!(text, "fn main() { run(); }");
}
