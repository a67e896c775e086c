use quickcheck::QuickCheck;
use rstest::rstest;

use super::arbitrary::Wordish;
use crate::{TextBuffer, TrimSide};

#[rstest]
#[case(TrimSide::Left, "  a b  ", "a b  ")]
#[case(TrimSide::Right, "  a b  ", "  a b")]
#[case(TrimSide::Both, "\t a b \n", "a b")]
#[case(TrimSide::Both, "   ", "")]
fn whitespace(#[case] side: TrimSide, #[case] input: &str, #[case] expected: &str) {
    let mut text = TextBuffer::from(input);
    match side {
        TrimSide::Left => text.ltrim(),
        TrimSide::Right => text.rtrim(),
        TrimSide::Both => text.trim(),
    };
    assert_eq!(text, expected);
}

#[rstest]
#[case(TrimSide::Left, &["ab", "a"], "ababx", "x")]
#[case(TrimSide::Left, &["a", "ab"], "abax", "x")]
#[case(TrimSide::Left, &["a"], "aaa", "")]
#[case(TrimSide::Right, &["--", "-="], "x-=--", "x")]
#[case(TrimSide::Right, &["/"], "/path//", "/path")]
#[case(TrimSide::Both, &["<>"], "<><>a<>", "a")]
#[case(TrimSide::Both, &["\r\n", "\n"], "\n\r\nbody\r\n\n", "body")]
#[case(TrimSide::Both, &["zz"], "z body z", "z body z")]
fn patterns(
    #[case] side: TrimSide,
    #[case] pats: &[&str],
    #[case] input: &str,
    #[case] expected: &str,
) {
    let mut text = TextBuffer::from(input);
    text.trim_matches(side, pats);
    assert_eq!(text, expected);
}

#[test]
fn no_patterns_falls_back_to_whitespace() {
    let mut text = TextBuffer::from("  a  ");
    text.trim_any(Vec::<&str>::new());
    assert_eq!(text, "a");

    let mut text = TextBuffer::from("  a  ");
    text.ltrim_any(Vec::<String>::new());
    assert_eq!(text, "a  ");
}

#[test]
fn empty_patterns_match_nothing() {
    let mut text = TextBuffer::from("  a  ");
    text.trim_any([""]);
    assert_eq!(text, "  a  ");
}

#[test]
fn single_char_trims() {
    let mut text = TextBuffer::from("--flag--");
    text.ltrim_char('-');
    assert_eq!(text, "flag--");
    text.rtrim_char('-');
    assert_eq!(text, "flag");
    text.rtrim_char('x');
    assert_eq!(text, "flag");
}

#[test]
fn any_forms_pick_their_side() {
    let mut text = TextBuffer::from("xxaxx");
    text.rtrim_any(["x"]);
    assert_eq!(text, "xxa");
    text.ltrim_any(["x"]);
    assert_eq!(text, "a");
}

/// Property: trimming twice is the same as trimming once, for every side.
#[test]
fn trim_is_idempotent() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Wordish, side: TrimSide) -> bool {
        let patterns = ["ab", "b", " ", "._"];
        let mut once = TextBuffer::from(input.0.as_str());
        once.trim_matches(side, patterns);
        let mut twice = once.clone();
        twice.trim_matches(side, patterns);
        once == twice
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Wordish, TrimSide) -> bool);
}
