#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcraft::{NumberKind, SlicePolicy, TextBuffer, TrimSide, is_number, number};

/// One edit applied to the buffer under test.
#[derive(Debug, Arbitrary)]
enum Op {
    Add(String),
    Insert(i16, Vec<String>),
    FindAndReplace(String, String, i8),
    Replace(String, String, u8),
    ReplaceFrom(u16, u16, bool, String),
    ReplaceBetween(String, String, bool, String),
    Slice(i16, i16, SlicePolicy),
    TrySlice(i16, i16, SlicePolicy),
    Trim(TrimSide, Vec<String>),
    Kebab,
    Capitalize,
    Repeat(String, i8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    seed: String,
    ops: Vec<Op>,
    kind: NumberKind,
}

fuzz_target!(|input: Input| {
    let mut text = TextBuffer::from(input.seed.as_str());

    for op in input.ops {
        let before = text.clone();
        match op {
            Op::Add(s) => {
                text.add(&s);
            }
            Op::Insert(offset, parts) => {
                text.insert(offset.into(), &parts);
            }
            Op::FindAndReplace(search, replacement, max) => {
                text.find_and_replace_n(&search, &replacement, max.into());
            }
            Op::Replace(pattern, replacement, max) => {
                if text.replace_n(&pattern, &replacement, max.into()).is_err() {
                    assert_eq!(text, before, "failed regex replace must not edit");
                }
            }
            Op::ReplaceFrom(from, to, inclusive, part) => {
                text.replace_from(from.into(), to.into(), inclusive, [part]);
            }
            Op::ReplaceBetween(from, to, inclusive, part) => {
                text.replace_between(&from, &to, inclusive, [part]);
            }
            Op::Slice(from, to, policy) => {
                text.slice(from.into(), to.into(), policy);
                assert!(text.len() <= before.len());
            }
            Op::TrySlice(from, to, policy) => {
                if text.try_slice(from.into(), to.into(), policy).is_err() {
                    assert_eq!(text, before, "failed slice must not edit");
                }
            }
            Op::Trim(side, patterns) => {
                text.trim_matches(side, &patterns);
                let once = text.clone();
                text.trim_matches(side, &patterns);
                assert_eq!(text, once, "trimming twice differs from once");
            }
            Op::Kebab => {
                text.to_kebab();
                let once = text.clone();
                text.to_kebab();
                assert_eq!(text, once, "kebab casing is not idempotent");
            }
            Op::Capitalize => {
                text.capitalize();
            }
            Op::Repeat(s, count) => {
                text.repeat(&s, count.into());
            }
        }

        let rendered = text.to_string();
        assert_eq!(rendered.chars().count(), text.len());
        assert_eq!(text.to_bytes(), rendered.as_bytes());
    }

    let rendered = text.to_string();
    if is_number(&rendered, input.kind) {
        assert!(number::to_double(&rendered).is_some());
        assert!(number::to_big_decimal(&rendered).is_some());
    }
});
