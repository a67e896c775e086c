#![allow(missing_docs)]

/// A source template with placeholders and a block comment to fill in.
pub const TEMPLATE: &str = "// generated by {{tool}}
pub struct {{name}} {
    /* fields */
}";

/// A manifest that is not valid UTF-8: the owner line ends in a lone
/// Latin-1 byte.
pub const MANIFEST: &[u8] = b"[package]
name = \"old-name\"
version = \"0.1.0\"
# owner: caf\xe9";

pub const IDENTIFIERS: &[&str] = &[
    "HttpServer",
    "parse_url",
    "my-app.Config",
    "  Trimmed Name  ",
    "XMLHttpRequest",
];

pub const NUMBERS: &[&str] = &["0", "+7", "-3", "-.5", "1.", "12a"];
