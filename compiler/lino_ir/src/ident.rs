//! Identifier character classes.
//!
//! Identifiers are `[A-Za-z_]` followed by word characters, where a word
//! character is any alphanumeric character or `_`.

/// Whether `c` may start an identifier.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` may continue an identifier.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether the whole of `s` is one identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_word_char),
        _ => false,
    }
}
