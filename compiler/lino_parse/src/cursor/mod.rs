//! Character cursor over a single input line.
//!
//! The cursor only moves forward. Every `eat_*` method either consumes what
//! it matched or leaves the position untouched, so a failed match can be
//! abandoned without rewinding.

use lino_ir::{is_ident_start, is_word_char};


/// Forward-only cursor over a `&str`.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `src`.
    pub(crate) fn new(src: &'src str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub(crate) fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    /// Peek at the next character without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume `c` if it is next.
    pub(crate) fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a run of whitespace, returning how many characters were eaten.
    pub(crate) fn eat_whitespace(&mut self) -> usize {
        let rest = self.rest();
        let eaten = rest.len() - rest.trim_start().len();
        self.pos += eaten;
        rest[..eaten].chars().count()
    }

    /// Consume an identifier (`[A-Za-z_]` then word characters).
    pub(crate) fn eat_identifier(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        if !self.peek().is_some_and(is_ident_start) {
            return None;
        }
        let len = rest
            .char_indices()
            .find(|&(_, c)| !is_word_char(c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        Some(&rest[..len])
    }
}
