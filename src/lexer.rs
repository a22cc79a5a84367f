//! Argument reader for path data.
//!
//! The lexer keeps no state between calls: every operation takes a byte
//! position into the source and hands back the position just past what it
//! consumed.

use crate::errors::{ParseError, SourceContext};

/// The only whitespace the path grammar knows
pub const SPACE: u8 = b' ';

pub struct Lexer<'a> {
    ctx: &'a SourceContext,
}

impl<'a> Lexer<'a> {
    pub fn new(ctx: &'a SourceContext) -> Self {
        Self { ctx }
    }

    pub fn source(&self) -> &'a str {
        &self.ctx.source
    }

    /// The character starting at `pos`, if any
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.ctx.source.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// Skip a run of spaces starting at `pos`.
    pub fn skip_spaces(&self, mut pos: usize) -> usize {
        let bytes = self.ctx.source.as_bytes();
        while pos < bytes.len() && bytes[pos] == SPACE {
            pos += 1;
        }
        pos
    }

    /// Read one integer literal: spaces, an optional `-`, then at least one digit.
    ///
    /// Returns the position after the literal together with its text
    /// (sign included).
    pub fn read_literal(&self, pos: usize) -> Result<(usize, &'a str), ParseError> {
        let source = self.source();
        let bytes = source.as_bytes();

        let start = self.skip_spaces(pos);
        let mut end = start;
        if end < bytes.len() && bytes[end] == b'-' {
            end += 1;
        }

        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        if end == digits_start {
            return Err(self.malformed_argument(digits_start));
        }

        crate::log::trace!(start, end, literal = &source[start..end], "read literal");
        Ok((end, &source[start..end]))
    }

    /// Read one literal and convert it to an `i32`.
    pub fn read_arg(&self, pos: usize) -> Result<(usize, i32), ParseError> {
        let (end, literal) = self.read_literal(pos)?;
        let value = literal
            .parse::<i32>()
            .map_err(|_| self.argument_out_of_range(end - literal.len(), literal.len()))?;
        Ok((end, value))
    }

    /// Read exactly `N` arguments in sequence.
    pub fn read_args<const N: usize>(&self, mut pos: usize) -> Result<(usize, [i32; N]), ParseError> {
        let mut args = [0; N];
        for arg in args.iter_mut() {
            let (next, value) = self.read_arg(pos)?;
            *arg = value;
            pos = next;
        }
        Ok((pos, args))
    }

    pub(crate) fn malformed_argument(&self, position: usize) -> ParseError {
        let len = self.char_at(position).map_or(0, char::len_utf8);
        ParseError::MalformedArgument {
            position,
            src: self.ctx.named_source(),
            span: self.ctx.span(position, len),
        }
    }

    pub(crate) fn unknown_command(&self, command: char, position: usize) -> ParseError {
        ParseError::UnknownCommand {
            command,
            position,
            src: self.ctx.named_source(),
            span: self.ctx.span(position, command.len_utf8()),
        }
    }

    fn argument_out_of_range(&self, position: usize, len: usize) -> ParseError {
        ParseError::ArgumentOutOfRange {
            position,
            src: self.ctx.named_source(),
            span: self.ctx.span(position, len),
        }
    }
}
