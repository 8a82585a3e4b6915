//! Cursor over a token slice for the Pratt parser.
//!
//! Provides lookahead, expectation and rewind helpers. Tokens are borrowed
//! from the caller's slice, so a peeked token stays usable while the cursor
//! moves.

use crate::error::{Found, ParseError, ParseErrorKind};
use crate::{SyntaxKind, Token};

#[derive(Debug)]
pub(super) struct TokenStream<'t, 'src> {
    tokens: &'t [Token<'src>],
    src_len: usize,
    cursor: usize,
}

impl<'t, 'src> TokenStream<'t, 'src> {
    pub(super) const fn new(tokens: &'t [Token<'src>], src_len: usize) -> Self {
        Self {
            tokens,
            src_len,
            cursor: 0,
        }
    }

    pub(super) const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor back to a position previously returned by
    /// [`Self::cursor`].
    pub(super) fn reset(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.tokens.len());
    }

    pub(super) fn peek(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.cursor)
    }

    pub(super) fn peek_kind(&self) -> Option<SyntaxKind> {
        self.peek().map(|t| t.kind)
    }

    pub(super) fn next_tok(&mut self) -> Option<&'t Token<'src>> {
        let tok = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(tok)
    }

    /// Consume the next token when it has the given kind.
    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.peek_kind() == Some(kind);
        if matched {
            self.cursor += 1;
        }
        matched
    }

    /// Consume a token of `kind` or fail with an unexpected-token error.
    pub(super) fn expect(
        &mut self,
        kind: SyntaxKind,
        expected: &'static str,
    ) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Byte offset of the next token, or the source length at end of input.
    pub(super) fn current_offset(&self) -> usize {
        self.peek().map_or(self.src_len, Token::start)
    }

    pub(super) fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Build an error describing the next token as unexpected.
    pub(super) fn unexpected(&self, expected: &'static str) -> ParseError {
        let found = self.peek().map_or(Found::EndOfInput, |t| Found::Token {
            kind: t.kind,
            text: t.text.to_owned(),
        });
        ParseError::new(
            self.current_offset(),
            ParseErrorKind::Unexpected { expected, found },
        )
    }
}
