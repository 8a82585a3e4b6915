//! Error types returned by the tokenizer and parser.
//!
//! Both failure kinds are terminal: the first error aborts the call and is
//! reported with the byte offset of the offending character so callers can
//! point at it in user-facing messages.

use crate::SyntaxKind;
use crate::parser::constant::ConstantError;

/// Reasons the tokenizer rejects its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unrecognised character {0:?}")]
    UnexpectedChar(char),
    /// A string literal without its closing quote on the same line.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A backslash followed by something other than a recognised escape.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// A digit-led run that is not a valid integer or floating literal.
    #[error("malformed numeric literal")]
    MalformedNumber,
}

/// A malformed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    /// Byte offset of the offending character.
    pub offset: usize,
    /// What went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    pub(crate) const fn new(offset: usize, kind: LexErrorKind) -> Self {
        Self { offset, kind }
    }
}

/// The token a parser error was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A concrete token with its source text.
    Token { kind: SyntaxKind, text: String },
    /// The token stream was exhausted.
    EndOfInput,
}

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token { kind, text } => write!(f, "{kind} `{text}`"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Reasons the parser rejects a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token did not fit the grammar at this point.
    #[error("expected {expected}, found {found}")]
    Unexpected {
        /// Description of what the grammar allows here.
        expected: &'static str,
        /// The token actually present.
        found: Found,
    },
    /// A membership list entry referenced a field.
    #[error("membership term must be a constant expression")]
    NonConstantTerm,
    /// A membership list entry could not be evaluated.
    #[error("invalid membership term: {0}")]
    InvalidTerm(#[from] ConstantError),
    /// Nesting exceeded [`crate::ParseOptions::max_depth`].
    #[error("expression nesting exceeds the limit of {0}")]
    TooDeep(usize),
}

/// A grammar violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// Byte offset of the offending token, or the source length at end of
    /// input.
    pub offset: usize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }

    /// Description of what was expected, when the error is an unexpected
    /// token.
    #[must_use]
    pub fn expected(&self) -> Option<&'static str> {
        match &self.kind {
            ParseErrorKind::Unexpected { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// The token the error was raised on, when the error is an unexpected
    /// token.
    #[must_use]
    pub fn found(&self) -> Option<&Found> {
        match &self.kind {
            ParseErrorKind::Unexpected { found, .. } => Some(found),
            _ => None,
        }
    }
}

/// Any failure produced by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The source was longer than [`crate::ParseOptions::max_source_len`].
    #[error("source is {len} bytes, exceeding the limit of {limit}")]
    SourceTooLong { len: usize, limit: usize },
}

impl Error {
    /// Byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(err) => err.offset,
            Self::Parse(err) => err.offset,
            Self::SourceTooLong { limit, .. } => *limit,
        }
    }
}
