//! Core Pratt parser implementation and entry point.
//!
//! This module defines the [`Pratt`] struct and the public
//! [`parse_expression`] function which tokenises the source and builds an
//! expression tree.

use crate::config::ParseOptions;
use crate::error::{Error, ParseError, ParseErrorKind};
use crate::parser::ast::Expr;
use crate::{Token, tokenize};

use super::token_stream::TokenStream;

/// A range operand parsed before the parser backed out of the range form.
///
/// `start` and `end` are token positions; the operand is reused when the
/// cursor returns to `start`.
#[derive(Debug)]
pub(super) struct PendingOperand {
    pub(super) start: usize,
    pub(super) end: usize,
    pub(super) expr: Expr,
}

pub(super) struct Pratt<'t, 'src> {
    pub(super) ts: TokenStream<'t, 'src>,
    pub(super) pending: Option<PendingOperand>,
    pub(super) depth: usize,
    max_depth: usize,
}

/// Parse a source string into an [`Expr`] using default limits.
///
/// # Examples
///
/// ```rust
/// use filterlang::parser::expression::parse_expression;
///
/// let expr = parse_expression("1 + 2 * 3").expect("valid expression");
/// assert_eq!(expr.to_sexpr(), "(+ 1 (* 2 3))");
/// ```
///
/// # Errors
/// Returns [`Error::Lex`] when the source cannot be tokenised and
/// [`Error::Parse`] for the first grammar violation.
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_expression(src: &str) -> Result<Expr, Error> {
    let tokens = tokenize(src)?;
    parse_token_slice(&tokens, src.len(), &ParseOptions::default()).map_err(Error::from)
}

/// Parse a complete token slice, requiring every token to be consumed.
pub(crate) fn parse_token_slice(
    tokens: &[Token<'_>],
    src_len: usize,
    options: &ParseOptions,
) -> Result<Expr, ParseError> {
    let mut parser = Pratt::new(tokens, src_len, options);
    let expr = parser.parse_expr(0)?;
    if !parser.ts.at_end() {
        return Err(parser.ts.unexpected("an operator or end of input"));
    }
    Ok(expr)
}

impl<'t, 'src> Pratt<'t, 'src> {
    #[must_use]
    pub(super) const fn new(
        tokens: &'t [Token<'src>],
        src_len: usize,
        options: &ParseOptions,
    ) -> Self {
        Self {
            ts: TokenStream::new(tokens, src_len),
            pending: None,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parse an expression whose operators all bind at least as tightly as
    /// `min_bp`.
    pub(super) fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        self.descend()?;
        let result = self
            .parse_prefix()
            .and_then(|lhs| self.parse_infix(lhs, min_bp));
        self.depth -= 1;
        result
    }

    /// Account for one more level of tree height, failing once the nesting
    /// limit is reached.
    ///
    /// Both nested sub-expressions and infix folds count: a flat chain
    /// `1 + 1 + ...` grows the tree just as deeply as nested parentheses.
    pub(super) fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                self.ts.current_offset(),
                ParseErrorKind::TooDeep(self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }
}
