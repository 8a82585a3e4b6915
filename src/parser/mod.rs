//! Precedence-climbing parser producing an expression AST.
//!
//! This module contains the entry points for parsing filter expressions. The
//! source is tokenised with [`tokenize`] and the significant tokens are fed
//! to the Pratt parser in [`expression`]. Parsing stops at the first error;
//! there is no recovery and no partial tree.

pub mod ast;
pub mod constant;
pub mod expression;

use crate::config::ParseOptions;
use crate::error::{Error, ParseError};
use crate::{Token, tokenize};

use ast::Expr;

/// Parse the provided source string with default [`ParseOptions`].
///
/// # Examples
///
/// ```rust
/// use filterlang::parse;
///
/// let expr = parse(r#""age" >= 3 and "score" in [1, 2, 3]"#).expect("valid filter");
/// assert_eq!(expr.to_sexpr(), r#"(and (>= "age" 3) (in "score" [1 2 3]))"#);
/// ```
///
/// # Errors
/// Returns [`Error::Lex`] for malformed tokens and [`Error::Parse`] for the
/// first grammar violation.
pub fn parse(src: &str) -> Result<Expr, Error> {
    parse_with_options(src, &ParseOptions::default())
}

/// Parse the provided source string under caller-supplied limits.
///
/// # Errors
/// Returns [`Error::SourceTooLong`] when `src` exceeds
/// [`ParseOptions::max_source_len`], otherwise as [`parse`].
pub fn parse_with_options(src: &str, options: &ParseOptions) -> Result<Expr, Error> {
    log::debug!("parsing {} bytes of filter source", src.len());
    if let Some(limit) = options.max_source_len.filter(|limit| src.len() > *limit) {
        log::debug!("source rejected: {} bytes exceeds {limit}", src.len());
        return Err(Error::SourceTooLong {
            len: src.len(),
            limit,
        });
    }
    let result = tokenize(src)
        .map_err(Error::from)
        .and_then(|tokens| {
            expression::parse_token_slice(&tokens, src.len(), options).map_err(Error::from)
        });
    match &result {
        Ok(expr) => log::debug!("parsed filter: {}", expr.to_sexpr()),
        Err(err) => log::debug!("filter parse failed: {err}"),
    }
    result
}

/// Parse an already tokenised expression.
///
/// `tokens` must not contain trivia, as produced by [`tokenize`], and `src`
/// must be the text they were produced from; it is used to place
/// end-of-input errors.
///
/// # Errors
/// Returns a [`ParseError`] for the first grammar violation, including
/// tokens left over after a complete expression.
pub fn parse_tokens(tokens: &[Token<'_>], src: &str) -> Result<Expr, ParseError> {
    expression::parse_token_slice(tokens, src.len(), &ParseOptions::default())
}

#[cfg(test)]
mod tests;
