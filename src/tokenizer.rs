//! Lexical analysis for filter expressions.
//!
//! This module exposes `tokenize` and `tokenize_with_trivia`, which convert
//! raw source text into a sequence of [`Token`]s. Recognition is done with
//! the `logos` crate so every token is chosen by maximal munch; reserved words
//! are resolved from identifiers afterwards through a static keyword map.

mod escape;

use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;
use crate::error::{LexError, LexErrorKind};

pub(crate) use escape::decode_escape;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

/// A single lexical token borrowing its text from the source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: SyntaxKind,
    /// The exact source text of the token.
    pub text: &'src str,
    /// Byte range of `text` within the source.
    pub span: Span,
}

impl Token<'_> {
    /// Byte offset of the first character of the token.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.span.start
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"(\r\n|\r|\n)+")]
    Newline,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(
        r"(0|[1-9][0-9]*|0[0-7]+|0[xX][0-9a-fA-F]+|0[bB][01]+)([uUlL][uUlL]?)?",
        priority = 10
    )]
    Integer,
    #[regex(
        r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+|0[xX]([0-9a-fA-F]*\.[0-9a-fA-F]+|[0-9a-fA-F]+\.?)[pP][+-]?[0-9]+",
        priority = 10
    )]
    Float,
    // Any other digit-led run; outranked by the valid forms above.
    #[regex(r"[0-9][0-9A-Za-z_.]*", priority = 1)]
    MalformedNumber,
    #[regex(
        r#"(u8|u|U|L)?"([^"\\\r\n]|\\['"?\\abfnrtv]|\\[0-7][0-7]?[0-7]?|\\x[0-9a-fA-F]+|\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]|\\U[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F])*""#
    )]
    String,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token(",")]
    Comma,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,
    #[token("==")]
    EqEq,
    #[token("!=")]
    Neq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("**")]
    Pow,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,
}

/// Maps identifier text to its reserved [`SyntaxKind`].
///
/// Type names, boolean literals and the word spellings of the logical and
/// membership operators are all reserved.
static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "bool" => SyntaxKind::K_BOOL,
    "int8" => SyntaxKind::K_INT8,
    "int16" => SyntaxKind::K_INT16,
    "int32" => SyntaxKind::K_INT32,
    "int64" => SyntaxKind::K_INT64,
    "float" => SyntaxKind::K_FLOAT,
    "double" => SyntaxKind::K_DOUBLE,
    "true" => SyntaxKind::T_BOOLEAN,
    "false" => SyntaxKind::T_BOOLEAN,
    "and" => SyntaxKind::K_AND,
    "or" => SyntaxKind::K_OR,
    "not" => SyntaxKind::K_NOT,
    "in" => SyntaxKind::K_IN,
};

fn keyword_kind(ident: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(ident).copied()
}

/// Map a `logos` token onto its [`SyntaxKind`]; malformed numbers have none.
const fn raw_kind(token: RawToken) -> Option<SyntaxKind> {
    let kind = match token {
        RawToken::Whitespace => SyntaxKind::T_WHITESPACE,
        RawToken::Newline => SyntaxKind::T_NEWLINE,
        RawToken::Ident => SyntaxKind::T_IDENT,
        RawToken::Integer => SyntaxKind::T_INTEGER,
        RawToken::Float => SyntaxKind::T_FLOAT,
        RawToken::String => SyntaxKind::T_STRING,
        RawToken::LParen => SyntaxKind::T_LPAREN,
        RawToken::RParen => SyntaxKind::T_RPAREN,
        RawToken::LBracket => SyntaxKind::T_LBRACKET,
        RawToken::Comma => SyntaxKind::T_COMMA,
        RawToken::RBracket => SyntaxKind::T_RBRACKET,
        RawToken::Lt => SyntaxKind::T_LT,
        RawToken::Lte => SyntaxKind::T_LTE,
        RawToken::Gt => SyntaxKind::T_GT,
        RawToken::Gte => SyntaxKind::T_GTE,
        RawToken::EqEq => SyntaxKind::T_EQEQ,
        RawToken::Neq => SyntaxKind::T_NEQ,
        RawToken::Plus => SyntaxKind::T_PLUS,
        RawToken::Minus => SyntaxKind::T_MINUS,
        RawToken::Star => SyntaxKind::T_STAR,
        RawToken::Slash => SyntaxKind::T_SLASH,
        RawToken::Percent => SyntaxKind::T_PERCENT,
        RawToken::Pow => SyntaxKind::T_POW,
        RawToken::Shl => SyntaxKind::T_SHL,
        RawToken::Shr => SyntaxKind::T_SHR,
        RawToken::Amp => SyntaxKind::T_AMP,
        RawToken::Pipe => SyntaxKind::T_PIPE,
        RawToken::Caret => SyntaxKind::T_CARET,
        RawToken::Tilde => SyntaxKind::T_TILDE,
        RawToken::AmpAmp => SyntaxKind::K_AND,
        RawToken::PipePipe => SyntaxKind::K_OR,
        RawToken::Bang => SyntaxKind::K_NOT,
        RawToken::MalformedNumber => return None,
    };
    Some(kind)
}

/// Work out why `logos` could not produce a token starting at `start`.
fn classify_failure(src: &str, start: usize) -> LexError {
    let rest = src.get(start..).unwrap_or("");
    match rest.chars().next() {
        Some('"') => escape::diagnose_string(src, start),
        Some(ch) => LexError::new(start, LexErrorKind::UnexpectedChar(ch)),
        None => LexError::new(start, LexErrorKind::UnexpectedChar('\0')),
    }
}

fn tokenize_impl(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = RawToken::lexer(src);
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "rough capacity estimate"
    )]
    let estimated_tokens = src.len() / 3; // roughly three chars per token
    let mut out: Vec<Token<'_>> = Vec::with_capacity(estimated_tokens);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(raw) = result else {
            return Err(classify_failure(src, span.start));
        };
        let Some(kind) = raw_kind(raw) else {
            return Err(LexError::new(span.start, LexErrorKind::MalformedNumber));
        };
        let text = lexer.slice();
        let kind = match kind {
            SyntaxKind::T_IDENT => keyword_kind(text).unwrap_or(SyntaxKind::T_IDENT),
            other => other,
        };
        if kind == SyntaxKind::K_IN {
            if let Some(not_idx) = pending_not(&out) {
                fuse_not_in(src, &mut out, not_idx, span.end);
                continue;
            }
        }
        out.push(Token { kind, text, span });
    }
    log::trace!("tokenized {} bytes into {} tokens", src.len(), out.len());
    Ok(out)
}

/// Index of a `not` keyword separated from the end of `out` only by trivia.
fn pending_not(out: &[Token<'_>]) -> Option<usize> {
    let idx = out.iter().rposition(|t| !t.kind.is_trivia())?;
    let has_gap = idx + 1 < out.len();
    let is_not = out
        .get(idx)
        .is_some_and(|t| t.kind == SyntaxKind::K_NOT && t.text == "not");
    (is_not && has_gap).then_some(idx)
}

/// Replace `not <trivia> ` at `not_idx..` with a single `not in` token
/// ending at `end`.
fn fuse_not_in<'src>(src: &'src str, out: &mut Vec<Token<'src>>, not_idx: usize, end: usize) {
    let start = out.get(not_idx).map_or(end, Token::start);
    out.truncate(not_idx);
    out.push(Token {
        kind: SyntaxKind::T_NOT_IN,
        text: src.get(start..end).unwrap_or(""),
        span: start..end,
    });
}

/// Tokenise the source, excluding whitespace and newlines.
///
/// Returns only significant tokens, which is what the parser consumes.
///
/// # Examples
///
/// ```rust
/// use filterlang::{tokenize, SyntaxKind};
///
/// let tokens = tokenize("age >= 3").expect("valid source");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [SyntaxKind::T_IDENT, SyntaxKind::T_GTE, SyntaxKind::T_INTEGER]);
/// ```
///
/// # Errors
/// Returns a [`LexError`] for the first unrecognised character or malformed
/// literal.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = tokenize_impl(src)?;
    tokens.retain(|t| !t.kind.is_trivia());
    Ok(tokens)
}

/// Tokenise the source, retaining whitespace and newline tokens.
///
/// Concatenating the text of every returned token reproduces `src` exactly.
///
/// # Errors
/// Returns a [`LexError`] for the first unrecognised character or malformed
/// literal.
pub fn tokenize_with_trivia(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize_impl(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bool", Some(SyntaxKind::K_BOOL))]
    #[case("false", Some(SyntaxKind::T_BOOLEAN))]
    #[case("not", Some(SyntaxKind::K_NOT))]
    #[case("Bool", None)]
    #[case("int", None)]
    fn keywords_are_case_sensitive(#[case] ident: &str, #[case] expected: Option<SyntaxKind>) {
        assert_eq!(keyword_kind(ident), expected);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "source is valid")]
    fn fused_not_in_keeps_inner_trivia() {
        let tokens = tokenize_with_trivia("a not \t in b").expect("valid source");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                SyntaxKind::T_IDENT,
                SyntaxKind::T_WHITESPACE,
                SyntaxKind::T_NOT_IN,
                SyntaxKind::T_WHITESPACE,
                SyntaxKind::T_IDENT,
            ]
        );
        assert_eq!(tokens.get(2).map(|t| t.span.clone()), Some(2..10));
    }

    #[test]
    fn bang_is_never_fused_with_in() {
        assert_eq!(
            crate::test_util::kinds("! in"),
            [
                SyntaxKind::K_NOT,
                SyntaxKind::T_WHITESPACE,
                SyntaxKind::K_IN
            ]
        );
    }

    #[test]
    fn adjacent_not_in_is_not_fused() {
        let out = vec![Token {
            kind: SyntaxKind::K_NOT,
            text: "not",
            span: 0..3,
        }];
        assert_eq!(pending_not(&out), None);
    }

    #[rstest]
    #[case("#", 0, LexErrorKind::UnexpectedChar('#'))]
    #[case("ab\"c", 2, LexErrorKind::UnterminatedString)]
    fn classifies_failures(
        #[case] src: &str,
        #[case] start: usize,
        #[case] kind: LexErrorKind,
    ) {
        assert_eq!(classify_failure(src, start), LexError::new(start, kind));
    }
}
