//! String literal types used by expression AST nodes.
//!
//! The body is stored exactly as written so a literal re-renders to its
//! source text; [`StringLiteral::value`] decodes escapes on demand.

use std::fmt;

use crate::tokenizer::decode_escape;

/// Optional encoding prefix written before the opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingPrefix {
    /// `u8"..."`
    Utf8,
    /// `u"..."`
    Utf16,
    /// `U"..."`
    Utf32,
    /// `L"..."`
    Wide,
}

impl EncodingPrefix {
    /// Source spelling of the prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "u8",
            Self::Utf16 => "u",
            Self::Utf32 => "U",
            Self::Wide => "L",
        }
    }

    fn split(lexeme: &str) -> (Option<Self>, &str) {
        let table = [
            ("u8", Self::Utf8),
            ("u", Self::Utf16),
            ("U", Self::Utf32),
            ("L", Self::Wide),
        ];
        table
            .into_iter()
            .find_map(|(spelling, prefix)| {
                lexeme
                    .strip_prefix(spelling)
                    .filter(|rest| rest.starts_with('"'))
                    .map(|rest| (Some(prefix), rest))
            })
            .unwrap_or((None, lexeme))
    }
}

/// Failure to decode the escapes in a string body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnescapeError {
    /// A backslash not followed by a recognised escape.
    #[error("invalid escape sequence at body offset {offset}")]
    InvalidEscape { offset: usize },
    /// An escape naming a value that is not a Unicode scalar value.
    #[error("escape at body offset {offset} encodes invalid code point {code:#x}")]
    InvalidCodePoint { offset: usize, code: u32 },
}

/// A double-quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Encoding prefix, if one was written.
    pub prefix: Option<EncodingPrefix>,
    /// Contents between the quotes, escapes intact.
    pub body: String,
}

impl StringLiteral {
    /// Split a string token's lexeme into prefix and body.
    ///
    /// Returns `None` when `lexeme` is not a quoted string.
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let (prefix, quoted) = EncodingPrefix::split(lexeme);
        let body = quoted.strip_prefix('"')?.strip_suffix('"')?;
        Some(Self {
            prefix,
            body: body.to_owned(),
        })
    }

    /// Build an unprefixed literal whose decoded value is `value`.
    ///
    /// Quotes, backslashes and control characters are escaped; everything
    /// else is written verbatim.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        let mut body = String::with_capacity(value.len());
        for ch in value.chars() {
            match ch {
                '"' => body.push_str("\\\""),
                '\\' => body.push_str("\\\\"),
                '\n' => body.push_str("\\n"),
                '\r' => body.push_str("\\r"),
                '\t' => body.push_str("\\t"),
                c if c.is_control() && u32::from(c) < 0o400 => {
                    // Three octal digits never absorb a following digit.
                    body.push_str(&format!("\\{:03o}", u32::from(c)));
                }
                c if c.is_control() => body.push_str(&format!("\\U{:08x}", u32::from(c))),
                c => body.push(c),
            }
        }
        Self { prefix: None, body }
    }

    /// Decode escapes, producing the literal's character value.
    ///
    /// # Errors
    /// Returns [`UnescapeError`] when the body holds an unknown escape or an
    /// escape outside the Unicode scalar range.
    pub fn value(&self) -> Result<String, UnescapeError> {
        let mut out = String::with_capacity(self.body.len());
        let mut offset = 0;
        while let Some(rest) = self.body.get(offset..) {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            if ch != '\\' {
                out.push(ch);
                offset += ch.len_utf8();
                continue;
            }
            let after = rest.get(1..).unwrap_or("");
            let (code, len) =
                decode_escape(after).ok_or(UnescapeError::InvalidEscape { offset })?;
            let decoded =
                char::from_u32(code).ok_or(UnescapeError::InvalidCodePoint { offset, code })?;
            out.push(decoded);
            offset += 1 + len;
        }
        Ok(out)
    }

    /// Render the literal for `Expr::to_sexpr` output.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            f.write_str(prefix.as_str())?;
        }
        write!(f, "\"{}\"", self.body)
    }
}
