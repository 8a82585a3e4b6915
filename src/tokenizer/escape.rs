//! Escape-sequence scanning for string literals.
//!
//! The same scanner backs two callers: the tokenizer uses it to explain why a
//! quote did not start a valid string token, and the AST uses it to decode a
//! literal's body into its character value.

use crate::error::{LexError, LexErrorKind};

/// Decode one escape sequence.
///
/// `rest` is the text immediately after the backslash. Returns the escaped
/// code point and the number of bytes of `rest` it occupies, or `None` when
/// the sequence is not a recognised escape.
pub(crate) fn decode_escape(rest: &str) -> Option<(u32, usize)> {
    let first = rest.chars().next()?;
    let simple = match first {
        '\'' => Some(0x27),
        '"' => Some(0x22),
        '?' => Some(0x3f),
        '\\' => Some(0x5c),
        'a' => Some(0x07),
        'b' => Some(0x08),
        'f' => Some(0x0c),
        'n' => Some(0x0a),
        'r' => Some(0x0d),
        't' => Some(0x09),
        'v' => Some(0x0b),
        _ => None,
    };
    if let Some(code) = simple {
        return Some((code, 1));
    }
    match first {
        '0'..='7' => Some(digits_value(rest, 8, 1, 3)),
        'x' => {
            let tail = rest.get(1..)?;
            let (value, len) = digits_value(tail, 16, 1, usize::MAX);
            (len > 0).then_some((value, len + 1))
        }
        'u' => fixed_hex(rest, 4),
        'U' => fixed_hex(rest, 8),
        _ => None,
    }
}

/// Accumulate between `min` and `max` leading digits of `radix`.
///
/// Returns `(value, consumed)`; `consumed` is zero when fewer than `min`
/// digits are present. Values that overflow saturate at `u32::MAX` so the
/// caller can reject them as invalid code points.
fn digits_value(text: &str, radix: u32, min: usize, max: usize) -> (u32, usize) {
    let mut value: u32 = 0;
    let mut count = 0;
    for ch in text.chars().take(max) {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        value = value
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit))
            .unwrap_or(u32::MAX);
        count += 1;
    }
    if count < min { (0, 0) } else { (value, count) }
}

fn fixed_hex(rest: &str, width: usize) -> Option<(u32, usize)> {
    let tail = rest.get(1..)?;
    let (value, len) = digits_value(tail, 16, width, width);
    (len == width).then_some((value, width + 1))
}

/// Explain why the string literal opening at `quote` failed to lex.
///
/// An invalid escape is reported at its backslash; a missing closing quote is
/// reported at the opening quote.
pub(super) fn diagnose_string(src: &str, quote: usize) -> LexError {
    let body_start = quote + 1;
    let body = src.get(body_start..).unwrap_or("");
    let mut offset = 0;
    while let Some(ch) = body.get(offset..).and_then(|s| s.chars().next()) {
        match ch {
            '\\' => {
                let after = body.get(offset + 1..).unwrap_or("");
                let Some((_, len)) = decode_escape(after) else {
                    return LexError::new(body_start + offset, LexErrorKind::InvalidEscape);
                };
                offset += 1 + len;
            }
            '\n' | '\r' | '"' => break,
            other => offset += other.len_utf8(),
        }
    }
    LexError::new(quote, LexErrorKind::UnterminatedString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("n", Some((0x0a, 1)))]
    #[case("\\", Some((0x5c, 1)))]
    #[case("101", Some((0o101, 3)))]
    #[case("1019", Some((0o101, 3)))]
    #[case("7x", Some((7, 1)))]
    #[case("x41", Some((0x41, 3)))]
    #[case("x", None)]
    #[case("u00e9", Some((0xe9, 5)))]
    #[case("u00e", None)]
    #[case("U0001F600", Some((0x1f600, 9)))]
    #[case("q", None)]
    #[case("", None)]
    fn decodes_escapes(#[case] rest: &str, #[case] expected: Option<(u32, usize)>) {
        assert_eq!(decode_escape(rest), expected);
    }

    #[rstest]
    #[case("\"abc", 0, LexErrorKind::UnterminatedString, 0)]
    #[case("x = \"ab\ncd\"", 4, LexErrorKind::UnterminatedString, 4)]
    #[case("\"a\\qb\"", 0, LexErrorKind::InvalidEscape, 2)]
    #[case("\"\\u12\"", 0, LexErrorKind::InvalidEscape, 1)]
    fn diagnoses_string_failures(
        #[case] src: &str,
        #[case] quote: usize,
        #[case] kind: LexErrorKind,
        #[case] offset: usize,
    ) {
        assert_eq!(diagnose_string(src, quote), LexError::new(offset, kind));
    }
}
