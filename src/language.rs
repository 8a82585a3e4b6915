//! Token kinds of the filter-expression language.
//!
//! `SyntaxKind` tags every token the lexer can produce. Operator kinds carry
//! their canonical spelling through [`SyntaxKind::describe`] so diagnostics
//! can name what was expected or found without a separate lookup table.

/// Every token kind recognised by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token naming follows the grammar vocabulary")]
pub enum SyntaxKind {
    // Trivia
    T_WHITESPACE,
    T_NEWLINE,
    // Punctuation
    T_LPAREN,
    T_RPAREN,
    T_LBRACKET,
    T_COMMA,
    T_RBRACKET,
    // Type keywords
    K_BOOL,
    K_INT8,
    K_INT16,
    K_INT32,
    K_INT64,
    K_FLOAT,
    K_DOUBLE,
    // Relational and equality operators
    T_LT,
    T_LTE,
    T_GT,
    T_GTE,
    T_EQEQ,
    T_NEQ,
    // Arithmetic operators
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_PERCENT,
    T_POW,
    // Shift and bitwise operators
    T_SHL,
    T_SHR,
    T_AMP,
    T_PIPE,
    T_CARET,
    T_TILDE,
    // Logical operators, both spellings share a kind
    K_AND,
    K_OR,
    K_NOT,
    // Membership
    K_IN,
    T_NOT_IN,
    // Literals
    T_BOOLEAN,
    T_INTEGER,
    T_FLOAT,
    T_IDENT,
    T_STRING,
}

impl SyntaxKind {
    /// Returns `true` for whitespace and newline tokens.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::T_WHITESPACE | Self::T_NEWLINE)
    }

    /// Returns `true` for the seven primitive type keywords.
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::K_BOOL
                | Self::K_INT8
                | Self::K_INT16
                | Self::K_INT32
                | Self::K_INT64
                | Self::K_FLOAT
                | Self::K_DOUBLE
        )
    }

    /// Returns `true` for literal tokens that form a primary expression.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::T_BOOLEAN | Self::T_INTEGER | Self::T_FLOAT | Self::T_STRING
        )
    }

    /// Human-readable description used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::T_WHITESPACE => "whitespace",
            Self::T_NEWLINE => "newline",
            Self::T_LPAREN => "`(`",
            Self::T_RPAREN => "`)`",
            Self::T_LBRACKET => "`[`",
            Self::T_COMMA => "`,`",
            Self::T_RBRACKET => "`]`",
            Self::K_BOOL => "`bool`",
            Self::K_INT8 => "`int8`",
            Self::K_INT16 => "`int16`",
            Self::K_INT32 => "`int32`",
            Self::K_INT64 => "`int64`",
            Self::K_FLOAT => "`float`",
            Self::K_DOUBLE => "`double`",
            Self::T_LT => "`<`",
            Self::T_LTE => "`<=`",
            Self::T_GT => "`>`",
            Self::T_GTE => "`>=`",
            Self::T_EQEQ => "`==`",
            Self::T_NEQ => "`!=`",
            Self::T_PLUS => "`+`",
            Self::T_MINUS => "`-`",
            Self::T_STAR => "`*`",
            Self::T_SLASH => "`/`",
            Self::T_PERCENT => "`%`",
            Self::T_POW => "`**`",
            Self::T_SHL => "`<<`",
            Self::T_SHR => "`>>`",
            Self::T_AMP => "`&`",
            Self::T_PIPE => "`|`",
            Self::T_CARET => "`^`",
            Self::T_TILDE => "`~`",
            Self::K_AND => "`and`",
            Self::K_OR => "`or`",
            Self::K_NOT => "`not`",
            Self::K_IN => "`in`",
            Self::T_NOT_IN => "`not in`",
            Self::T_BOOLEAN => "boolean literal",
            Self::T_INTEGER => "integer literal",
            Self::T_FLOAT => "floating literal",
            Self::T_IDENT => "identifier",
            Self::T_STRING => "string literal",
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}
