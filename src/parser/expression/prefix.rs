//! Parsing of prefix expressions and literals for the Pratt parser.

use crate::SyntaxKind;
use crate::error::ParseError;
use crate::parser::ast::{CAST_OPERAND_BP, Expr, Literal, TypeName, prefix_binding_power};

use super::Pratt;

const EXPECTED_OPERAND: &str = "an expression";

impl Pratt<'_, '_> {
    pub(super) fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.ts.peek() else {
            return Err(self.ts.unexpected(EXPECTED_OPERAND));
        };
        if let Some(lit) = Literal::from_token(token.kind, token.text) {
            self.ts.next_tok();
            return Ok(Expr::Literal(lit));
        }
        match token.kind {
            SyntaxKind::T_IDENT => {
                self.ts.next_tok();
                Ok(Expr::Identifier(token.text.to_owned()))
            }
            SyntaxKind::T_LPAREN => {
                self.ts.next_tok();
                self.parse_cast_or_group()
            }
            kind => {
                let Some((bp, op)) = prefix_binding_power(kind) else {
                    return Err(self.ts.unexpected(EXPECTED_OPERAND));
                };
                self.ts.next_tok();
                let expr = self.parse_expr(bp)?;
                Ok(Expr::Unary {
                    op,
                    expr: Box::new(expr),
                })
            }
        }
    }

    /// Parse what follows `(`: a cast when the next token is a type keyword,
    /// otherwise a parenthesised expression.
    fn parse_cast_or_group(&mut self) -> Result<Expr, ParseError> {
        if let Some(ty) = self.ts.peek_kind().and_then(TypeName::from_kind) {
            self.ts.next_tok();
            self.ts
                .expect(SyntaxKind::T_RPAREN, "`)` after the cast type")?;
            let expr = self.parse_expr(CAST_OPERAND_BP)?;
            return Ok(Expr::Cast {
                ty,
                expr: Box::new(expr),
            });
        }
        let inner = self.parse_expr(0)?;
        self.ts.expect(SyntaxKind::T_RPAREN, "`)`")?;
        Ok(inner)
    }
}
