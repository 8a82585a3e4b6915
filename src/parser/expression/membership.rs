//! Bracketed term lists following `in` and `not in`.

use crate::SyntaxKind;
use crate::error::ParseError;
use crate::parser::ast::Literal;
use crate::parser::constant::resolve_term;

use super::Pratt;

impl Pratt<'_, '_> {
    /// Parse `[term, term, ...]` with an optional trailing comma.
    ///
    /// Each term is resolved to a literal as soon as it is parsed, so a
    /// non-constant entry is reported at its own offset.
    pub(super) fn parse_membership_terms(&mut self) -> Result<Vec<Literal>, ParseError> {
        self.ts
            .expect(SyntaxKind::T_LBRACKET, "`[` after the membership operator")?;
        let mut terms = Vec::new();
        loop {
            if self.ts.eat(SyntaxKind::T_RBRACKET) {
                break;
            }
            let start = self.ts.current_offset();
            let expr = self.parse_expr(0)?;
            let term = resolve_term(expr).map_err(|kind| ParseError::new(start, kind))?;
            terms.push(term);
            if self.ts.eat(SyntaxKind::T_COMMA) {
                continue;
            }
            self.ts.expect(SyntaxKind::T_RBRACKET, "`,` or `]`")?;
            break;
        }
        Ok(terms)
    }
}
