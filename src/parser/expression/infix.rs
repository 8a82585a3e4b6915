//! Infix operator handling for the Pratt parser.
//!
//! Every fold deepens the tree by one level, so folds are charged against
//! the same depth budget as nested sub-expressions.
//!
//! `<` and `<=` are ambiguous: they either start a chained range
//! `lower < middle < upper` or form an ordinary comparison. The parser reads
//! the operand after the operator and commits to a range only when a second
//! `<` or `<=` follows.

use std::ops::ControlFlow;

use crate::error::ParseError;
use crate::parser::ast::{
    Expr, MEMBERSHIP_BP, RANGE_BP, RANGE_OPERAND_BP, RELATIONAL_BP, RangeOp,
    infix_binding_power, membership_negation,
};

use super::pratt::{PendingOperand, Pratt};

impl Pratt<'_, '_> {
    pub(super) fn parse_infix(&mut self, lhs: Expr, min_bp: u8) -> Result<Expr, ParseError> {
        let depth = self.depth;
        let result = self.fold_infix(lhs, min_bp);
        self.depth = depth;
        result
    }

    fn fold_infix(&mut self, mut lhs: Expr, min_bp: u8) -> Result<Expr, ParseError> {
        while let Some(op_kind) = self.ts.peek_kind() {
            if let Some(lower_op) = RangeOp::from_kind(op_kind) {
                if RANGE_BP < min_bp {
                    break;
                }
                self.descend()?;
                match self.parse_range_or_comparison(lhs, lower_op, min_bp)? {
                    ControlFlow::Continue(expr) => lhs = expr,
                    ControlFlow::Break(expr) => return Ok(expr),
                }
                continue;
            }
            if let Some(negated) = membership_negation(op_kind) {
                if MEMBERSHIP_BP < min_bp {
                    break;
                }
                self.descend()?;
                self.ts.next_tok();
                let terms = self.parse_membership_terms()?;
                lhs = Expr::Membership {
                    negated,
                    expr: Box::new(lhs),
                    terms,
                };
                continue;
            }
            let Some((l_bp, r_bp, op)) = infix_binding_power(op_kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.descend()?;
            self.ts.next_tok();
            let rhs = self.parse_expr(r_bp)?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// Handle `lhs < ...` or `lhs <= ...`.
    ///
    /// Returns `Break` when the operator turns out to be a plain comparison
    /// that binds too loosely for `min_bp`; the cursor is then back on the
    /// operator and the parsed operand is cached for the caller's retry.
    fn parse_range_or_comparison(
        &mut self,
        lhs: Expr,
        lower_op: RangeOp,
        min_bp: u8,
    ) -> Result<ControlFlow<Expr, Expr>, ParseError> {
        let op_pos = self.ts.cursor();
        self.ts.next_tok();
        let middle = self.take_range_operand()?;
        if let Some(upper_op) = self.ts.peek_kind().and_then(RangeOp::from_kind) {
            self.ts.next_tok();
            let upper = self.take_range_operand()?;
            return Ok(ControlFlow::Continue(Expr::Range {
                lower: Box::new(lhs),
                lower_op,
                middle: Box::new(middle),
                upper_op,
                upper: Box::new(upper),
            }));
        }
        if min_bp > RELATIONAL_BP {
            log::trace!(
                "`{}` at token {op_pos} is not a range; backtracking",
                lower_op.symbol()
            );
            self.pending = Some(PendingOperand {
                start: op_pos + 1,
                end: self.ts.cursor(),
                expr: middle,
            });
            self.ts.reset(op_pos);
            return Ok(ControlFlow::Break(lhs));
        }
        Ok(ControlFlow::Continue(Expr::Binary {
            op: lower_op.as_binary(),
            lhs: Box::new(lhs),
            rhs: Box::new(middle),
        }))
    }

    /// Parse a range operand, reusing one cached by an earlier backtrack at
    /// the same position.
    fn take_range_operand(&mut self) -> Result<Expr, ParseError> {
        let start = self.ts.cursor();
        if let Some(pending) = self.pending.take_if(|p| p.start == start) {
            self.ts.reset(pending.end);
            return Ok(pending.expr);
        }
        self.parse_expr(RANGE_OPERAND_BP)
    }
}
