//! Binary precedence tiers and the tokens that select each operator.

use lox_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

/// Left-associative binary levels, loosest first.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Tier {
    Equality,
    Comparison,
    Term,
    Factor,
}

impl Tier {
    /// Next tighter tier, or `None` when operands are unary expressions.
    pub(crate) const fn tighter(self) -> Option<Tier> {
        match self {
            Tier::Equality => Some(Tier::Comparison),
            Tier::Comparison => Some(Tier::Term),
            Tier::Term => Some(Tier::Factor),
            Tier::Factor => None,
        }
    }

    /// Operator at this tier spelled by `kind`.
    pub(crate) fn binary_op(self, kind: &TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::BangEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => return None,
        };
        (Tier::of(op) == self).then_some(op)
    }

    const fn of(op: BinaryOp) -> Tier {
        match op {
            BinaryOp::Eq | BinaryOp::NotEq => Tier::Equality,
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => Tier::Comparison,
            BinaryOp::Add | BinaryOp::Sub => Tier::Term,
            BinaryOp::Mul | BinaryOp::Div => Tier::Factor,
        }
    }
}

impl Parser<'_> {
    pub(crate) fn peek_binary_op(&self, tier: Tier) -> Option<BinaryOp> {
        tier.binary_op(&self.current_kind())
    }

    pub(crate) fn peek_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_is_only_a_term_operator() {
        assert_eq!(Tier::Term.binary_op(&TokenKind::Minus), Some(BinaryOp::Sub));
        assert_eq!(Tier::Factor.binary_op(&TokenKind::Minus), None);
        assert_eq!(Tier::Equality.binary_op(&TokenKind::Minus), None);
    }

    #[test]
    fn tiers_tighten_down_to_factor() {
        let mut tier = Some(Tier::Equality);
        let mut seen = Vec::new();
        while let Some(t) = tier {
            seen.push(t);
            tier = t.tighter();
        }
        assert_eq!(
            seen,
            vec![Tier::Equality, Tier::Comparison, Tier::Term, Tier::Factor]
        );
    }
}
