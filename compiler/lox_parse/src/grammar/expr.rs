//! Expression Parsing
//!
//! Precedence, lowest first:
//! assignment, `or`, `and`, equality, comparison, additive,
//! multiplicative, unary, call/property chains, primary.
//!
//! Every binary level is left-associative; assignment is right-associative.

use lox_ir::{Expr, ExprKind, Literal, LogicalOp, TokenKind};
use lox_stack::ensure_sufficient_stack;

use super::operators::Tier;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Wrapped in `ensure_sufficient_stack` so deeply nested input grows the
    /// stack instead of overflowing it.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `IDENT = value`, `call.IDENT = value`, or a plain `or` expression.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;

        if !self.check(&TokenKind::Eq) {
            return Ok(target);
        }
        let eq = self.advance();
        let value = self.parse_expr()?;
        let span = target.span.merge(value.span);

        match target.into_kind() {
            ExprKind::Variable(name) => Ok(self.alloc(
                ExprKind::Assign {
                    name,
                    value: Box::new(value),
                },
                span,
            )),
            ExprKind::Get { object, name } => Ok(self.alloc(
                ExprKind::Set {
                    object,
                    name,
                    value: Box::new(value),
                },
                span,
            )),
            _ => Err(ParseError::invalid_assignment_target(eq)),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.eat(&TokenKind::Or) {
            let right = self.parse_and()?;
            left = self.make_logical(LogicalOp::Or, left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_binary(Tier::Equality)?;
        while self.eat(&TokenKind::And) {
            let right = self.parse_binary(Tier::Equality)?;
            left = self.make_logical(LogicalOp::And, left, right);
        }
        Ok(left)
    }

    /// One left-associative binary level. Operands come from the next
    /// tighter tier, or from unary expressions below `Factor`.
    fn parse_binary(&mut self, tier: Tier) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand(tier)?;
        while let Some(op) = self.peek_binary_op(tier) {
            self.advance();
            let right = self.parse_operand(tier)?;
            left = self.make_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_operand(&mut self, tier: Tier) -> Result<Expr, ParseError> {
        match tier.tighter() {
            Some(next) => self.parse_binary(next),
            None => self.parse_unary(),
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.peek_unary_op() {
            let start = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(operand.span);
            return Ok(self.alloc(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.parse_call()
    }

    /// Call and property chains: `a.b(c).d`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            if self.eat(&TokenKind::LParen) {
                let args = self.parse_arguments()?;
                let span = self.span_from(expr.span);
                expr = self.alloc(
                    ExprKind::Call {
                        callee: Box::new(expr),
                        args,
                    },
                    span,
                );
            } else if self.eat(&TokenKind::Dot) {
                let name = self.expect_ident("property name after '.'")?;
                let span = self.span_from(expr.span);
                expr = self.alloc(
                    ExprKind::Get {
                        object: Box::new(expr),
                        name,
                    },
                    span,
                );
            } else {
                return Ok(expr);
            }
        }
    }

    /// Arguments after `(`, through the closing `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current();
        let kind = match token.kind {
            TokenKind::True => ExprKind::Literal(Literal::Bool(true)),
            TokenKind::False => ExprKind::Literal(Literal::Bool(false)),
            TokenKind::Nil => ExprKind::Literal(Literal::Nil),
            TokenKind::Number(bits) => ExprKind::Literal(Literal::Number(bits)),
            TokenKind::String(name) => ExprKind::Literal(Literal::String(name)),
            TokenKind::Ident(name) => ExprKind::Variable(name),
            TokenKind::This => ExprKind::This,
            TokenKind::Super => {
                self.advance();
                self.expect(&TokenKind::Dot)?;
                let method = self.expect_ident("superclass method name")?;
                let span = self.span_from(token.span);
                return Ok(self.alloc(ExprKind::Super { method }, span));
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                let span = self.span_from(token.span);
                return Ok(self.alloc(ExprKind::Grouping(Box::new(inner)), span));
            }
            other => {
                return Err(ParseError::expected_expression(
                    other.describe(self.interner()),
                    token,
                ));
            }
        };
        self.advance();
        Ok(self.alloc(kind, token.span))
    }

    fn make_binary(&mut self, op: lox_ir::BinaryOp, left: Expr, right: Expr) -> Expr {
        let span = left.span.merge(right.span);
        self.alloc(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    fn make_logical(&mut self, op: LogicalOp, left: Expr, right: Expr) -> Expr {
        let span = left.span.merge(right.span);
        self.alloc(
            ExprKind::Logical {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }
}
