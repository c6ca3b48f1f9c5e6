//! Statement Parsing

use lox_ir::{ExprKind, Literal, Span, Stmt, StmtKind, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Print => {
                let start = self.advance().span;
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Print(value), self.span_from(start)))
            }
            TokenKind::Return => {
                let start = self.advance().span;
                let value = if self.check(&TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Return(value), self.span_from(start)))
            }
            TokenKind::LBrace => {
                let start = self.advance().span;
                let stmts = self.parse_block_body()?;
                Ok(Stmt::new(StmtKind::Block(stmts), self.span_from(start)))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => {
                let start = self.advance().span;
                self.expect(&TokenKind::LParen)?;
                let cond = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                let body = self.parse_statement()?;
                Ok(Stmt::new(
                    StmtKind::While {
                        cond,
                        body: Box::new(body),
                    },
                    self.span_from(start),
                ))
            }
            TokenKind::For => self.parse_for(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Declarations up to and including the closing `}`.
    pub(crate) fn parse_block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            stmts.push(self.parse_declaration()?);
        }
        self.expect(&TokenKind::RBrace)?;
        Ok(stmts)
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;
        let span = self.span_from(expr.span);
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            self.span_from(start),
        ))
    }

    /// Lower `for (init; cond; incr) body` to
    /// `{ init; while (cond) { body; incr; } }`.
    ///
    /// A missing condition becomes `true`. The outer block exists only when
    /// there is an initializer, and the inner one only when there is an
    /// increment.
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        self.expect(&TokenKind::LParen)?;

        let init = if self.eat(&TokenKind::Semicolon) {
            None
        } else if self.check(&TokenKind::Var) {
            Some(self.parse_var_decl()?)
        } else {
            Some(self.parse_expr_stmt()?)
        };

        let cond = if self.check(&TokenKind::Semicolon) {
            let at = Span::point(self.current_span().start);
            self.alloc(ExprKind::Literal(Literal::Bool(true)), at)
        } else {
            self.parse_expr()?
        };
        self.expect(&TokenKind::Semicolon)?;

        let incr = if self.check(&TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(&TokenKind::RParen)?;

        let mut body = self.parse_statement()?;
        if let Some(incr) = incr {
            let incr_span = incr.span;
            let body_span = body.span.merge(incr_span);
            let incr_stmt = Stmt::new(StmtKind::Expr(incr), incr_span);
            body = Stmt::new(StmtKind::Block(vec![body, incr_stmt]), body_span);
        }

        let span = self.span_from(start);
        let mut lowered = Stmt::new(
            StmtKind::While {
                cond,
                body: Box::new(body),
            },
            span,
        );
        if let Some(init) = init {
            lowered = Stmt::new(StmtKind::Block(vec![init, lowered]), span);
        }
        Ok(lowered)
    }
}
