//! Declaration Parsing
//!
//! `var`, `fun` and `class` declarations. Anything else falls through to
//! statement parsing.

use std::rc::Rc;

use lox_ir::{ClassDecl, ExprKind, FunctionDecl, Param, Stmt, StmtKind, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Class => self.parse_class_decl(),
            TokenKind::Fun => {
                let start = self.advance().span;
                let decl = self.parse_function("function")?;
                Ok(Stmt::new(
                    StmtKind::Function(Rc::new(decl)),
                    self.span_from(start),
                ))
            }
            TokenKind::Var => self.parse_var_decl(),
            _ => self.parse_statement(),
        }
    }

    /// `var name ( = init )? ;`
    pub(crate) fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let name = self.expect_ident("variable name")?;
        let init = if self.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Var { name, init }, self.span_from(start)))
    }

    /// `name ( params ) { body }`, shared by functions and methods.
    ///
    /// `kind` names the construct in errors: "function" or "method".
    fn parse_function(&mut self, kind: &str) -> Result<FunctionDecl, ParseError> {
        let start = self.current_span();
        let name = self.expect_ident(&format!("{kind} name"))?;

        self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.check(&TokenKind::RParen) {
            loop {
                let span = self.current_span();
                let name = self.expect_ident("parameter name")?;
                params.push(Param { name, span });
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;

        self.expect(&TokenKind::LBrace)?;
        let body = self.parse_block_body()?;

        Ok(FunctionDecl {
            name,
            params,
            body,
            span: self.span_from(start),
        })
    }

    /// `class Name ( < Super )? { methods }`
    fn parse_class_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance().span;
        let name = self.expect_ident("class name")?;

        let superclass = if self.eat(&TokenKind::Lt) {
            let span = self.current_span();
            let super_name = self.expect_ident("superclass name")?;
            Some(self.alloc(ExprKind::Variable(super_name), span))
        } else {
            None
        };

        self.expect(&TokenKind::LBrace)?;
        let mut methods = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            methods.push(Rc::new(self.parse_function("method")?));
        }
        self.expect(&TokenKind::RBrace)?;

        tracing::trace!(methods = methods.len(), "parsed class");
        Ok(Stmt::new(
            StmtKind::Class(ClassDecl {
                name,
                superclass,
                methods,
            }),
            self.span_from(start),
        ))
    }
}
