//! Recursive descent parser for Lox.
//!
//! Consumes a `TokenList` from `lox_lexer` and produces a [`Program`]. The
//! parser is fail-fast: the first unexpected token aborts the parse with a
//! [`ParseError`] naming what was expected, what was found, and the line.
//!
//! Expression ids are assigned in parse order, so parsing the same tokens
//! twice yields equal trees.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use lox_ir::{Expr, ExprId, ExprKind, Program, Span, StringInterner, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    next_id: u32,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            next_id: 0,
        }
    }

    // Cursor delegation methods.

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self, what: &str) -> Result<lox_ir::Name, ParseError> {
        self.cursor.expect_ident(what)
    }

    fn interner(&self) -> &'a StringInterner {
        self.cursor.interner()
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.cursor.previous_span())
    }

    /// Build an expression node with the next id.
    fn alloc(&mut self, kind: ExprKind, span: Span) -> Expr {
        let id = ExprId::new(self.next_id);
        self.next_id += 1;
        Expr::new(id, kind, span)
    }

    /// Parse declarations until `Eof`.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        while !self.is_at_end() {
            stmts.push(self.parse_declaration()?);
        }
        Ok(Program { stmts })
    }
}

/// Parse a token list into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Program, ParseError> {
    let program = Parser::new(tokens, interner).parse_program()?;
    tracing::debug!(stmts = program.stmts.len(), "parsed program");
    Ok(program)
}

#[cfg(test)]
mod tests;
