//! Lexer for Lox using logos with string interning.
//!
//! [`Lexer`] is a lazy iterator over `Result<Token, LexError>`; [`lex`]
//! collects it into a [`TokenList`] terminated by `Eof`, stopping at the
//! first error.

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Lazy token stream over one source text.
///
/// Yields exactly one `Eof` token after the last real token, then `None`.
/// After an error the stream ends.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    interner: &'src StringInterner,
    /// Line of the last scanned offset.
    line: u32,
    /// Byte offset up to which newlines have been counted.
    scanned: usize,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, interner: &'src StringInterner) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            interner,
            line: 1,
            scanned: 0,
            done: false,
        }
    }

    /// Advance the line counter to `offset` and return the line there.
    fn line_at(&mut self, offset: usize) -> u32 {
        let end = offset.min(self.source.len());
        if end > self.scanned {
            let newlines = self.source.as_bytes()[self.scanned..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.line = self
                .line
                .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
            self.scanned = end;
        }
        self.line
    }

    fn convert(&self, raw: RawToken, slice: &str) -> TokenKind {
        match raw {
            RawToken::Number(value) => TokenKind::number(value),
            RawToken::String => {
                let content = slice
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or("");
                TokenKind::String(self.interner.intern(content))
            }
            RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),

            RawToken::And => TokenKind::And,
            RawToken::Class => TokenKind::Class,
            RawToken::Else => TokenKind::Else,
            RawToken::False => TokenKind::False,
            RawToken::For => TokenKind::For,
            RawToken::Fun => TokenKind::Fun,
            RawToken::If => TokenKind::If,
            RawToken::Nil => TokenKind::Nil,
            RawToken::Or => TokenKind::Or,
            RawToken::Print => TokenKind::Print,
            RawToken::Return => TokenKind::Return,
            RawToken::Super => TokenKind::Super,
            RawToken::This => TokenKind::This,
            RawToken::True => TokenKind::True,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,

            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Semicolon => TokenKind::Semicolon,

            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Star => TokenKind::Star,
            RawToken::Bang => TokenKind::Bang,
            RawToken::BangEq => TokenKind::BangEq,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,

            // Skipped by logos or turned into errors before conversion.
            RawToken::LineComment | RawToken::UnterminatedString => TokenKind::Eof,
        }
    }

    fn span_of(range: std::ops::Range<usize>) -> Span {
        Span::from_offsets(range).unwrap_or(Span::DUMMY)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(result) = self.raw.next() else {
            self.done = true;
            let end = self.source.len();
            let line = self.line_at(end);
            let offset = u32::try_from(end).unwrap_or(u32::MAX);
            return Some(Ok(Token::new(TokenKind::Eof, Span::point(offset), line)));
        };

        let range = self.raw.span();
        let line = self.line_at(range.start);
        let span = Self::span_of(range.clone());

        match result {
            Ok(RawToken::UnterminatedString) => {
                self.done = true;
                Some(Err(LexError::unterminated_string(span, line)))
            }
            Ok(raw) => {
                let kind = self.convert(raw, self.raw.slice());
                Some(Ok(Token::new(kind, span, line)))
            }
            Err(()) => {
                self.done = true;
                let ch = self
                    .source
                    .get(range.start..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or('\0');
                let width = ch.len_utf8();
                let span = Self::span_of(range.start..range.start + width);
                Some(Err(LexError::unexpected_char(ch, span, line)))
            }
        }
    }
}

/// Lex source code into a `TokenList` ending in `Eof`.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    for token in Lexer::new(source, interner) {
        tokens.push(token?);
    }
    Ok(tokens)
}
