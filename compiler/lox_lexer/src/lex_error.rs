//! Lexer error types.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

/// A lexer error: what went wrong, where, and on which line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnexpectedChar(char),
    /// End of input reached inside a string literal.
    UnterminatedString,
}

impl LexError {
    #[cold]
    pub fn unexpected_char(ch: char, span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedChar(ch),
            span,
            line,
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            span,
            line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "here");
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("string literals cannot contain '\"' and have no escapes")
            }
            LexErrorKind::UnexpectedChar(_) => diag,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedChar(ch) => write!(f, "unexpected character '{ch}'"),
            LexErrorKind::UnterminatedString => write!(f, "unterminated string"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for LexError {}
