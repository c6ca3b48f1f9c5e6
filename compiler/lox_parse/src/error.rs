//! Parse errors.
//!
//! The parser stops at the first error; there is no recovery.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, Token};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub line: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParseErrorKind {
    /// A specific token or construct was required.
    UnexpectedToken { expected: String, found: String },
    /// An expression was required.
    ExpectedExpression { found: String },
    /// Left of `=` is not a variable or property.
    InvalidAssignmentTarget,
}

impl ParseError {
    #[cold]
    pub fn unexpected_token(expected: impl Into<String>, found: String, at: Token) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found,
            },
            span: at.span,
            line: at.line,
        }
    }

    #[cold]
    pub fn expected_expression(found: String, at: Token) -> Self {
        ParseError {
            kind: ParseErrorKind::ExpectedExpression { found },
            span: at.span,
            line: at.line,
        }
    }

    /// Reported at the `=` token.
    #[cold]
    pub fn invalid_assignment_target(eq: Token) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidAssignmentTarget,
            span: eq.span,
            line: eq.line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "here");
        match self.kind {
            ParseErrorKind::InvalidAssignmentTarget => {
                diag.with_note("only variables and properties can be assigned to")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ParseErrorKind::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            ParseErrorKind::InvalidAssignmentTarget => write!(f, "invalid assignment target"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}
