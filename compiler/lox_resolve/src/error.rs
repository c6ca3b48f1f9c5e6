//! Resolution errors.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolveError {
    pub kind: ResolveErrorKind,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ResolveErrorKind {
    UndeclaredVariable(&'static str),
    ThisOutsideClass,
    SuperOutsideClass,
    SuperWithoutSuperclass,
    SelfInheritance(&'static str),
    TopLevelReturn,
    ReturnValueFromInitializer,
    ReadInOwnInitializer(&'static str),
    DuplicateDeclaration(&'static str),
    DuplicateParameter(&'static str),
}

impl ResolveError {
    #[cold]
    pub fn new(kind: ResolveErrorKind, span: Span) -> Self {
        ResolveError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ResolveErrorKind::UndeclaredVariable(_) => ErrorCode::E2001,
            ResolveErrorKind::ThisOutsideClass => ErrorCode::E2002,
            ResolveErrorKind::SuperOutsideClass => ErrorCode::E2003,
            ResolveErrorKind::SuperWithoutSuperclass => ErrorCode::E2004,
            ResolveErrorKind::SelfInheritance(_) => ErrorCode::E2005,
            ResolveErrorKind::TopLevelReturn => ErrorCode::E2006,
            ResolveErrorKind::ReturnValueFromInitializer => ErrorCode::E2007,
            ResolveErrorKind::ReadInOwnInitializer(_) => ErrorCode::E2008,
            ResolveErrorKind::DuplicateDeclaration(_) => ErrorCode::E2009,
            ResolveErrorKind::DuplicateParameter(_) => ErrorCode::E2010,
        }
    }

    /// Convert to an error diagnostic.
    ///
    /// Warnings collected in `Resolutions` use [`ResolveError::to_warning`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "here")
    }

    pub fn to_warning(&self) -> Diagnostic {
        Diagnostic::warning(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "here")
            .with_note("the new declaration shadows the old one")
    }
}

impl fmt::Display for ResolveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveErrorKind::UndeclaredVariable(name) => {
                write!(f, "undeclared variable '{name}'")
            }
            ResolveErrorKind::ThisOutsideClass => write!(f, "can't use 'this' outside of a class"),
            ResolveErrorKind::SuperOutsideClass => {
                write!(f, "can't use 'super' outside of a class")
            }
            ResolveErrorKind::SuperWithoutSuperclass => {
                write!(f, "can't use 'super' in a class with no superclass")
            }
            ResolveErrorKind::SelfInheritance(name) => {
                write!(f, "class '{name}' can't inherit from itself")
            }
            ResolveErrorKind::TopLevelReturn => write!(f, "can't return from top-level code"),
            ResolveErrorKind::ReturnValueFromInitializer => {
                write!(f, "can't return a value from an initializer")
            }
            ResolveErrorKind::ReadInOwnInitializer(name) => {
                write!(f, "can't read local variable '{name}' in its own initializer")
            }
            ResolveErrorKind::DuplicateDeclaration(name) => {
                write!(f, "'{name}' is already declared in this scope")
            }
            ResolveErrorKind::DuplicateParameter(name) => {
                write!(f, "duplicate parameter '{name}'")
            }
        }
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ResolveError {}
