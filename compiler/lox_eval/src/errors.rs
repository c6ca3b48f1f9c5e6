//! Runtime errors.
//!
//! Every runtime failure is an [`EvalError`] built by one of the `#[cold]`
//! factory functions below. The factory fills in the structured
//! [`EvalErrorKind`] and the message together; the interpreter attaches the
//! span of the failing expression.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{BinaryOp, Span, UnaryOp};

/// Result of evaluating an expression.
pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Structured runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Binary operator applied to operands it does not accept.
    InvalidOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    /// Unary operator applied to an operand it does not accept.
    InvalidOperand { op: UnaryOp, operand: &'static str },
    /// `class A < x` where `x` is not a class.
    SuperclassNotClass { found: &'static str },
    /// Property read on a non-instance.
    NotAnInstanceGet { found: &'static str },
    /// Property write on a non-instance.
    NotAnInstanceSet { found: &'static str },
    UndefinedVariable { name: String },
    UndefinedProperty { name: String },
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    NotCallable { type_name: &'static str },
    /// Call depth reached the configured limit.
    RecursionLimit { limit: usize },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidOperands { .. }
            | Self::InvalidOperand { .. }
            | Self::SuperclassNotClass { .. }
            | Self::NotAnInstanceGet { .. }
            | Self::NotAnInstanceSet { .. } => ErrorCode::E6001,
            Self::UndefinedVariable { .. } => ErrorCode::E6002,
            Self::UndefinedProperty { .. } => ErrorCode::E6003,
            Self::ArityMismatch { .. } => ErrorCode::E6004,
            Self::NotCallable { .. } => ErrorCode::E6005,
            Self::RecursionLimit { .. } => ErrorCode::E6006,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOperands { op, left, right } => write!(
                f,
                "operator '{}' cannot be applied to {left} and {right}",
                op.as_symbol()
            ),
            Self::InvalidOperand { op, operand } => write!(
                f,
                "operator '{}' cannot be applied to {operand}",
                op.as_symbol()
            ),
            Self::SuperclassNotClass { found } => {
                write!(f, "superclass must be a class, found {found}")
            }
            Self::NotAnInstanceGet { found } => {
                write!(f, "only instances have properties, found {found}")
            }
            Self::NotAnInstanceSet { found } => {
                write!(f, "only instances have fields, found {found}")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable '{name}'"),
            Self::UndefinedProperty { name } => write!(f, "undefined property '{name}'"),
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(f, "'{name}' expects {expected} argument{plural}, got {got}")
            }
            Self::NotCallable { type_name } => {
                write!(f, "can only call functions and classes, found {type_name}")
            }
            Self::RecursionLimit { limit } => {
                write!(f, "maximum recursion depth exceeded (limit: {limit})")
            }
        }
    }
}

/// A runtime error, optionally located.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a span unless one is already present.
    ///
    /// Errors bubble outward through nested expressions; the innermost span
    /// is the one reported.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.message.clone());
        match self.span {
            Some(span) => diag.with_label(span, "here"),
            None => diag,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Operator errors

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperands { op, left, right })
}

#[cold]
pub fn invalid_operand(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperand { op, operand })
}

// Class and property errors

#[cold]
pub fn superclass_not_class(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SuperclassNotClass { found })
}

#[cold]
pub fn property_on_non_instance(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnInstanceGet { found })
}

#[cold]
pub fn field_on_non_instance(found: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnInstanceSet { found })
}

#[cold]
pub fn undefined_property(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedProperty {
        name: name.to_string(),
    })
}

// Variable and call errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}
