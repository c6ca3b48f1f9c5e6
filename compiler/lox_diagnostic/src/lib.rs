//! Diagnostic system for error reporting.
//!
//! Every phase error (lex, parse, resolve, runtime) converts into a
//! [`Diagnostic`]: a stable [`ErrorCode`], a message, and the span of the
//! offending construct. The [`emitter`] renders diagnostics in the one-line
//! `line <N>: <message>` form, using a [`LineOffsetTable`] to turn byte spans
//! into line numbers.

mod diagnostic;
pub mod emitter;
mod error_code;
mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use span_utils::LineOffsetTable;
