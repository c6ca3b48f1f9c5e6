//! Errors surfaced by the driver.

use std::path::PathBuf;

use lox_diagnostic::emitter::render;
use lox_diagnostic::{Diagnostic, LineOffsetTable};
use lox_eval::EvalError;
use lox_lexer::LexError;
use lox_parse::ParseError;
use lox_resolve::ResolveError;

/// Command-line usage error.
pub const EXIT_USAGE: i32 = 64;
/// Lex, parse or resolution error in the input.
pub const EXIT_DATA_ERROR: i32 = 65;
/// Runtime error while evaluating.
pub const EXIT_RUNTIME_ERROR: i32 = 70;
/// Input file could not be read.
pub const EXIT_IO_ERROR: i32 = 74;

/// The first error any phase produced.
#[derive(Debug, thiserror::Error)]
pub enum LoxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: {error}")]
    Resolve { line: u32, error: ResolveError },

    #[error("line {line}: {error}")]
    Runtime { line: u32, error: EvalError },

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoxError {
    pub fn resolve(error: ResolveError, lines: &LineOffsetTable) -> Self {
        LoxError::Resolve {
            line: lines.line_from_offset(error.span.start),
            error,
        }
    }

    pub fn runtime(error: EvalError, lines: &LineOffsetTable) -> Self {
        let line = error.span.map_or(1, |span| lines.line_from_offset(span.start));
        LoxError::Runtime { line, error }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoxError::Lex(_) | LoxError::Parse(_) | LoxError::Resolve { .. } => EXIT_DATA_ERROR,
            LoxError::Runtime { .. } => EXIT_RUNTIME_ERROR,
            LoxError::Io { .. } => EXIT_IO_ERROR,
        }
    }

    /// Diagnostic form; `None` for I/O failures, which have no source location.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            LoxError::Lex(e) => Some(e.to_diagnostic()),
            LoxError::Parse(e) => Some(e.to_diagnostic()),
            LoxError::Resolve { error, .. } => Some(error.to_diagnostic()),
            LoxError::Runtime { error, .. } => Some(error.to_diagnostic()),
            LoxError::Io { .. } => None,
        }
    }

    /// Render as `line N: message`, with the error code appended when verbose.
    pub fn render(&self, lines: &LineOffsetTable, verbose: bool) -> String {
        match self.to_diagnostic() {
            Some(diag) => render(&diag, lines, verbose),
            None => format!("{self}\n"),
        }
    }
}
