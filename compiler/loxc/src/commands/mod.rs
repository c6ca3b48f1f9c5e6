//! Command handlers for the `lox` CLI.
//!
//! Each handler reads its input file, reports diagnostics on stderr and
//! returns the process exit status. The pure parts (option parsing and
//! the token/AST dumps) are exposed for tests.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{ast_dump, lex_file, parse_file, token_dump};
pub use run::run_file;

use std::path::Path;

use lox_diagnostic::emitter::{DiagnosticEmitter, LineEmitter};
use lox_diagnostic::LineOffsetTable;
use lox_eval::EvalConfig;
use lox_resolve::{ResolverOptions, Resolutions};

use crate::LoxError;

/// Flags shared by every subcommand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--strict`: local redeclaration is an error.
    pub strict: bool,
    /// `--verbose`: show error codes and resolver warnings.
    pub verbose: bool,
    /// `--max-depth=N`: call depth limit.
    pub max_depth: Option<usize>,
}

impl CliOptions {
    /// Parse flags, returning a usage message for anything unrecognized.
    pub fn parse<'a>(args: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut options = CliOptions::default();
        for arg in args {
            if arg == "--strict" {
                options.strict = true;
            } else if arg == "--verbose" || arg == "-v" {
                options.verbose = true;
            } else if let Some(value) = arg.strip_prefix("--max-depth=") {
                match value.parse::<usize>() {
                    Ok(depth) if depth > 0 => options.max_depth = Some(depth),
                    _ => return Err(format!("invalid value for --max-depth: '{value}'")),
                }
            } else {
                return Err(format!("unknown option '{arg}'"));
            }
        }
        Ok(options)
    }

    pub fn resolver_options(&self) -> ResolverOptions {
        ResolverOptions {
            reject_redeclaration: self.strict,
        }
    }

    pub fn eval_config(&self) -> EvalConfig {
        match self.max_depth {
            Some(max_call_depth) => EvalConfig { max_call_depth },
            None => EvalConfig::default(),
        }
    }
}

pub(crate) fn read_file(path: &str) -> Result<String, LoxError> {
    std::fs::read_to_string(path).map_err(|source| LoxError::Io {
        path: Path::new(path).to_path_buf(),
        source,
    })
}

/// Print `error` to stderr and return its exit status.
pub(crate) fn report(error: &LoxError, source: &str, verbose: bool) -> i32 {
    let lines = LineOffsetTable::build(source);
    eprint!("{}", error.render(&lines, verbose));
    error.exit_code()
}

/// Print resolver warnings to stderr when `verbose` is set.
pub(crate) fn report_warnings(resolutions: &Resolutions, source: &str, verbose: bool) {
    if !verbose || resolutions.warnings().is_empty() {
        return;
    }
    let mut emitter = LineEmitter::new(std::io::stderr(), source).verbose(true);
    for warning in resolutions.warnings() {
        emitter.emit(&warning.to_warning());
    }
    emitter.flush();
}
