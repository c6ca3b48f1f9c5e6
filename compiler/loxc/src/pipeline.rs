//! Phase sequencing.

use lox_diagnostic::LineOffsetTable;
use lox_eval::{EvalConfig, InterpreterBuilder, SharedPrintHandler};
use lox_ir::{Program, StringInterner};
use lox_resolve::{ResolverOptions, Resolutions};

use crate::LoxError;

/// Options for a whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub resolver: ResolverOptions,
    pub eval: EvalConfig,
}

/// Output of the static phases, ready to evaluate.
pub struct Frontend {
    pub interner: StringInterner,
    pub program: Program,
    pub resolutions: Resolutions,
    pub lines: LineOffsetTable,
}

impl std::fmt::Debug for Frontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frontend")
            .field("statements", &self.program.stmts.len())
            .field("locals", &self.resolutions.local_count())
            .finish_non_exhaustive()
    }
}

/// Lex, parse and resolve `source`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn frontend(source: &str, options: ResolverOptions) -> Result<Frontend, LoxError> {
    let lines = LineOffsetTable::build(source);
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner)?;
    let program = lox_parse::parse(&tokens, &interner)?;
    let resolutions = lox_resolve::resolve(&program, &interner, options)
        .map_err(|error| LoxError::resolve(error, &lines))?;
    Ok(Frontend {
        interner,
        program,
        resolutions,
        lines,
    })
}

/// Run only the static phases.
pub fn check_source(source: &str, options: ResolverOptions) -> Result<Frontend, LoxError> {
    frontend(source, options)
}

/// Evaluate an already resolved program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run_program(
    front: &Frontend,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
) -> Result<(), LoxError> {
    let mut interpreter = InterpreterBuilder::new(&front.interner, &front.resolutions)
        .print_handler(print_handler)
        .config(config)
        .build();
    interpreter
        .run(&front.program)
        .map_err(|error| LoxError::runtime(error, &front.lines))
}

/// Lex, parse, resolve and evaluate `source`.
pub fn run_source(
    source: &str,
    options: RunOptions,
    print_handler: SharedPrintHandler,
) -> Result<Frontend, LoxError> {
    let front = frontend(source, options.resolver)?;
    run_program(&front, options.eval, print_handler)?;
    Ok(front)
}
