#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;
mod programs;

use lox_ir::StringInterner;
use lox_resolve::{resolve, ResolverOptions};

use crate::{buffer_handler, EvalConfig, EvalError, InterpreterBuilder};

/// Run `source` and return what it printed, or the first runtime error.
fn run_with(source: &str, config: EvalConfig) -> Result<String, EvalError> {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner).unwrap();
    let program = lox_parse::parse(&tokens, &interner).unwrap();
    let resolutions = resolve(&program, &interner, ResolverOptions::default()).unwrap();
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&interner, &resolutions)
        .print_handler(handler.clone())
        .config(config)
        .build();
    interpreter.run(&program)?;
    Ok(handler.captured())
}

fn run(source: &str) -> String {
    run_with(source, EvalConfig::default()).unwrap()
}

fn run_err(source: &str) -> EvalError {
    run_with(source, EvalConfig::default()).unwrap_err()
}

/// Output printed before a runtime error stopped the program.
fn output_before_error(source: &str) -> (String, EvalError) {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner).unwrap();
    let program = lox_parse::parse(&tokens, &interner).unwrap();
    let resolutions = resolve(&program, &interner, ResolverOptions::default()).unwrap();
    let handler = buffer_handler();
    let mut interpreter = InterpreterBuilder::new(&interner, &resolutions)
        .print_handler(handler.clone())
        .build();
    let err = interpreter.run(&program).unwrap_err();
    (handler.captured(), err)
}
