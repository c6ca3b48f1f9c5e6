//! Debug commands: `lex` and `parse` for inspecting the front end.

use lox_ir::ast::dump::dump_program;
use lox_ir::StringInterner;

use super::{read_file, report, CliOptions};
use crate::LoxError;

/// One line per token: source line, token kind, lexeme.
pub fn token_dump(source: &str) -> Result<String, LoxError> {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner)?;
    let mut out = String::new();
    for token in &tokens {
        let line = format!(
            "{:>4} {:<12} {}",
            token.line,
            token.kind.display_name(),
            token.lexeme(source)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

/// The parsed program as one S-expression per statement.
pub fn ast_dump(source: &str) -> Result<String, LoxError> {
    let interner = StringInterner::new();
    let tokens = lox_lexer::lex(source, &interner)?;
    let program = lox_parse::parse(&tokens, &interner)?;
    Ok(dump_program(&program, &interner))
}

pub fn lex_file(path: &str, options: &CliOptions) -> i32 {
    dump_with(path, options, token_dump)
}

pub fn parse_file(path: &str, options: &CliOptions) -> i32 {
    dump_with(path, options, ast_dump)
}

fn dump_with(
    path: &str,
    options: &CliOptions,
    dump: impl FnOnce(&str) -> Result<String, LoxError>,
) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(e) => return report(&e, "", options.verbose),
    };
    match dump(&source) {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(e) => report(&e, &source, options.verbose),
    }
}
