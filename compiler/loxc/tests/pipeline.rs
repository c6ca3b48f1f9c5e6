#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-program tests through the library pipeline.
//!
//! Programs run with a buffered print handler so their output can be
//! compared exactly.

use lox_eval::{buffer_handler, EvalConfig};
use lox_resolve::ResolverOptions;
use loxc::commands::{ast_dump, token_dump, CliOptions};
use loxc::{check_source, run_source, LoxError, RunOptions};
use lox_diagnostic::LineOffsetTable;
use pretty_assertions::assert_eq;

fn run(source: &str) -> Result<String, LoxError> {
    run_with(source, RunOptions::default())
}

fn run_with(source: &str, options: RunOptions) -> Result<String, LoxError> {
    let handler = buffer_handler();
    run_source(source, options, handler.clone())?;
    Ok(handler.captured())
}

fn error_line(source: &str) -> String {
    let err = run(source).unwrap_err();
    err.render(&LineOffsetTable::build(source), false)
}

#[test]
fn hello_world() {
    assert_eq!(run("print \"Hello, world!\";").unwrap(), "Hello, world!\n");
}

#[test]
fn counter_closure_program() {
    let source = r#"
fun makeCounter() {
  var i = 0;
  fun count() {
    i = i + 1;
    print i;
  }
  return count;
}

var counter = makeCounter();
counter();
counter();
"#;
    assert_eq!(run(source).unwrap(), "1\n2\n");
}

#[test]
fn class_hierarchy_program() {
    let source = r#"
class Doughnut {
  cook() {
    print "Fry until golden brown.";
  }
}

class BostonCream < Doughnut {
  cook() {
    super.cook();
    print "Pipe full of custard and coat with chocolate.";
  }
}

BostonCream().cook();
"#;
    assert_eq!(
        run(source).unwrap(),
        "Fry until golden brown.\nPipe full of custard and coat with chocolate.\n"
    );
}

#[test]
fn lex_error_reports_line() {
    let source = "print 1;\nprint \"open;\n";
    let err = run(source).unwrap_err();
    assert!(matches!(err, LoxError::Lex(_)));
    assert_eq!(err.exit_code(), 65);
    assert_eq!(error_line(source), "line 2: unterminated string\n");
}

#[test]
fn unexpected_character_is_a_lex_error() {
    assert_eq!(error_line("var a = 1;\n@"), "line 2: unexpected character '@'\n");
}

#[test]
fn parse_error_reports_line() {
    let source = "var a = 1;\n\nprint a\n";
    let err = run(source).unwrap_err();
    assert!(matches!(err, LoxError::Parse(_)));
    assert_eq!(err.exit_code(), 65);
    assert_eq!(error_line(source), "line 4: expected ';', found end of input\n");
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(
        error_line("var a; var b;\na + b = 3;"),
        "line 2: invalid assignment target\n"
    );
}

#[test]
fn resolve_error_reports_line() {
    let source = "fun f() {\n  return this;\n}\n";
    let err = run(source).unwrap_err();
    assert!(matches!(err, LoxError::Resolve { line: 2, .. }));
    assert_eq!(err.to_string(), "line 2: can't use 'this' outside of a class");
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn runtime_error_reports_line_and_keeps_output() {
    let source = "print \"before\";\nprint -nil;\nprint \"after\";\n";
    let handler = buffer_handler();
    let err = run_source(source, RunOptions::default(), handler.clone()).unwrap_err();
    assert_eq!(handler.captured(), "before\n");
    assert_eq!(err.exit_code(), 70);
    assert_eq!(
        err.render(&LineOffsetTable::build(source), false),
        "line 2: operator '-' cannot be applied to nil\n"
    );
}

#[test]
fn verbose_rendering_appends_code() {
    let source = "nil();";
    let err = run(source).unwrap_err();
    assert_eq!(
        err.render(&LineOffsetTable::build(source), true),
        "line 1: can only call functions and classes, found nil [E6005]\n"
    );
}

#[test]
fn strict_mode_rejects_local_redeclaration() {
    let source = "{ var a = 1; var a = 2; print a; }";
    assert_eq!(run(source).unwrap(), "2\n");

    let strict = RunOptions {
        resolver: ResolverOptions {
            reject_redeclaration: true,
        },
        ..RunOptions::default()
    };
    let err = run_with(source, strict).unwrap_err();
    assert!(matches!(err, LoxError::Resolve { .. }));
}

#[test]
fn default_mode_records_redeclaration_warning() {
    let front = check_source("{ var a = 1; var a = 2; }", ResolverOptions::default()).unwrap();
    assert_eq!(front.resolutions.warnings().len(), 1);
}

#[test]
fn max_depth_option_limits_recursion() {
    let source = "fun down(n) { if (n > 0) down(n - 1); } down(20);";
    let shallow = RunOptions {
        eval: EvalConfig { max_call_depth: 10 },
        ..RunOptions::default()
    };
    let err = run_with(source, shallow).unwrap_err();
    assert!(matches!(err, LoxError::Runtime { .. }));
    assert_eq!(
        err.to_string(),
        "line 1: maximum recursion depth exceeded (limit: 10)"
    );
    assert!(run(source).is_ok());
}

#[test]
fn check_does_not_execute() {
    assert!(check_source("print 1 + nil;", ResolverOptions::default()).is_ok());
}

#[test]
fn token_dump_lists_lines_and_kinds() {
    let dump = token_dump("var x = 1;\nprint x;").unwrap();
    assert_eq!(
        dump,
        "   1 var          var\n   1 identifier   x\n   1 =            =\n   1 number       1\n   1 ;            ;\n   2 print        print\n   2 identifier   x\n   2 ;            ;\n   2 end of input\n"
    );
}

#[test]
fn ast_dump_shows_desugared_for() {
    assert_eq!(
        ast_dump("for (var i = 0; i < 2; i = i + 1) print i;").unwrap(),
        "(block (var i 0) (while (< i 2) (block (print i) (expr (= i (+ i 1))))))\n"
    );
}

#[test]
fn cli_options_parse_flags() {
    let options = CliOptions::parse(["--strict", "-v", "--max-depth=50"]).unwrap();
    assert_eq!(
        options,
        CliOptions {
            strict: true,
            verbose: true,
            max_depth: Some(50),
        }
    );
    assert_eq!(options.eval_config().max_call_depth, 50);
    assert!(options.resolver_options().reject_redeclaration);
    assert!(CliOptions::parse(["--max-depth=zero"]).is_err());
    assert!(CliOptions::parse(["--max-depth=0"]).is_err());
    assert!(CliOptions::parse(["--bogus"]).is_err());
}

#[test]
fn long_expression_runs_and_is_freed() {
    let source = format!("print 1{};", "+1".repeat(299_999));
    assert_eq!(run(&source).unwrap(), "300000\n");
}
