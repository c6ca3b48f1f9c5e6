//! Core parser tests.
//!
//! Shapes are compared through the s-expression dump from `lox_ir`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lox_ir::ast::dump::dump_program;
use lox_ir::{ExprKind, Program, StmtKind, StringInterner};
use pretty_assertions::assert_eq;

use crate::{parse, ParseError, ParseErrorKind};

fn parse_source(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    let tokens = lox_lexer::lex(source, interner).unwrap();
    parse(&tokens, interner)
}

fn dump(source: &str) -> String {
    let interner = StringInterner::new();
    let program = parse_source(source, &interner).unwrap();
    dump_program(&program, &interner)
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    parse_source(source, &interner).unwrap_err()
}

// ============================================================================
// Expressions
// ============================================================================

#[test]
fn test_parse_literals() {
    assert_eq!(
        dump("1; 2.5; \"hi\"; true; false; nil;"),
        "(expr 1)\n(expr 2.5)\n(expr \"hi\")\n(expr true)\n(expr false)\n(expr nil)\n"
    );
}

#[test]
fn test_parse_precedence() {
    assert_eq!(dump("print 1 + 2 * 3;"), "(print (+ 1 (* 2 3)))\n");
    assert_eq!(dump("print (1 + 2) * 3;"), "(print (* (group (+ 1 2)) 3))\n");
    assert_eq!(
        dump("print 1 < 2 == 3 >= 4;"),
        "(print (== (< 1 2) (>= 3 4)))\n"
    );
}

#[test]
fn test_parse_left_associative() {
    assert_eq!(dump("print 8 - 4 - 2;"), "(print (- (- 8 4) 2))\n");
    assert_eq!(dump("print 8 / 4 / 2;"), "(print (/ (/ 8 4) 2))\n");
}

#[test]
fn test_parse_logical_precedence() {
    assert_eq!(
        dump("print a or b and c;"),
        "(print (or a (and b c)))\n"
    );
}

#[test]
fn test_parse_unary() {
    assert_eq!(dump("print -!-x;"), "(print (- (! (- x))))\n");
}

#[test]
fn test_parse_assignment_is_right_associative() {
    assert_eq!(dump("a = b = 3;"), "(expr (= a (= b 3)))\n");
}

#[test]
fn test_parse_property_chains() {
    assert_eq!(
        dump("a.b(c).d;"),
        "(expr (. (call (. a b) c) d))\n"
    );
    assert_eq!(dump("f()();"), "(expr (call (call f)))\n");
}

#[test]
fn test_parse_set_targets() {
    assert_eq!(
        dump("a.b(c).d = 4;"),
        "(expr (set (. (call (. a b) c) d) 4))\n"
    );
    assert_eq!(dump("this.x = 1;"), "(expr (set (. this x) 1))\n");
}

#[test]
fn test_parse_super_access() {
    assert_eq!(dump("super.greet();"), "(expr (call (super greet)))\n");
}

#[test]
fn test_parse_call_arguments() {
    assert_eq!(dump("f(1, g(2), 3);"), "(expr (call f 1 (call g 2) 3))\n");
}

// ============================================================================
// Statements and declarations
// ============================================================================

#[test]
fn test_parse_var_decl() {
    assert_eq!(dump("var a; var b = a;"), "(var a)\n(var b a)\n");
}

#[test]
fn test_parse_block_and_if() {
    assert_eq!(
        dump("if (x) { print 1; } else print 2;"),
        "(if x (block (print 1)) (print 2))\n"
    );
}

#[test]
fn test_parse_dangling_else_binds_nearest() {
    assert_eq!(
        dump("if (a) if (b) print 1; else print 2;"),
        "(if a (if b (print 1) (print 2)))\n"
    );
}

#[test]
fn test_parse_function_decl() {
    assert_eq!(
        dump("fun add(a, b) { return a + b; }"),
        "(fun add (a b) (return (+ a b)))\n"
    );
    assert_eq!(dump("fun f() { return; }"), "(fun f () (return))\n");
}

#[test]
fn test_parse_class_decl() {
    assert_eq!(
        dump("class B < A { init(x) { this.x = x; } get() { return this.x; } }"),
        "(class B < A (fun init (x) (expr (set (. this x) x))) (fun get () (return (. this x))))\n"
    );
    assert_eq!(dump("class Empty {}"), "(class Empty)\n");
}

#[test]
fn test_parse_for_full_desugars() {
    assert_eq!(
        dump("for (var i = 0; i < 3; i = i + 1) print i;"),
        "(block (var i 0) (while (< i 3) (block (print i) (expr (= i (+ i 1))))))\n"
    );
}

#[test]
fn test_parse_for_empty_clauses() {
    assert_eq!(dump("for (;;) print 1;"), "(while true (print 1))\n");
}

#[test]
fn test_parse_for_expression_initializer() {
    assert_eq!(
        dump("for (i = 0; i < 1;) {}"),
        "(block (expr (= i 0)) (while (< i 1) (block)))\n"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_missing_semicolon() {
    let err = parse_err("print 1\nprint 2;");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "';'".to_string(),
            found: "'print'".to_string(),
        }
    );
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "line 2: expected ';', found 'print'");
}

#[test]
fn test_error_expected_expression() {
    let err = parse_err("var a = ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: "';'".to_string()
        }
    );
}

#[test]
fn test_error_at_end_of_input() {
    let err = parse_err("print (1 + 2");
    assert_eq!(err.to_string(), "line 1: expected ')', found end of input");
}

#[test]
fn test_error_invalid_assignment_targets() {
    for source in ["a + b = c;", "(a) = 1;", "f() = 2;", "1 = 2;"] {
        let err = parse_err(source);
        assert_eq!(err.kind, ParseErrorKind::InvalidAssignmentTarget, "{source}");
        assert_eq!(err.code(), lox_diagnostic::ErrorCode::E1003);
    }
}

#[test]
fn test_error_names_missing_identifier() {
    let err = parse_err("fun (a) {}");
    assert_eq!(err.to_string(), "line 1: expected function name, found '('");

    let err = parse_err("class A < {}");
    assert_eq!(err.to_string(), "line 1: expected superclass name, found '{'");

    let err = parse_err("a.1;");
    assert_eq!(
        err.to_string(),
        "line 1: expected property name after '.', found '1'"
    );
}

#[test]
fn test_error_field_declaration_syntax_rejected() {
    let err = parse_err("class A { x; }");
    assert_eq!(err.to_string(), "line 1: expected '(', found ';'");
}

#[test]
fn test_error_unclosed_block() {
    let err = parse_err("{ print 1;");
    assert_eq!(err.to_string(), "line 1: expected '}', found end of input");
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_parse_is_idempotent() {
    let source = "class A { f(x) { return x; } }\nvar a = A().f(1);\nfor (;;) { a = a + 1; }";
    let interner = StringInterner::new();
    let first = parse_source(source, &interner).unwrap();
    let second = parse_source(source, &interner).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_expr_ids_are_unique() {
    fn collect(expr: &lox_ir::Expr, ids: &mut Vec<lox_ir::ExprId>) {
        ids.push(expr.id);
        match &expr.kind {
            ExprKind::Assign { value, .. } => collect(value, ids),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                collect(left, ids);
                collect(right, ids);
            }
            ExprKind::Call { callee, args } => {
                collect(callee, ids);
                for arg in args {
                    collect(arg, ids);
                }
            }
            _ => {}
        }
    }

    let interner = StringInterner::new();
    let program = parse_source("f(a + b, c = d or e);", &interner).unwrap();
    let StmtKind::Expr(expr) = &program.stmts[0].kind else {
        panic!("expected expression statement");
    };
    let mut ids = Vec::new();
    collect(expr, &mut ids);
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
}

#[test]
fn test_spans_cover_statements() {
    let source = "var answer = 42;";
    let interner = StringInterner::new();
    let program = parse_source(source, &interner).unwrap();
    let span = program.stmts[0].span;
    assert_eq!(&source[span.to_range()], source);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let interner = StringInterner::new();
    assert!(parse_source(&source, &interner).is_ok());
}

#[test]
fn test_long_chains_are_freed_without_overflow() {
    let interner = StringInterner::new();
    let terms = 300_000;

    let sum = format!("print 1{};", "+1".repeat(terms - 1));
    let program = parse_source(&sum, &interner).unwrap();
    assert_eq!(program.stmts.len(), 1);
    drop(program);

    let negated = format!("print {}1;", "-".repeat(terms));
    drop(parse_source(&negated, &interner).unwrap());

    let blocks = format!("{}{}", "{".repeat(100_000), "}".repeat(100_000));
    drop(parse_source(&blocks, &interner).unwrap());
}
