use lox_ir::Span;
use pretty_assertions::assert_eq;

use super::{output_before_error, run_err, run_with};
use crate::{EvalConfig, EvalErrorKind};

#[test]
fn type_error_stops_execution() {
    let (output, err) = output_before_error("print 1; print 1 + \"a\"; print 2;");
    assert_eq!(output, "1\n");
    assert_eq!(err.message, "operator '+' cannot be applied to number and string");
    assert_eq!(err.span, Some(Span::new(15, 22)));
}

#[test]
fn unary_minus_needs_number() {
    assert_eq!(
        run_err("print -\"x\";").kind,
        EvalErrorKind::InvalidOperand {
            op: lox_ir::UnaryOp::Neg,
            operand: "string"
        }
    );
}

#[test]
fn undefined_global_variable() {
    let err = run_err("fun f() { return missing; } f();");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn assign_to_undefined_global() {
    let err = run_err("fun f() { ghost = 1; } f();");
    assert_eq!(err.message, "undefined variable 'ghost'");
}

#[test]
fn arity_mismatch_for_function() {
    let err = run_err("fun f(a, b) {} f(1);");
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "f".to_string(),
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn arity_mismatch_with_too_many_or_too_few_arguments() {
    assert_eq!(
        run_err("fun f(a) {} f(1, 2);").message,
        "'f' expects 1 argument, got 2"
    );
    assert_eq!(
        run_err("fun f(a) {} f();").message,
        "'f' expects 1 argument, got 0"
    );
}

#[test]
fn arity_mismatch_for_class_without_init() {
    let err = run_err("class A {} A(1);");
    assert_eq!(err.message, "'A' expects 0 arguments, got 1");
}

#[test]
fn calling_non_callable() {
    let err = run_err("\"text\"();");
    assert_eq!(err.kind, EvalErrorKind::NotCallable { type_name: "string" });
}

#[test]
fn undefined_property() {
    let err = run_err("class A {} A().nope;");
    assert_eq!(err.message, "undefined property 'nope'");
}

#[test]
fn property_access_on_non_instance() {
    assert_eq!(
        run_err("var x = 1; print x.y;").message,
        "only instances have properties, found number"
    );
    assert_eq!(
        run_err("var x = nil; x.y = 2;").message,
        "only instances have fields, found nil"
    );
}

#[test]
fn superclass_must_be_a_class() {
    let err = run_err("var NotClass = 1; class A < NotClass {}");
    assert_eq!(err.kind, EvalErrorKind::SuperclassNotClass { found: "number" });
}

#[test]
fn super_method_missing() {
    let err = run_err("class A {} class B < A { m() { return super.gone(); } } B().m();");
    assert_eq!(err.message, "undefined property 'gone'");
}

#[test]
fn runaway_recursion_is_reported() {
    let err = run_err("fun f() { return f(); } f();");
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 1024 });
}

#[test]
fn configured_call_depth_is_respected() {
    let source = "fun count(n) { if (n > 0) count(n - 1); } count(10);";
    let config = EvalConfig { max_call_depth: 5 };
    let err = run_with(source, config).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { limit: 5 });
    assert!(run_with(source, EvalConfig { max_call_depth: 11 }).is_ok());
}

#[test]
fn error_code_for_runtime_errors() {
    use lox_diagnostic::ErrorCode;
    assert_eq!(run_err("nil();").code(), ErrorCode::E6005);
    assert_eq!(run_err("fun f() { return g; } f();").code(), ErrorCode::E6002);
}
