use std::rc::Rc;

use lox_ir::StringInterner;
use lox_resolve::{resolve, ResolverOptions};
use pretty_assertions::assert_eq;

use super::run;
use crate::{buffer_handler, InterpreterBuilder, Value};

#[test]
fn print_literals_and_arithmetic() {
    assert_eq!(
        run("print 1 + 2; print 7 / 2; print \"a\" + \"b\"; print nil; print !true;"),
        "3\n3.5\nab\nnil\nfalse\n"
    );
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(run("print 1 + 2 * 3; print (1 + 2) * 3; print -2 * -3;"), "7\n9\n6\n");
}

#[test]
fn truthiness_in_conditions() {
    let source = r#"
        if (0) print "zero"; else print "no";
        if ("") print "empty"; else print "no";
        if (nil) print "nil"; else print "falsey";
    "#;
    assert_eq!(run(source), "zero\nempty\nfalsey\n");
}

#[test]
fn logical_operators_return_operands() {
    let source = r#"
        fun boom() { print "evaluated"; return 1; }
        print nil or "x";
        print 1 and 2;
        print false and boom();
        print "a" or boom();
        print nil and boom();
    "#;
    assert_eq!(run(source), "x\n2\nfalse\na\nnil\n");
}

#[test]
fn block_scoping_and_shadowing() {
    let source = r#"
        var a = "global";
        {
            var a = "outer";
            {
                var a = "inner";
                print a;
            }
            print a;
        }
        print a;
    "#;
    assert_eq!(run(source), "inner\nouter\nglobal\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(run("var a; var b; a = b = 3; print a; print b;"), "3\n3\n");
}

#[test]
fn while_and_for_loops() {
    let source = r#"
        var i = 0;
        while (i < 3) { print i; i = i + 1; }
        for (var j = 0; j < 2; j = j + 1) print j * 10;
    "#;
    assert_eq!(run(source), "0\n1\n2\n0\n10\n");
}

#[test]
fn fibonacci_recursion() {
    let source = r#"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(15);
    "#;
    assert_eq!(run(source), "610\n");
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(run("fun f() {} print f(); fun g() { return; } print g();"), "nil\nnil\n");
}

#[test]
fn return_exits_loops() {
    let source = r#"
        fun first_over(limit) {
            for (var i = 0; ; i = i + 1) {
                if (i * i > limit) return i;
            }
        }
        print first_over(50);
    "#;
    assert_eq!(run(source), "8\n");
}

#[test]
fn closures_share_captured_frame() {
    let source = r#"
        fun make_counter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                return count;
            }
            return increment;
        }
        var c1 = make_counter();
        var c2 = make_counter();
        print c1();
        print c1();
        print c2();
    "#;
    assert_eq!(run(source), "1\n2\n1\n");
}

#[test]
fn closure_binding_is_fixed_by_resolution() {
    let source = r#"
        var a = "global";
        {
            fun show() { print a; }
            show();
            var a = "block";
            show();
        }
    "#;
    assert_eq!(run(source), "global\nglobal\n");
}

#[test]
fn callee_frame_is_closure_not_caller() {
    let source = r#"
        var x = "global";
        fun read() { return x; }
        fun caller() {
            var x = "caller";
            return read();
        }
        print caller();
    "#;
    assert_eq!(run(source), "global\n");
}

#[test]
fn functions_print_their_name() {
    assert_eq!(run("fun hello() {} print hello;"), "<fn hello>\n");
}

#[test]
fn class_fields_and_methods() {
    let source = r#"
        class Point {
            init(x, y) {
                this.x = x;
                this.y = y;
            }
            sum() { return this.x + this.y; }
        }
        var p = Point(1, 2);
        print p.sum();
        p.x = 10;
        print p.sum();
        print Point;
        print p;
    "#;
    assert_eq!(run(source), "3\n12\nPoint\nPoint instance\n");
}

#[test]
fn fields_shadow_methods() {
    let source = r#"
        class A { m() { return "method"; } }
        var a = A();
        print a.m();
        a.m = "field";
        print a.m;
    "#;
    assert_eq!(run(source), "method\nfield\n");
}

#[test]
fn bound_methods_remember_instance() {
    let source = r#"
        class Greeter {
            init(name) { this.name = name; }
            greet() { print "hi " + this.name; }
        }
        var g = Greeter("bob").greet;
        g();
        print g;
    "#;
    assert_eq!(run(source), "hi bob\n<fn greet>\n");
}

#[test]
fn inheritance_and_super() {
    let source = r#"
        class A {
            method() { return "A method"; }
            who() { return "A"; }
        }
        class B < A {
            method() { return "B then " + super.method(); }
        }
        class C < B {}
        var c = C();
        print c.method();
        print c.who();
    "#;
    assert_eq!(run(source), "B then A method\nA\n");
}

#[test]
fn super_starts_above_defining_class() {
    let source = r#"
        class A { say() { print "A"; } }
        class B < A { say() { print "B"; super.say(); } }
        class C < B { say() { print "C"; super.say(); } }
        C().say();
    "#;
    assert_eq!(run(source), "C\nB\nA\n");
}

#[test]
fn init_returns_instance() {
    let source = r#"
        class Foo {
            init() {
                this.n = 1;
                return;
            }
        }
        var foo = Foo();
        print foo.init();
        print foo.init() == foo;
    "#;
    assert_eq!(run(source), "Foo instance\ntrue\n");
}

#[test]
fn inherited_init_sets_arity() {
    let source = r#"
        class Base { init(v) { this.v = v; } }
        class Derived < Base {}
        print Derived(5).v;
    "#;
    assert_eq!(run(source), "5\n");
}

#[test]
fn identity_equality() {
    let source = r#"
        class A {}
        var a = A();
        var b = A();
        print a == a;
        print a == b;
        print A == A;
        fun f() {}
        print f == f;
        print "s" == "s";
    "#;
    assert_eq!(run(source), "true\nfalse\ntrue\ntrue\ntrue\n");
}

#[test]
fn number_formatting() {
    assert_eq!(
        run("print 3.0; print 0.1 + 0.2; print -0; print 1 / 0; print -1 / 0; print 0 / 0;"),
        "3\n0.30000000000000004\n-0\ninf\n-inf\nnan\n"
    );
}

#[test]
fn globals_can_be_redeclared() {
    assert_eq!(run("var a = 1; var a = a + 1; print a;"), "2\n");
}

#[test]
fn functions_may_reference_later_globals() {
    let source = r#"
        fun call_later() { return later(); }
        fun later() { return "ok"; }
        print call_later();
    "#;
    assert_eq!(run(source), "ok\n");
}

#[test]
fn recursion_up_to_the_limit_succeeds() {
    let source = r#"
        fun count(n) { if (n > 0) return count(n - 1); return "done"; }
        print count(1023);
    "#;
    assert_eq!(run(source), "done\n");
}

#[test]
fn long_instance_chain_is_freed_without_overflow() {
    let source = r#"
        class Node {}
        var head = nil;
        for (var i = 0; i < 300000; i = i + 1) {
            var n = Node();
            n.next = head;
            head = n;
        }
        print "built";
    "#;
    assert_eq!(run(source), "built\n");
}

#[test]
fn long_superclass_chain_is_freed_without_overflow() {
    let source = r#"
        class Base { name() { return "base"; } }
        var top = Base;
        for (var i = 0; i < 100000; i = i + 1) {
            class Derived < top {}
            top = Derived;
        }
        print top().name();
    "#;
    assert_eq!(run(source), "base\n");
}

#[test]
fn dropping_the_interpreter_releases_top_level_functions() {
    let interner = StringInterner::new();
    let source = "fun f() { return f; } var g = f;";
    let tokens = lox_lexer::lex(source, &interner).unwrap();
    let program = lox_parse::parse(&tokens, &interner).unwrap();
    let resolutions = resolve(&program, &interner, ResolverOptions::default()).unwrap();
    let mut interpreter = InterpreterBuilder::new(&interner, &resolutions)
        .print_handler(buffer_handler())
        .build();
    interpreter.run(&program).unwrap();

    let Some(Value::Function(f)) = interpreter.global("f") else {
        panic!("f should be a function");
    };
    // The `f` and `g` bindings plus this handle.
    assert_eq!(Rc::strong_count(&f), 3);
    drop(interpreter);
    assert_eq!(Rc::strong_count(&f), 1);
}
