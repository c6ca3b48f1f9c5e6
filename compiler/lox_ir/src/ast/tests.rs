use std::rc::Rc;

use super::*;
use crate::{Span, StringInterner};

#[test]
fn literal_numbers_compare_by_bits() {
    assert_eq!(Literal::number(1.5), Literal::number(1.5));
    assert_ne!(Literal::number(0.0), Literal::number(-0.0));
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::GtEq.as_symbol(), ">=");
    assert_eq!(LogicalOp::Or.as_symbol(), "or");
    assert_eq!(UnaryOp::Not.as_symbol(), "!");
}

#[test]
fn function_arity_counts_params() {
    let interner = StringInterner::new();
    let decl = FunctionDecl {
        name: interner.intern("add"),
        params: vec![
            Param {
                name: interner.intern("a"),
                span: Span::DUMMY,
            },
            Param {
                name: interner.intern("b"),
                span: Span::DUMMY,
            },
        ],
        body: Vec::new(),
        span: Span::DUMMY,
    };
    assert_eq!(decl.arity(), 2);

    let stmt = Stmt::new(StmtKind::Function(Rc::new(decl.clone())), Span::DUMMY);
    assert_eq!(stmt, Stmt::new(StmtKind::Function(Rc::new(decl)), Span::DUMMY));
}

#[test]
fn expressions_with_equal_shape_are_equal() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let make = || {
        Expr::new(
            ExprId::new(1),
            ExprKind::Assign {
                name: x,
                value: Box::new(Expr::new(
                    ExprId::new(0),
                    ExprKind::Literal(Literal::Nil),
                    Span::new(4, 7),
                )),
            },
            Span::new(0, 7),
        )
    };
    assert_eq!(make(), make());
}

#[test]
fn dump_renders_nested_shapes() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let lit = |id, value| Expr::new(ExprId::new(id), ExprKind::Literal(Literal::number(value)), Span::DUMMY);
    let sum = Expr::new(
        ExprId::new(2),
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: Box::new(lit(0, 1.0)),
            right: Box::new(lit(1, 2.5)),
        },
        Span::DUMMY,
    );
    let program = Program {
        stmts: vec![
            Stmt::new(StmtKind::Var { name: a, init: Some(sum) }, Span::DUMMY),
            Stmt::new(
                StmtKind::Block(vec![Stmt::new(StmtKind::Return(None), Span::DUMMY)]),
                Span::DUMMY,
            ),
        ],
    };
    assert_eq!(
        dump::dump_program(&program, &interner),
        "(var a (+ 1 2.5))\n(block (return))\n"
    );
}
