//! S-expression rendering of the syntax tree.
//!
//! One line per top-level statement, children rendered inline:
//!
//! ```text
//! var a = 1 + 2 * 3;   =>  (var a (+ 1 (* 2 3)))
//! a.b(c).d = 4;        =>  (expr (set (. (call (. a b) c) d) 4))
//! ```
//!
//! Used by `lox parse` and by parser tests, which compare shapes as text.

use std::fmt::Write;

use super::{ClassDecl, Expr, ExprKind, FunctionDecl, Literal, Program, Stmt, StmtKind};
use crate::StringInterner;

/// Render a whole program, one statement per line.
pub fn dump_program(program: &Program, interner: &StringInterner) -> String {
    let mut out = String::new();
    for stmt in &program.stmts {
        Dumper { interner, out: &mut out }.stmt(stmt);
        out.push('\n');
    }
    out
}

struct Dumper<'a> {
    interner: &'a StringInterner,
    out: &'a mut String,
}

impl Dumper<'_> {
    fn name(&mut self, name: crate::Name) {
        self.out.push_str(self.interner.lookup(name));
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(lit) => self.literal(*lit),
            ExprKind::Variable(name) => self.name(*name),
            ExprKind::Assign { name, value } => {
                self.open("= ");
                self.name(*name);
                self.out.push(' ');
                self.expr(value);
                self.close();
            }
            ExprKind::Unary { op, operand } => {
                self.open(op.as_symbol());
                self.out.push(' ');
                self.expr(operand);
                self.close();
            }
            ExprKind::Binary { op, left, right } => {
                self.open(op.as_symbol());
                self.pair(left, right);
            }
            ExprKind::Logical { op, left, right } => {
                self.open(op.as_symbol());
                self.pair(left, right);
            }
            ExprKind::Call { callee, args } => {
                self.open("call ");
                self.expr(callee);
                for arg in args {
                    self.out.push(' ');
                    self.expr(arg);
                }
                self.close();
            }
            ExprKind::Get { object, name } => {
                self.open(". ");
                self.expr(object);
                self.out.push(' ');
                self.name(*name);
                self.close();
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                self.open("set (. ");
                self.expr(object);
                self.out.push(' ');
                self.name(*name);
                self.out.push_str(") ");
                self.expr(value);
                self.close();
            }
            ExprKind::This => self.out.push_str("this"),
            ExprKind::Super { method } => {
                self.open("super ");
                self.name(*method);
                self.close();
            }
            ExprKind::Grouping(inner) => {
                self.open("group ");
                self.expr(inner);
                self.close();
            }
        }
    }

    fn pair(&mut self, left: &Expr, right: &Expr) {
        self.out.push(' ');
        self.expr(left);
        self.out.push(' ');
        self.expr(right);
        self.close();
    }

    fn literal(&mut self, lit: Literal) {
        match lit {
            Literal::Number(bits) => {
                let _ = write!(self.out, "{}", f64::from_bits(bits));
            }
            Literal::String(name) => {
                let _ = write!(self.out, "\"{}\"", self.interner.lookup(name));
            }
            Literal::Bool(b) => {
                let _ = write!(self.out, "{b}");
            }
            Literal::Nil => self.out.push_str("nil"),
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.open("expr ");
                self.expr(expr);
                self.close();
            }
            StmtKind::Print(expr) => {
                self.open("print ");
                self.expr(expr);
                self.close();
            }
            StmtKind::Var { name, init } => {
                self.open("var ");
                self.name(*name);
                if let Some(init) = init {
                    self.out.push(' ');
                    self.expr(init);
                }
                self.close();
            }
            StmtKind::Block(stmts) => {
                self.open("block");
                self.stmts(stmts);
                self.close();
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.open("if ");
                self.expr(cond);
                self.out.push(' ');
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push(' ');
                    self.stmt(else_branch);
                }
                self.close();
            }
            StmtKind::While { cond, body } => {
                self.open("while ");
                self.expr(cond);
                self.out.push(' ');
                self.stmt(body);
                self.close();
            }
            StmtKind::Function(decl) => self.function(decl),
            StmtKind::Class(class) => self.class(class),
            StmtKind::Return(value) => {
                self.open("return");
                if let Some(value) = value {
                    self.out.push(' ');
                    self.expr(value);
                }
                self.close();
            }
        }
    }

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.out.push(' ');
            self.stmt(stmt);
        }
    }

    fn function(&mut self, decl: &FunctionDecl) {
        self.open("fun ");
        self.name(decl.name);
        self.out.push_str(" (");
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.name(param.name);
        }
        self.out.push(')');
        self.stmts(&decl.body);
        self.close();
    }

    fn class(&mut self, class: &ClassDecl) {
        self.open("class ");
        self.name(class.name);
        if let Some(superclass) = &class.superclass {
            self.out.push_str(" < ");
            self.expr(superclass);
        }
        for method in &class.methods {
            self.out.push(' ');
            self.function(method);
        }
        self.close();
    }
}
