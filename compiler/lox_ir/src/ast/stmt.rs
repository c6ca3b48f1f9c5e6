//! Statement Types
//!
//! Statement nodes plus the function and class declarations they carry.

use std::fmt;
use std::mem;
use std::rc::Rc;

use super::expr::Expr;
use crate::{Name, Span};

/// A parsed program: the top-level statement list.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }

    /// Move nested statements into `out`. Expressions stay behind and are
    /// freed by their own `Drop`.
    fn detach_children(&mut self, out: &mut Vec<Stmt>) {
        match &self.kind {
            StmtKind::Expr(_) | StmtKind::Print(_) | StmtKind::Var { .. } | StmtKind::Return(_) => {
                return;
            }
            StmtKind::Block(stmts) if stmts.is_empty() => return,
            _ => {}
        }
        match mem::replace(&mut self.kind, StmtKind::Block(Vec::new())) {
            StmtKind::Block(stmts) => out.extend(stmts),
            StmtKind::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(*then_branch);
                out.extend(else_branch.map(|stmt| *stmt));
            }
            StmtKind::While { body, .. } => out.push(*body),
            StmtKind::Function(decl) => detach_body(decl, out),
            StmtKind::Class(class) => {
                for method in class.methods {
                    detach_body(method, out);
                }
            }
            StmtKind::Expr(_) | StmtKind::Print(_) | StmtKind::Var { .. } | StmtKind::Return(_) => {}
        }
    }
}

/// A declaration still shared with a runtime closure keeps its body.
fn detach_body(decl: Rc<FunctionDecl>, out: &mut Vec<Stmt>) {
    if let Ok(decl) = Rc::try_unwrap(decl) {
        out.extend(decl.body);
    }
}

/// Deeply nested blocks, loops and function declarations are freed from a
/// work-list rather than by recursive drop glue.
impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.detach_children(&mut pending);
        }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `expr;`
    Expr(Expr),

    /// `print expr;`
    Print(Expr),

    /// `var name = init;` or `var name;`
    Var { name: Name, init: Option<Expr> },

    /// `{ stmts }`
    Block(Vec<Stmt>),

    /// `if (cond) then_branch else else_branch`
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while (cond) body`. `for` loops are lowered to this form.
    While { cond: Expr, body: Box<Stmt> },

    /// `fun name(params) { body }`
    Function(Rc<FunctionDecl>),

    /// `class Name < Super { methods }`
    Class(ClassDecl),

    /// `return value;` or `return;`
    Return(Option<Expr>),
}

/// A function parameter.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub name: Name,
    pub span: Span,
}

/// Function or method declaration.
///
/// Held behind `Rc` in the tree: a runtime closure keeps its declaration
/// alive for as long as the closure exists, independent of the `Program`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    /// Span of the whole declaration, from the name to the closing brace.
    pub span: Span,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Class declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDecl {
    pub name: Name,
    /// Superclass reference; always an `ExprKind::Variable`.
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionDecl>>,
}
