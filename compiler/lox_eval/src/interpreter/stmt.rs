//! Statement execution.

use std::rc::Rc;

use lox_ir::{Stmt, StmtKind};
use lox_stack::ensure_sufficient_stack;

use super::{Interpreter, Outcome};
use crate::environment::{LocalScope, Scope};
use crate::errors::EvalError;
use crate::value::{FunctionValue, Value};

pub(super) type ExecResult = Result<Outcome, EvalError>;

impl Interpreter<'_> {
    pub(super) fn exec(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| self.exec_inner(stmt))
    }

    fn exec_inner(&mut self, stmt: &Stmt) -> ExecResult {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.eval(expr)?;
                Ok(Outcome::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Outcome::Normal)
            }
            StmtKind::Var { name, init } => {
                let value = match init {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                self.env.borrow_mut().define(*name, value);
                Ok(Outcome::Normal)
            }
            StmtKind::Block(stmts) => {
                let frame = LocalScope::new(Scope::with_parent(self.env.clone()));
                self.exec_block(stmts, frame)
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval(cond)?.is_truthy() {
                    self.exec(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec(else_branch)
                } else {
                    Ok(Outcome::Normal)
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval(cond)?.is_truthy() {
                    if let returning @ Outcome::Returning(_) = self.exec(body)? {
                        return Ok(returning);
                    }
                }
                Ok(Outcome::Normal)
            }
            StmtKind::Function(decl) => {
                let function = FunctionValue::new(
                    Rc::clone(decl),
                    self.interner.lookup(decl.name),
                    self.env.clone(),
                    false,
                );
                self.env
                    .borrow_mut()
                    .define(decl.name, Value::Function(Rc::new(function)));
                Ok(Outcome::Normal)
            }
            StmtKind::Class(decl) => {
                self.exec_class(decl)?;
                Ok(Outcome::Normal)
            }
            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Nil,
                };
                Ok(Outcome::Returning(value))
            }
        }
    }

    /// Execute `stmts` in `frame`, stopping early on `return`.
    pub(super) fn exec_block(&mut self, stmts: &[Stmt], frame: LocalScope<Scope>) -> ExecResult {
        self.with_frame(frame, |this| {
            for stmt in stmts {
                if let returning @ Outcome::Returning(_) = this.exec(stmt)? {
                    return Ok(returning);
                }
            }
            Ok(Outcome::Normal)
        })
    }
}
