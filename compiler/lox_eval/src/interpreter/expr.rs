//! Expression evaluation.

use lox_ir::{Expr, ExprId, ExprKind, Literal, LogicalOp, Name, Span};
use lox_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use super::Interpreter;
use crate::errors::{
    field_on_non_instance, property_on_non_instance, undefined_variable, EvalResult,
};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

/// Call arguments; most calls pass only a few.
pub(super) type Args = SmallVec<[Value; 4]>;

impl Interpreter<'_> {
    pub(super) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(self.eval_literal(*literal)),
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Variable(name) => self.lookup_variable(*name, expr.id, expr.span),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.assign_variable(*name, expr.id, value.clone(), expr.span)?;
                Ok(value)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(*op, &operand).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, &left, &right).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.eval(left)?;
                let short_circuits = match op {
                    LogicalOp::Or => left.is_truthy(),
                    LogicalOp::And => !left.is_truthy(),
                };
                if short_circuits {
                    Ok(left)
                } else {
                    self.eval(right)
                }
            }
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Args, _>>()?;
                self.call_value(callee, &args, expr.span)
            }
            ExprKind::Get { object, name } => match self.eval(object)? {
                Value::Instance(instance) => self.get_property(&instance, *name, expr.span),
                other => Err(property_on_non_instance(other.type_name()).with_span(expr.span)),
            },
            ExprKind::Set {
                object,
                name,
                value,
            } => match self.eval(object)? {
                Value::Instance(instance) => {
                    let value = self.eval(value)?;
                    instance.set_field(*name, value.clone());
                    Ok(value)
                }
                other => Err(field_on_non_instance(other.type_name()).with_span(expr.span)),
            },
            ExprKind::This => self.lookup_variable(self.names.this, expr.id, expr.span),
            ExprKind::Super { method } => self.eval_super(*method, expr.id, expr.span),
        }
    }

    fn eval_literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Number(bits) => Value::Number(f64::from_bits(bits)),
            Literal::String(name) => Value::string(self.interner.lookup(name)),
            Literal::Bool(b) => Value::Bool(b),
            Literal::Nil => Value::Nil,
        }
    }

    /// Read a variable at its resolved depth, or from globals if unresolved.
    pub(super) fn lookup_variable(&self, name: Name, id: ExprId, span: Span) -> EvalResult {
        let found = match self.resolutions.depth(id) {
            Some(hops) => self.env.get_at(hops, name),
            None => self.globals.borrow().get(name),
        };
        found.ok_or_else(|| undefined_variable(self.interner.lookup(name)).with_span(span))
    }

    fn assign_variable(&self, name: Name, id: ExprId, value: Value, span: Span) -> EvalResult<()> {
        let assigned = match self.resolutions.depth(id) {
            Some(hops) => self.env.assign_at(hops, name, value),
            None => self.globals.borrow_mut().assign(name, value),
        };
        if assigned {
            Ok(())
        } else {
            Err(undefined_variable(self.interner.lookup(name)).with_span(span))
        }
    }
}
