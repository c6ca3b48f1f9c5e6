//! Binary operator evaluation.
//!
//! `==` and `!=` accept any pair of values. `+` accepts two numbers or two
//! strings. Every other operator needs two numbers. Division follows IEEE
//! semantics, so dividing by zero yields an infinity or NaN.

use std::rc::Rc;

use lox_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, EvalResult};
use crate::value::Value;

/// Apply `op` to already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match (op, left, right) {
        (BinaryOp::Eq, _, _) => Ok(Value::Bool(left.equals(right))),
        (BinaryOp::NotEq, _, _) => Ok(Value::Bool(!left.equals(right))),
        (_, Value::Number(a), Value::Number(b)) => Ok(eval_numeric(op, *a, *b)),
        (BinaryOp::Add, Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        _ => Err(binary_type_mismatch(op, left.type_name(), right.type_name())),
    }
}

#[allow(clippy::float_cmp)]
fn eval_numeric(op: BinaryOp, a: f64, b: f64) -> Value {
    match op {
        BinaryOp::Add => Value::Number(a + b),
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::NotEq => Value::Bool(a != b),
    }
}
