//! Unary operator evaluation.

use lox_ir::UnaryOp;

use crate::errors::{invalid_operand, EvalResult};
use crate::value::Value;

/// Apply `op` to an already-evaluated operand.
///
/// `!` accepts any value and negates its truthiness; `-` needs a number.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, other) => Err(invalid_operand(op, other.type_name())),
    }
}
