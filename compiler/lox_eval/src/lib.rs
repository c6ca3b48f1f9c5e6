//! Lox Eval - tree-walking evaluator for Lox.
//!
//! # Architecture
//!
//! - [`Value`]: the closed set of runtime values. Functions, classes and
//!   instances are reference-counted and compare by identity.
//! - [`Scope`] / [`LocalScope`]: environment frames. Each frame is shared
//!   through `Rc<RefCell<_>>` so closures keep their defining frame alive.
//! - [`Interpreter`]: walks a resolved [`lox_ir::Program`]. Variable access
//!   uses the hop counts from `lox_resolve` instead of searching the chain.
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch by
//!   exhaustive matching on `Value`.
//!
//! Statement execution returns an explicit [`Outcome`]; `return` is data,
//! not unwinding. Errors abort the run and carry the span of the expression
//! that failed.

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{EvalConfig, Interpreter, InterpreterBuilder, Outcome};
pub use operators::evaluate_binary;
pub use print_handler::{buffer_handler, stdout_handler, PrintSink, SharedPrintHandler};
pub use unary_operators::evaluate_unary;
pub use value::{format_number, ClassValue, FunctionValue, InstanceValue, Value};

#[cfg(test)]
mod tests;
