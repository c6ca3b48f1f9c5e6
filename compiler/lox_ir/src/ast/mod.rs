//! Syntax tree types.
//!
//! # Module Structure
//!
//! - `dump`: s-expression rendering for inspection and tests
//! - `expr`: expression nodes (`Expr`, `ExprKind`, `Literal`, `ExprId`)
//! - `operators`: binary, logical and unary operators
//! - `stmt`: statement nodes and declarations (`Stmt`, `FunctionDecl`, `ClassDecl`)

pub mod dump;
mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprId, ExprKind, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{ClassDecl, FunctionDecl, Param, Program, Stmt, StmtKind};

#[cfg(test)]
mod tests;
