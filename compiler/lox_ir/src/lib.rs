//! Lox IR - token and syntax tree types shared by every phase.
//!
//! This crate contains the core data structures for the Lox front end:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `FunctionDecl`, `ClassDecl`, `Program`)
//!
//! # Design Notes
//!
//! - **Intern identifiers**: every identifier and string literal is a `Name(u32)`.
//! - **Owned trees**: each node owns its children. Function declarations are
//!   behind `Rc` so runtime closures can keep a body alive without copying it.
//! - **Stable node ids**: every expression carries an `ExprId` assigned in
//!   parse order, used by the resolver to key its side table.
//!
//! Numeric literals store their `f64` as raw bits so that the whole tree can
//! derive `Eq` and `Hash`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use ast::{
    BinaryOp, ClassDecl, Expr, ExprId, ExprKind, FunctionDecl, Literal, LogicalOp, Param, Program,
    Stmt, StmtKind, UnaryOp,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
