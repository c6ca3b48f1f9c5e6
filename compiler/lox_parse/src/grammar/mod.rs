//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`item`]: declarations (`var`, `fun`, `class`)
//! - [`stmt`]: statements, including the `for` to `while` lowering
//! - [`expr`]: the expression precedence chain
//! - [`operators`]: binary precedence tiers and operator tokens

mod expr;
mod item;
mod operators;
mod stmt;
