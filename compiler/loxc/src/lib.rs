//! Lox pipeline driver.
//!
//! ```text
//! source ──lex──► TokenList ──parse──► Program ──resolve──► Resolutions
//!                                         │                      │
//!                                         └──────── eval ◄───────┘
//! ```
//!
//! Each phase stops the pipeline at its first error. [`LoxError`] wraps the
//! phase errors and knows the process exit status for each.

pub mod commands;
mod error;
mod pipeline;
mod tracing_setup;

pub use error::{LoxError, EXIT_DATA_ERROR, EXIT_IO_ERROR, EXIT_RUNTIME_ERROR, EXIT_USAGE};
pub use pipeline::{check_source, frontend, run_program, run_source, Frontend, RunOptions};
pub use tracing_setup::init_tracing;
