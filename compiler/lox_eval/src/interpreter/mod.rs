//! Tree-walking interpreter.
//!
//! Statements execute to an [`Outcome`]; a `return` produces
//! `Outcome::Returning` which each enclosing block passes upward unchanged
//! until the call boundary consumes it. Runtime errors travel separately
//! through `Result`.
//!
//! The interpreter owns the global frame and a pointer to the current
//! frame. Entering a block or a call swaps the current pointer and restores
//! it afterwards, on success and on error alike.

mod builder;
mod class;
mod expr;
mod function_call;
mod stmt;

pub use builder::InterpreterBuilder;

use lox_ir::{Name, Program, StringInterner};
use lox_resolve::Resolutions;

use crate::environment::{LocalScope, Scope};
use crate::errors::{recursion_limit_exceeded, EvalError};
use crate::print_handler::SharedPrintHandler;
use crate::value::{Teardown, Value};

/// Limits applied while evaluating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of active Lox calls before a recursion error.
    pub max_call_depth: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

/// How a statement finished.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Fell through to the next statement.
    Normal,
    /// A `return` is unwinding to the nearest call boundary.
    Returning(Value),
}

/// Names the interpreter looks up by identity.
#[derive(Clone, Copy)]
struct WellKnownNames {
    this: Name,
    super_: Name,
    init: Name,
}

impl WellKnownNames {
    fn new(interner: &StringInterner) -> Self {
        WellKnownNames {
            this: interner.intern("this"),
            super_: interner.intern("super"),
            init: interner.intern("init"),
        }
    }
}

/// Evaluates a resolved program.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    resolutions: &'a Resolutions,
    globals: LocalScope<Scope>,
    env: LocalScope<Scope>,
    print_handler: SharedPrintHandler,
    config: EvalConfig,
    call_depth: usize,
    names: WellKnownNames,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter writing to stdout with default limits.
    pub fn new(interner: &'a StringInterner, resolutions: &'a Resolutions) -> Self {
        InterpreterBuilder::new(interner, resolutions).build()
    }

    /// Execute every top-level statement in order.
    ///
    /// Stops at the first runtime error. Globals defined before the error
    /// remain visible through [`global`](Self::global).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for stmt in &program.stmts {
            // The resolver rejects top-level `return`.
            if let Outcome::Returning(_) = self.exec(stmt)? {
                break;
            }
        }
        self.print_handler.flush();
        tracing::debug!(statements = program.stmts.len(), "program finished");
        Ok(())
    }

    /// Read a global binding by name.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(self.interner.intern(name))
    }

    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(recursion_limit_exceeded(self.config.max_call_depth));
        }
        Ok(())
    }

    /// Run `f` with `frame` as the current frame, restoring the previous one.
    fn with_frame<T>(&mut self, frame: LocalScope<Scope>, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.env, frame);
        let result = f(self);
        self.env = previous;
        result
    }
}

/// Top-level functions and classes capture the global frame, and the global
/// frame binds them. Emptying it here breaks those cycles so a finished
/// program releases everything it defined at top level.
impl Drop for Interpreter<'_> {
    fn drop(&mut self) {
        let mut teardown = Teardown::default();
        self.globals.borrow_mut().drain_into(&mut teardown);
        teardown.run();
    }
}
