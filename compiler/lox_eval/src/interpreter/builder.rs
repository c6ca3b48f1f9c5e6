//! `InterpreterBuilder` for configuring an [`Interpreter`].

use lox_ir::StringInterner;
use lox_resolve::Resolutions;

use super::{EvalConfig, Interpreter, WellKnownNames};
use crate::environment::{LocalScope, Scope};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    resolutions: &'a Resolutions,
    print_handler: Option<SharedPrintHandler>,
    config: EvalConfig,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, resolutions: &'a Resolutions) -> Self {
        InterpreterBuilder {
            interner,
            resolutions,
            print_handler: None,
            config: EvalConfig::default(),
        }
    }

    /// Send `print` output to `handler` instead of stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let globals = LocalScope::new(Scope::new());
        Interpreter {
            interner: self.interner,
            resolutions: self.resolutions,
            env: globals.clone(),
            globals,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            config: self.config,
            call_depth: 0,
            names: WellKnownNames::new(self.interner),
        }
    }
}
