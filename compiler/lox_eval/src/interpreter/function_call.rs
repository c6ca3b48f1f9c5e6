//! Calling functions, bound methods and classes.

use std::rc::Rc;

use lox_ir::Span;
use lox_stack::ensure_sufficient_stack;

use super::{Interpreter, Outcome};
use crate::environment::{LocalScope, Scope};
use crate::errors::{not_callable, undefined_variable, wrong_arg_count, EvalResult};
use crate::value::{ClassValue, FunctionValue, InstanceValue, Value};

impl Interpreter<'_> {
    /// Call `callee` with already-evaluated arguments.
    pub(super) fn call_value(&mut self, callee: Value, args: &[Value], span: Span) -> EvalResult {
        match callee {
            Value::Function(function) => self.call_function(&function, args, span),
            Value::Class(class) => self.instantiate(&class, args, span),
            other => Err(not_callable(other.type_name()).with_span(span)),
        }
    }

    /// Run a function body in a fresh frame enclosed by its closure.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn call_function(
        &mut self,
        function: &Rc<FunctionValue>,
        args: &[Value],
        span: Span,
    ) -> EvalResult {
        if args.len() != function.arity() {
            return Err(
                wrong_arg_count(function.label(), function.arity(), args.len()).with_span(span),
            );
        }
        self.check_recursion_limit().map_err(|e| e.with_span(span))?;
        tracing::trace!(name = function.label(), depth = self.call_depth, "call");

        let frame = LocalScope::new(Scope::with_parent(function.closure().clone()));
        {
            let mut bindings = frame.borrow_mut();
            for (param, arg) in function.decl().params.iter().zip(args) {
                bindings.define(param.name, arg.clone());
            }
        }

        self.call_depth += 1;
        let outcome =
            ensure_sufficient_stack(|| self.exec_block(&function.decl().body, frame));
        self.call_depth -= 1;

        if function.is_initializer() {
            outcome?;
            return function
                .closure()
                .borrow()
                .get(self.names.this)
                .ok_or_else(|| undefined_variable("this").with_span(span));
        }
        match outcome? {
            Outcome::Returning(value) => Ok(value),
            Outcome::Normal => Ok(Value::Nil),
        }
    }

    /// Construct an instance and run the nearest `init`, if any.
    fn instantiate(&mut self, class: &Rc<ClassValue>, args: &[Value], span: Span) -> EvalResult {
        let instance = Rc::new(InstanceValue::new(Rc::clone(class)));
        match class.find_method(self.names.init) {
            Some(init) => {
                let bound = Rc::new(init.bind(&instance, self.names.this));
                self.call_function(&bound, args, span)?;
            }
            None if !args.is_empty() => {
                return Err(wrong_arg_count(class.label(), 0, args.len()).with_span(span));
            }
            None => {}
        }
        Ok(Value::Instance(instance))
    }
}
