//! Class declarations, property reads and `super` lookups.

use std::rc::Rc;

use lox_ir::{ClassDecl, ExprId, Name, Span};
use rustc_hash::FxHashMap;

use super::Interpreter;
use crate::environment::{LocalScope, Scope};
use crate::errors::{superclass_not_class, undefined_property, undefined_variable, EvalResult};
use crate::value::{ClassValue, FunctionValue, InstanceValue, Value};

impl Interpreter<'_> {
    /// Build a class value and bind it in the current frame.
    ///
    /// Methods close over the declaring frame. With a superclass they close
    /// over an extra frame that binds `super` to it.
    pub(super) fn exec_class(&mut self, decl: &ClassDecl) -> EvalResult<()> {
        let superclass = match &decl.superclass {
            Some(expr) => match self.eval(expr)? {
                Value::Class(class) => Some(class),
                other => return Err(superclass_not_class(other.type_name()).with_span(expr.span)),
            },
            None => None,
        };

        self.env.borrow_mut().define(decl.name, Value::Nil);

        let method_frame = match &superclass {
            Some(class) => {
                let frame = LocalScope::new(Scope::with_parent(self.env.clone()));
                frame
                    .borrow_mut()
                    .define(self.names.super_, Value::Class(Rc::clone(class)));
                frame
            }
            None => self.env.clone(),
        };

        let methods: FxHashMap<Name, Rc<FunctionValue>> = decl
            .methods
            .iter()
            .map(|method| {
                let function = FunctionValue::new(
                    Rc::clone(method),
                    self.interner.lookup(method.name),
                    method_frame.clone(),
                    method.name == self.names.init,
                );
                (method.name, Rc::new(function))
            })
            .collect();

        let class = ClassValue::new(
            self.interner.lookup(decl.name),
            superclass,
            methods,
        );
        tracing::trace!(class = class.label(), "declared class");
        self.env
            .borrow_mut()
            .define(decl.name, Value::Class(Rc::new(class)));
        Ok(())
    }

    /// Fields shadow methods; methods come back bound to `instance`.
    pub(super) fn get_property(
        &self,
        instance: &Rc<InstanceValue>,
        name: Name,
        span: Span,
    ) -> EvalResult {
        if let Some(value) = instance.field(name) {
            return Ok(value);
        }
        match instance.class().find_method(name) {
            Some(method) => Ok(Value::Function(Rc::new(
                method.bind(instance, self.names.this),
            ))),
            None => Err(undefined_property(self.interner.lookup(name)).with_span(span)),
        }
    }

    /// `super.method`: search from the superclass of the defining class.
    ///
    /// `super` sits at the resolved depth and `this` one frame below it.
    pub(super) fn eval_super(&self, method: Name, id: ExprId, span: Span) -> EvalResult {
        let missing = || undefined_variable("super").with_span(span);
        let hops = self.resolutions.depth(id).ok_or_else(missing)?;
        let Some(Value::Class(superclass)) = self.env.get_at(hops, self.names.super_) else {
            return Err(missing());
        };
        let this_hops = hops.checked_sub(1).ok_or_else(missing)?;
        let Some(Value::Instance(instance)) = self.env.get_at(this_hops, self.names.this) else {
            return Err(undefined_variable("this").with_span(span));
        };
        let found = superclass
            .find_method(method)
            .ok_or_else(|| undefined_property(self.interner.lookup(method)).with_span(span))?;
        Ok(Value::Function(Rc::new(found.bind(&instance, self.names.this))))
    }
}
