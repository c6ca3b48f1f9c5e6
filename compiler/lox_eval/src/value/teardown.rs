//! Freeing runtime object graphs without recursion.
//!
//! Drop glue frees a linked chain one host stack frame per link, so a list
//! of a few hundred thousand instances overflows the stack when its head
//! goes away. The `Drop` impls on [`InstanceValue`], [`ClassValue`] and
//! [`Scope`] move their children into a [`Teardown`] instead, which frees
//! them from an explicit work-list. Anything still shared elsewhere only
//! loses a reference count.

use std::mem;
use std::rc::Rc;

use super::{ClassValue, InstanceValue, Value};
use crate::environment::{LocalScope, Scope};

/// Objects whose last reference is being released.
#[derive(Default)]
pub(crate) struct Teardown {
    values: Vec<Value>,
    frames: Vec<LocalScope<Scope>>,
}

impl Teardown {
    /// Queue `value`. Primitives are dropped on the spot.
    pub(crate) fn push_value(&mut self, value: Value) {
        match value {
            Value::Function(_) | Value::Class(_) | Value::Instance(_) => self.values.push(value),
            Value::Nil | Value::Bool(_) | Value::Number(_) | Value::Str(_) => {}
        }
    }

    pub(crate) fn push_frame(&mut self, frame: LocalScope<Scope>) {
        self.frames.push(frame);
    }

    /// Free everything queued, and everything that becomes unreachable as a
    /// result, in constant stack depth.
    pub(crate) fn run(mut self) {
        loop {
            if let Some(value) = self.values.pop() {
                self.release_value(value);
            } else if let Some(frame) = self.frames.pop() {
                if let Some(mut scope) = frame.into_unique() {
                    scope.drain_into(&mut self);
                }
            } else {
                return;
            }
        }
    }

    fn release_value(&mut self, value: Value) {
        match value {
            Value::Instance(instance) => {
                if let Ok(mut instance) = Rc::try_unwrap(instance) {
                    instance.drain_into(self);
                }
            }
            Value::Class(class) => {
                if let Ok(mut class) = Rc::try_unwrap(class) {
                    class.drain_into(self);
                }
            }
            Value::Function(function) => {
                if let Ok(function) = Rc::try_unwrap(function) {
                    self.push_frame(function.into_closure());
                }
            }
            Value::Nil | Value::Bool(_) | Value::Number(_) | Value::Str(_) => {}
        }
    }
}

impl InstanceValue {
    /// Move the fields and the class handle out, leaving `self` trivial to
    /// drop.
    pub(crate) fn drain_into(&mut self, teardown: &mut Teardown) {
        for value in mem::take(self.fields.get_mut()).into_values() {
            teardown.push_value(value);
        }
        teardown.push_value(Value::Class(Rc::clone(&self.class)));
    }
}

impl ClassValue {
    pub(crate) fn drain_into(&mut self, teardown: &mut Teardown) {
        if let Some(superclass) = self.superclass.take() {
            teardown.push_value(Value::Class(superclass));
        }
        for method in mem::take(&mut self.methods).into_values() {
            teardown.push_value(Value::Function(method));
        }
    }
}

impl Drop for InstanceValue {
    fn drop(&mut self) {
        if self.fields.get_mut().is_empty() {
            return;
        }
        let mut teardown = Teardown::default();
        for value in mem::take(self.fields.get_mut()).into_values() {
            teardown.push_value(value);
        }
        teardown.run();
    }
}

impl Drop for ClassValue {
    fn drop(&mut self) {
        if self.superclass.is_none() && self.methods.is_empty() {
            return;
        }
        let mut teardown = Teardown::default();
        self.drain_into(&mut teardown);
        teardown.run();
    }
}
