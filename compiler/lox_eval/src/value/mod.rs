//! Runtime values.
//!
//! Primitive values are copied or cheaply cloned. Functions, classes and
//! instances are shared through `Rc` and compare by identity: two values are
//! equal only if they point at the same allocation.

mod number;
mod teardown;

pub use number::format_number;
pub(crate) use teardown::Teardown;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lox_ir::{FunctionDecl, Name};
use rustc_hash::FxHashMap;

use crate::environment::{LocalScope, Scope};

/// A Lox runtime value.
#[derive(Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Rc<str>),
    Function(Rc<FunctionValue>),
    Class(Rc<ClassValue>),
    Instance(Rc<InstanceValue>),
}

impl Value {
    /// Build a string value.
    pub fn string(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }

    /// Only `nil` and `false` are falsey.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Lox `==`.
    ///
    /// Numbers compare by IEEE equality, so `nan == nan` is false. Values
    /// of different types are never equal.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Type name used in runtime error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
            Value::Class(_) => "class",
            Value::Instance(_) => "instance",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Function(func) => write!(f, "<fn {}>", func.label()),
            Value::Class(class) => f.write_str(class.label()),
            Value::Instance(instance) => write!(f, "{} instance", instance.class().label()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Number(n) => write!(f, "Number({n})"),
            other => write!(f, "{other}"),
        }
    }
}

/// A user function or method together with its captured frame.
pub struct FunctionValue {
    decl: Rc<FunctionDecl>,
    label: &'static str,
    closure: LocalScope<Scope>,
    is_initializer: bool,
}

impl FunctionValue {
    pub fn new(
        decl: Rc<FunctionDecl>,
        label: &'static str,
        closure: LocalScope<Scope>,
        is_initializer: bool,
    ) -> Self {
        FunctionValue {
            decl,
            label,
            closure,
            is_initializer,
        }
    }

    #[inline]
    pub fn decl(&self) -> &Rc<FunctionDecl> {
        &self.decl
    }

    /// Source-level name, for display and error messages.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.arity()
    }

    #[inline]
    pub fn closure(&self) -> &LocalScope<Scope> {
        &self.closure
    }

    /// Whether this is a class's `init` method.
    #[inline]
    pub fn is_initializer(&self) -> bool {
        self.is_initializer
    }

    /// Give up the captured frame.
    pub(crate) fn into_closure(self) -> LocalScope<Scope> {
        self.closure
    }

    /// Bind this method to `instance`.
    ///
    /// The result closes over a new frame, enclosed by the method's own
    /// closure, in which `this_name` refers to the instance.
    pub fn bind(&self, instance: &Rc<InstanceValue>, this_name: Name) -> FunctionValue {
        let frame = LocalScope::new(Scope::with_parent(self.closure.clone()));
        frame
            .borrow_mut()
            .define(this_name, Value::Instance(Rc::clone(instance)));
        FunctionValue {
            decl: Rc::clone(&self.decl),
            label: self.label,
            closure: frame,
            is_initializer: self.is_initializer,
        }
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.label)
    }
}

/// A class: its name, optional superclass and method table.
pub struct ClassValue {
    label: &'static str,
    superclass: Option<Rc<ClassValue>>,
    methods: FxHashMap<Name, Rc<FunctionValue>>,
}

impl ClassValue {
    pub fn new(
        label: &'static str,
        superclass: Option<Rc<ClassValue>>,
        methods: FxHashMap<Name, Rc<FunctionValue>>,
    ) -> Self {
        ClassValue {
            label,
            superclass,
            methods,
        }
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Find a method on this class or the nearest ancestor that defines it.
    pub fn find_method(&self, name: Name) -> Option<Rc<FunctionValue>> {
        let mut class = self;
        loop {
            if let Some(method) = class.methods.get(&name) {
                return Some(Rc::clone(method));
            }
            class = class.superclass.as_deref()?;
        }
    }
}

impl fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// An instance: its class plus a mutable field table.
pub struct InstanceValue {
    class: Rc<ClassValue>,
    fields: RefCell<FxHashMap<Name, Value>>,
}

impl InstanceValue {
    pub fn new(class: Rc<ClassValue>) -> Self {
        InstanceValue {
            class,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn class(&self) -> &Rc<ClassValue> {
        &self.class
    }

    /// Read a field. Methods are not consulted.
    pub fn field(&self, name: Name) -> Option<Value> {
        self.fields.borrow().get(&name).cloned()
    }

    /// Create or overwrite a field.
    pub fn set_field(&self, name: Name, value: Value) {
        self.fields.borrow_mut().insert(name, value);
    }
}

impl fmt::Debug for InstanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.label)
    }
}
