//! Environment frames for the interpreter.
//!
//! Frames form a parent chain. Resolved locals are reached by walking a
//! fixed number of hops with [`get_at`](LocalScope::get_at); globals live in
//! the root frame and are looked up by name.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lox_ir::Name;

use crate::value::{Teardown, Value};

/// A single-threaded shared frame: `Rc<RefCell<T>>` behind a factory.
///
/// Closures, bound methods and the interpreter's current-frame pointer all
/// hold clones of the same `LocalScope`, so an assignment through one is
/// visible through every other.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// The frame itself, if this is the last handle to it.
    pub(crate) fn into_unique(self) -> Option<T> {
        Rc::try_unwrap(self.0).ok().map(RefCell::into_inner)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// One frame of bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a root frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame enclosed by `parent`.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any earlier binding here.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up `name` in this frame only.
    #[inline]
    pub fn get(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    /// Overwrite an existing binding in this frame only.
    ///
    /// Returns `false` if the frame has no binding for `name`.
    pub fn assign(&mut self, name: Name, value: Value) -> bool {
        match self.bindings.get_mut(&name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Move the bindings and the parent handle into `teardown`.
    pub(crate) fn drain_into(&mut self, teardown: &mut Teardown) {
        for value in std::mem::take(&mut self.bindings).into_values() {
            teardown.push_value(value);
        }
        if let Some(parent) = self.parent.take() {
            teardown.push_frame(parent);
        }
    }
}

/// Frames are freed iteratively: a closure chain or a long linked list
/// held in a binding would otherwise recurse once per link.
impl Drop for Scope {
    fn drop(&mut self) {
        if self.bindings.is_empty() && self.parent.is_none() {
            return;
        }
        let mut teardown = Teardown::default();
        self.drain_into(&mut teardown);
        teardown.run();
    }
}

impl LocalScope<Scope> {
    /// The frame `hops` parents above this one.
    pub fn ancestor(&self, hops: usize) -> Option<LocalScope<Scope>> {
        let mut current = self.clone();
        for _ in 0..hops {
            let parent = current.borrow().parent.clone()?;
            current = parent;
        }
        Some(current)
    }

    /// Read `name` from the frame exactly `hops` parents up.
    pub fn get_at(&self, hops: usize, name: Name) -> Option<Value> {
        self.ancestor(hops)?.borrow().get(name)
    }

    /// Assign `name` in the frame exactly `hops` parents up.
    ///
    /// Returns `false` if that frame does not exist or has no such binding.
    pub fn assign_at(&self, hops: usize, name: Name, value: Value) -> bool {
        let Some(frame) = self.ancestor(hops) else {
            return false;
        };
        let mut scope = frame.borrow_mut();
        scope.assign(name, value)
    }
}
