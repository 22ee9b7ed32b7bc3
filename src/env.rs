// ABOUTME: Environment module for managing variable bindings, docs, and the parent chain

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope: name -> value, name -> doc text, and an optional parent.
///
/// The parent link is mutable (`RefCell`) rather than fixed at construction
/// time because lambda application re-parents a call's local environment to
/// the caller's environment for the duration of a single call (spec §4.2.1).
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    docs: RefCell<HashMap<String, String>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new environment with no parent (the global environment, or
    /// a freshly constructed lambda closure environment before it gains one).
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            docs: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Defines a binding in THIS scope only (doesn't walk the parent chain).
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Records documentation text for `name` in THIS scope.
    pub fn define_doc(&self, name: &str, text: String) {
        self.docs.borrow_mut().insert(name.to_string(), text);
    }

    /// Looks up a symbol in this scope, then the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get(name);
        }
        None
    }

    /// Looks up documentation for a symbol in this scope, then the parent chain.
    pub fn get_doc(&self, name: &str) -> Option<String> {
        if let Some(text) = self.docs.borrow().get(name) {
            return Some(text.clone());
        }
        if let Some(parent) = self.parent.borrow().as_ref() {
            return parent.get_doc(name);
        }
        None
    }

    /// Defines `name` in the global environment, found by walking the parent
    /// chain to the top. Used by `def`.
    pub fn define_global(self: &Rc<Self>, name: String, value: Value) {
        self.root().define(name, value);
    }

    /// Walks the parent chain to the environment with no parent.
    pub fn root(self: &Rc<Self>) -> Rc<Self> {
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.root(),
            None => self.clone(),
        }
    }

    /// Replaces this environment's parent link. Used to re-parent a lambda's
    /// cloned local environment to the caller for the duration of a call.
    pub fn set_parent(&self, parent: Option<Rc<Environment>>) {
        *self.parent.borrow_mut() = parent;
    }

    /// Produces an independent environment with a copy of this one's own
    /// bindings and docs (not the parent chain). Used when a lambda is
    /// invoked: its closure environment is snapshotted before parameters are
    /// bound into the copy, so one invocation cannot leak bindings into
    /// another or into the global scope (spec §3, "Local environment").
    pub fn snapshot(&self) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            docs: RefCell::new(self.docs.borrow().clone()),
            parent: RefCell::new(None),
        })
    }

    /// This scope's own bindings (not the parent chain), sorted by name for
    /// deterministic display. Used to render a partial application's bound
    /// arguments (spec §4.3, "Display contract").
    pub fn own_bindings(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<_> = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
