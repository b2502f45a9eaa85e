// ABOUTME: Environment module for managing variable bindings and lexical scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a new global environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: None,
        })
    }

    /// Creates a fresh child environment parented to `parent`. Used both for
    /// a lambda's captured environment and for each per-call frame.
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: Some(parent),
        })
    }

    /// Put: inserts or replaces a binding in the current frame only.
    pub fn put(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Lookup: walks the parent chain, first match wins. Returns a clone so
    /// that further mutation of the looked-up value never affects the env.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }

    /// Define: inserts or replaces a binding in the global (root) frame,
    /// regardless of which frame this call started from.
    pub fn define(&self, name: String, value: Value) {
        let mut current = self;
        while let Some(parent) = &current.parent {
            current = parent;
        }
        current.put(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let env = Environment::new();
        env.put("x".to_string(), Value::Integer(42));
        assert_eq!(env.get("x"), Some(Value::Integer(42)));
    }

    #[test]
    fn undefined_symbol_is_none() {
        let env = Environment::new();
        assert!(env.get("undefined").is_none());
    }

    #[test]
    fn shadowing_prefers_current_frame() {
        let parent = Environment::new();
        parent.put("x".to_string(), Value::Integer(1));

        let child = Environment::with_parent(parent);
        child.put("x".to_string(), Value::Integer(2));

        assert_eq!(child.get("x"), Some(Value::Integer(2)));
    }

    #[test]
    fn lookup_walks_parent_chain() {
        let grandparent = Environment::new();
        grandparent.put("a".to_string(), Value::Integer(1));

        let parent = Environment::with_parent(grandparent);
        parent.put("b".to_string(), Value::Integer(2));

        let child = Environment::with_parent(parent);
        child.put("c".to_string(), Value::Integer(3));

        assert_eq!(child.get("a"), Some(Value::Integer(1)));
        assert_eq!(child.get("b"), Some(Value::Integer(2)));
        assert_eq!(child.get("c"), Some(Value::Integer(3)));
    }

    #[test]
    fn define_always_targets_the_global_frame() {
        let global = Environment::new();
        let local = Environment::with_parent(global.clone());

        local.define("x".to_string(), Value::Integer(7));

        // visible in the frame that defined it...
        assert_eq!(local.get("x"), Some(Value::Integer(7)));
        // ...and directly in the global frame, not just through lookup.
        assert_eq!(global.get("x"), Some(Value::Integer(7)));
    }

    #[test]
    fn put_is_local_only() {
        let global = Environment::new();
        let local = Environment::with_parent(global.clone());

        local.put("y".to_string(), Value::Integer(9));

        assert_eq!(local.get("y"), Some(Value::Integer(9)));
        assert!(global.get("y").is_none());
    }
}
