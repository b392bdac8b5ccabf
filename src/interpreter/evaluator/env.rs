use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A single frame in the lexical environment chain.
///
/// Each frame maps names to values and optionally links to an enclosing
/// frame. Lookups walk the chain towards the globals; the first match
/// wins. Frames are shared through `Rc<RefCell<..>>` so that function
/// values can keep their defining environment alive as a closure.
///
/// Closures, methods and `this` can form reference cycles (an instance
/// holds methods whose closure holds the instance). Such cycles are not
/// collected; scripts are short-lived enough that this does not matter.
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates the root (global) frame.
    #[must_use]
    pub fn global() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { values: HashMap::new(),
                                    parent: None }))
    }

    /// Creates a frame nested inside `parent`.
    #[must_use]
    pub fn nested(parent: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { values: HashMap::new(),
                                    parent: Some(Rc::clone(parent)) }))
    }

    /// Creates or overwrites a binding in this frame, ignoring enclosing
    /// frames.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Looks a name up through the chain, innermost frame first.
    #[must_use]
    pub fn lookup(env: &Rc<RefCell<Self>>, name: &str) -> Option<Value> {
        let mut current = Rc::clone(env);
        loop {
            if let Some(value) = current.borrow().values.get(name) {
                return Some(value.clone());
            }
            let parent = current.borrow().parent.clone();
            match parent {
                Some(next) => current = next,
                None => return None,
            }
        }
    }

    /// Rebinds the nearest existing binding of `name`. Returns `false`
    /// when no frame in the chain binds the name.
    pub fn rebind(env: &Rc<RefCell<Self>>, name: &str, value: Value) -> bool {
        let mut current = Rc::clone(env);
        loop {
            if current.borrow().values.contains_key(name) {
                current.borrow_mut().values.insert(name.to_string(), value);
                return true;
            }
            let parent = current.borrow().parent.clone();
            match parent {
                Some(next) => current = next,
                None => return false,
            }
        }
    }

    /// The `Let` rule: rebind the nearest existing binding, or create a
    /// new binding in the current frame when the name is unbound. This is
    /// what lets a `While` counter assigned inside the loop body update
    /// the binding created before the loop.
    pub fn bind(env: &Rc<RefCell<Self>>, name: &str, value: Value) {
        if !Self::rebind(env, name, value.clone()) {
            env.borrow_mut().define(name, value);
        }
    }

    /// Snapshots the bindings of this frame only (no parents).
    #[must_use]
    pub fn local_entries(&self) -> Vec<(String, Value)> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}
