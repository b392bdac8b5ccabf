use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A host-populated registry of importable modules.
///
/// A module is nothing more than a named list of `(name, value)` pairs;
/// `Import` copies those pairs into the global environment. The core
/// language ships no modules of its own. Hosts embedding the interpreter
/// register theirs before running any source, and the registry is
/// read-only from the script's point of view.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Vec<(String, Value)>>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a module under `name`.
    pub fn register(&mut self, name: &str, bindings: Vec<(String, Value)>) {
        self.modules.insert(name.to_string(), bindings);
    }

    /// Looks up a module's bindings.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[(String, Value)]> {
        self.modules.get(name).map(Vec::as_slice)
    }
}
