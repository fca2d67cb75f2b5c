use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Maps variable names to their last assigned value.
///
/// A store lives for exactly one run. It is created empty, only assignment
/// evaluation writes to it, and it is dropped when the run ends. There is no
/// scoping: every line of a run sees the same bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableStore {
    variables: HashMap<String, Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value currently bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{evaluator::VariableStore, value::Value};
    ///
    /// let mut store = VariableStore::new();
    /// store.assign("x", Value::Integer(1));
    /// store.assign("x", Value::Real(2.5));
    ///
    /// assert_eq!(store.get("x"), Some(Value::Real(2.5)));
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
