use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::ModelResult;

/// A named method on a descriptor: takes the instance and positional
/// arguments, returns the method's result.
pub type Method<T> = fn(&mut T, &[Value]) -> ModelResult<Value>;

/// The set of methods a descriptor exposes for dispatch by name.
///
/// Built once per descriptor by [`Model::methods`](crate::Model::methods).
/// Lookups for names that were never registered return `None`, which callers
/// turn into a typed invocation failure.
pub struct MethodTable<T> {
    entries: BTreeMap<&'static str, Method<T>>,
}

impl<T> MethodTable<T> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `method` under `name`, replacing any earlier registration.
    pub fn with(mut self, name: &'static str, method: Method<T>) -> Self {
        self.entries.insert(name, method);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<Method<T>> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered method names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MethodTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
