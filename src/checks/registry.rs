//! Ordered registry of checks.
//!
//! Unlike a lookup table, the registry preserves registration order: it is
//! the order sections appear in the report.

use super::builtin::{
    ApiStyleCheck, BuildToolCheck, LifecycleCleanupCheck, ReactivityCheck, SsrCheck,
    StateManagementCheck, VForKeysCheck, VueVersionCheck,
};
use super::check::{Check, CheckId};

/// Registry of checks to run.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a registry with the eight built-in checks in report order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(VueVersionCheck));
        registry.register(Box::new(BuildToolCheck));
        registry.register(Box::new(StateManagementCheck));
        registry.register(Box::new(ApiStyleCheck));
        registry.register(Box::new(ReactivityCheck));
        registry.register(Box::new(VForKeysCheck));
        registry.register(Box::new(LifecycleCleanupCheck));
        registry.register(Box::new(SsrCheck));
        registry
    }

    /// Append a check. A check with the same ID replaces the earlier one
    /// in place.
    pub fn register(&mut self, check: Box<dyn Check>) {
        let id = check.id();
        match self.checks.iter().position(|c| c.id() == id) {
            Some(index) => self.checks[index] = check,
            None => self.checks.push(check),
        }
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn Check> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
