//! Process registry: maps process names to definitions
//!
//! The registry is populated once at startup and never mutated afterwards.
//! An unknown process name is a configuration condition the caller guards
//! against, not an error the registry raises.

use crate::definition::ProcessDefinition;
use crate::processes;
use process_types::{ProcessError, ProcessResult};
use std::collections::HashMap;

/// Registry of process definitions, keyed by process name
#[derive(Clone, Debug, Default)]
pub struct ProcessRegistry {
    by_name: HashMap<String, ProcessDefinition>,
}

impl ProcessRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// A registry pre-populated with the built-in marketplace processes:
    /// `default-purchase`, `default-booking`, `default-inquiry`,
    /// `default-negotiation`.
    pub fn builtin() -> ProcessResult<Self> {
        let mut registry = Self::new();
        for definition in processes::builtin_definitions() {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a process definition
    ///
    /// Validates the definition before storing. One definition per process
    /// name; re-registering a name is an error.
    pub fn register(&mut self, definition: ProcessDefinition) -> ProcessResult<()> {
        definition.validate()?;

        let name = definition.name.to_string();
        if self.by_name.contains_key(&name) {
            return Err(ProcessError::DuplicateProcess(name));
        }

        tracing::info!(process = %name, "Process definition registered");
        self.by_name.insert(name, definition);
        Ok(())
    }

    /// Get a definition by process name
    ///
    /// Returns `None` for unrecognized names; callers guard rather than
    /// unwrap, since an unknown process is recoverable configuration drift.
    pub fn get(&self, name: &str) -> Option<&ProcessDefinition> {
        self.by_name.get(name)
    }

    /// Check if a process name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All registered process names
    pub fn names(&self) -> Vec<&str> {
        self.by_name.keys().map(String::as_str).collect()
    }

    /// Total number of registered processes
    pub fn count(&self) -> usize {
        self.by_name.len()
    }
}
