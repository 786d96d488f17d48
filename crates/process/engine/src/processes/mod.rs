//! Built-in process catalogue
//!
//! One module per marketplace workflow variant. Each module exports the
//! process `NAME`, `const` state and transition name strings, and a
//! `definition()` constructor building the state graph. The graphs mirror
//! the processes the marketplace backend ships by default; a marketplace
//! with custom processes registers its own definitions instead.

pub mod booking;
pub mod inquiry;
pub mod negotiation;
pub mod purchase;

use crate::definition::ProcessDefinition;

/// All built-in process definitions, in registration order
pub fn builtin_definitions() -> Vec<ProcessDefinition> {
    vec![
        purchase::definition(),
        booking::definition(),
        inquiry::definition(),
        negotiation::definition(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_definition_validates() {
        for def in builtin_definitions() {
            def.validate()
                .unwrap_or_else(|e| panic!("{} failed validation: {e}", def.name));
        }
    }

    #[test]
    fn test_builtin_names_are_distinct() {
        let defs = builtin_definitions();
        let mut names: Vec<_> = defs.iter().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len());
    }
}
