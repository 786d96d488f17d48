//! Transition and state name newtypes
//!
//! Both are opaque strings owned by the process that declares them.
//! Transition names are never reused across unrelated processes with
//! different semantics.

use serde::{Deserialize, Serialize};

/// Name of a transition in a process graph, e.g. `transition/confirm-payment`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionName(pub String);

impl TransitionName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransitionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitionName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Name of a state in a process graph, e.g. `purchased`
///
/// States are stored bare. UI code sometimes probes with a `state/` prefix,
/// so every comparison in the engine goes through [`StateName::normalize`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateName(pub String);

impl StateName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strip an optional single `state/` prefix and reject malformed input.
    ///
    /// Returns `None` for the empty string, a lone `/`, a name beginning or
    /// ending with `/`, and anything still containing a `/` after the prefix
    /// is removed.
    pub fn normalize(raw: &str) -> Option<&str> {
        let bare = raw.strip_prefix("state/").unwrap_or(raw);
        if bare.is_empty() || bare.contains('/') {
            return None;
        }
        Some(bare)
    }

    /// The bare name of this state, or `None` if it is malformed
    pub fn bare(&self) -> Option<&str> {
        Self::normalize(&self.0)
    }

    /// Whether this state names the same node as `other`, ignoring an
    /// optional `state/` prefix on either side. Malformed names match nothing.
    pub fn same_state(&self, other: &str) -> bool {
        match (self.bare(), Self::normalize(other)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for StateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StateName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_and_prefixed() {
        assert_eq!(StateName::normalize("purchased"), Some("purchased"));
        assert_eq!(StateName::normalize("state/purchased"), Some("purchased"));
        assert_eq!(
            StateName::normalize("state/offer-pending"),
            Some("offer-pending")
        );
    }

    #[test]
    fn test_normalize_malformed() {
        assert_eq!(StateName::normalize(""), None);
        assert_eq!(StateName::normalize("/"), None);
        assert_eq!(StateName::normalize("state/"), None);
        assert_eq!(StateName::normalize("/purchased"), None);
        assert_eq!(StateName::normalize("purchased/"), None);
        assert_eq!(StateName::normalize("state/a/b"), None);
    }

    #[test]
    fn test_same_state() {
        let s = StateName::new("offer-pending");
        assert!(s.same_state("offer-pending"));
        assert!(s.same_state("state/offer-pending"));
        assert!(!s.same_state("offer-accepted"));
        assert!(!s.same_state(""));
        assert!(!s.same_state("/"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", TransitionName::new("transition/confirm-payment")),
            "transition/confirm-payment"
        );
        assert_eq!(format!("{}", StateName::new("purchased")), "purchased");
    }
}
