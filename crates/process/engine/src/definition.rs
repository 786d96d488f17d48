//! Process definitions: declarative state graphs for transaction workflows
//!
//! A definition mirrors what the marketplace backend enforces: which
//! transitions exist, which state each one leads to, and which actor is
//! expected to trigger it. Definitions are plain data plus lookups — no
//! inheritance between process variants, no execution.

use process_types::{ActorRole, ProcessError, ProcessResult, StateName, TransitionName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ── Process Name ─────────────────────────────────────────────────────

/// Name of a process, e.g. `default-purchase`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessName(pub String);

impl ProcessName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProcessName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProcessName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ── Transition Spec ──────────────────────────────────────────────────

/// Where a transition may fire from
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransitionSource {
    /// A transaction-creating transition; fires before any state exists
    Initial,
    /// Fires from any of the listed states
    States(Vec<StateName>),
}

impl TransitionSource {
    /// Whether this transition may fire from the given (bare) state
    pub fn includes(&self, state: &str) -> bool {
        match self {
            Self::Initial => false,
            Self::States(states) => states.iter().any(|s| s.same_state(state)),
        }
    }
}

/// One edge in the process graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// The transition name, unique within the process
    pub name: TransitionName,
    /// Source state(s), or initial
    pub from: TransitionSource,
    /// Destination state
    pub to: StateName,
    /// The actor expected to trigger this transition
    pub by: ActorRole,
    /// Whether this transition carries a monetary offer (negotiation only)
    pub carries_offer: bool,
}

impl TransitionSpec {
    /// A transaction-creating transition
    pub fn initial(name: impl Into<TransitionName>, to: impl Into<StateName>, by: ActorRole) -> Self {
        Self {
            name: name.into(),
            from: TransitionSource::Initial,
            to: to.into(),
            by,
            carries_offer: false,
        }
    }

    /// A transition from a single source state
    pub fn new(
        name: impl Into<TransitionName>,
        from: impl Into<StateName>,
        to: impl Into<StateName>,
        by: ActorRole,
    ) -> Self {
        Self {
            name: name.into(),
            from: TransitionSource::States(vec![from.into()]),
            to: to.into(),
            by,
            carries_offer: false,
        }
    }

    /// A transition that may fire from several source states
    pub fn from_any_of(
        name: impl Into<TransitionName>,
        from: Vec<StateName>,
        to: impl Into<StateName>,
        by: ActorRole,
    ) -> Self {
        Self {
            name: name.into(),
            from: TransitionSource::States(from),
            to: to.into(),
            by,
            carries_offer: false,
        }
    }

    /// Mark this transition as offer-bearing
    pub fn with_offer(mut self) -> Self {
        self.carries_offer = true;
        self
    }
}

// ── Process Definition ───────────────────────────────────────────────

/// An immutable state graph for one marketplace workflow variant
///
/// Built declaratively with [`ProcessDefinition::with_state`] and
/// [`ProcessDefinition::with_transition`]; structural correctness is
/// checked by [`ProcessDefinition::validate`], which the registry runs
/// before accepting a definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    /// The process name, e.g. `default-purchase`
    pub name: ProcessName,
    /// All states of the graph, bare names
    pub states: Vec<StateName>,
    /// All transitions (edges) of the graph
    pub transitions: Vec<TransitionSpec>,
    /// States that represent an "offer pending" condition (negotiation only)
    pub offer_pending_states: Vec<StateName>,
}

impl ProcessDefinition {
    pub fn new(name: impl Into<ProcessName>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            transitions: Vec::new(),
            offer_pending_states: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: impl Into<StateName>) -> Self {
        self.states.push(state.into());
        self
    }

    pub fn with_transition(mut self, spec: TransitionSpec) -> Self {
        self.transitions.push(spec);
        self
    }

    /// Mark a state as offer-pending; it must also be declared as a state
    pub fn with_offer_pending(mut self, state: impl Into<StateName>) -> Self {
        self.offer_pending_states.push(state.into());
        self
    }

    // ── Structural queries ───────────────────────────────────────────

    /// Look up a transition by name
    pub fn transition(&self, name: &TransitionName) -> Option<&TransitionSpec> {
        self.transitions.iter().find(|t| &t.name == name)
    }

    /// The destination state of a transition
    pub fn destination_of(&self, name: &TransitionName) -> Option<&StateName> {
        self.transition(name).map(|t| &t.to)
    }

    /// The actor declared for a transition
    pub fn expected_actor(&self, name: &TransitionName) -> Option<ActorRole> {
        self.transition(name).map(|t| t.by)
    }

    /// All transitions whose destination is the given state
    ///
    /// Accepts a bare or `state/`-prefixed name; malformed names match no
    /// transitions.
    pub fn transitions_into(&self, state: &str) -> Vec<&TransitionSpec> {
        self.transitions
            .iter()
            .filter(|t| t.to.same_state(state))
            .collect()
    }

    /// All transitions that may fire out of the given state
    pub fn transitions_from(&self, state: &str) -> Vec<&TransitionSpec> {
        self.transitions
            .iter()
            .filter(|t| t.from.includes(state))
            .collect()
    }

    /// Whether the given (bare or prefixed) name is a declared state
    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s.same_state(state))
    }

    /// The transaction-creating transitions of this process
    pub fn initial_transitions(&self) -> Vec<&TransitionSpec> {
        self.transitions
            .iter()
            .filter(|t| t.from == TransitionSource::Initial)
            .collect()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    // ── Validation ───────────────────────────────────────────────────

    /// Validate the definition for structural correctness
    pub fn validate(&self) -> ProcessResult<()> {
        if self.states.is_empty() {
            return Err(ProcessError::ValidationError(
                "process must declare at least one state".into(),
            ));
        }

        let mut seen_states = HashSet::new();
        for state in &self.states {
            if state.bare().is_none() {
                return Err(ProcessError::ValidationError(format!(
                    "malformed state name: '{}'",
                    state
                )));
            }
            if !seen_states.insert(state.as_str()) {
                return Err(ProcessError::DuplicateState(state.clone()));
            }
        }

        let mut seen_transitions = HashSet::new();
        for spec in &self.transitions {
            if !seen_transitions.insert(spec.name.as_str()) {
                return Err(ProcessError::DuplicateTransition(spec.name.clone()));
            }
            if !self.has_state(spec.to.as_str()) {
                return Err(ProcessError::UnknownState(spec.to.clone()));
            }
            if let TransitionSource::States(sources) = &spec.from {
                for source in sources {
                    if !self.has_state(source.as_str()) {
                        return Err(ProcessError::UnknownState(source.clone()));
                    }
                }
            }
        }

        if self.initial_transitions().is_empty() {
            return Err(ProcessError::NoInitialTransition);
        }

        for state in &self.offer_pending_states {
            if !self.has_state(state.as_str()) {
                return Err(ProcessError::UnknownState(state.clone()));
            }
        }

        Ok(())
    }
}
