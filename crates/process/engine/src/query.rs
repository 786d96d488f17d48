//! Transaction queries against a process definition
//!
//! Every query here is a pure read over a definition and a transaction.
//! The transition log is replayed against the graph — passage facts are
//! derived from which graph edges appear in the log, never from a
//! hard-coded transition list.

use crate::definition::ProcessDefinition;
use process_types::{ActorRole, ProcessError, ProcessResult, StateName, Transaction, TransitionName};

impl ProcessDefinition {
    /// The current state of a transaction: the destination of its last
    /// transition in this process's graph.
    ///
    /// An unrecognized or absent `last_transition` is a data-integrity error
    /// from the producing API. The policy here is strict: return
    /// [`ProcessError::UnknownTransition`] rather than fabricate a state
    /// that implies progress which did not happen.
    pub fn current_state(&self, tx: &Transaction) -> ProcessResult<&StateName> {
        let last = tx.last_transition();
        self.destination_of(last)
            .ok_or_else(|| ProcessError::UnknownTransition {
                process: self.name.to_string(),
                transition: last.clone(),
            })
    }

    /// Whether the transaction has ever been at `state`.
    ///
    /// True iff any transition that enters `state` in this graph appears in
    /// the transaction's log. Reflexive (the current state's entering
    /// transition is the last log entry), monotonic along the taken path
    /// (each intermediate state was entered by a logged transition), and
    /// false for states on branches the transaction never took.
    ///
    /// Accepts a bare or `state/`-prefixed name; unknown or malformed names
    /// are false.
    pub fn has_passed_state(&self, state: &str, tx: &Transaction) -> bool {
        self.transitions_into(state)
            .iter()
            .any(|spec| tx.has_transition(&spec.name))
    }

    /// Whether the given actor is declared for the transition
    ///
    /// Unknown transitions permit no actor.
    pub fn actor_may(&self, transition: &TransitionName, role: ActorRole) -> bool {
        self.expected_actor(transition) == Some(role)
    }

    /// Whether every log entry's actor matches the actor the graph declares
    /// for that transition. Entries for unknown transitions fail the check.
    pub fn log_actors_consistent(&self, tx: &Transaction) -> bool {
        tx.transitions()
            .iter()
            .all(|entry| self.actor_may(&entry.transition, entry.by))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::TransitionSpec;
    use crate::ProcessName;
    use process_types::TransitionLogEntry;

    /// request -> paid -> delivered -> received, with a cancel branch off paid
    fn make_definition() -> ProcessDefinition {
        ProcessDefinition::new(ProcessName::new("linear-test"))
            .with_state("pending-payment")
            .with_state("paid")
            .with_state("delivered")
            .with_state("received")
            .with_state("canceled")
            .with_transition(TransitionSpec::initial(
                "transition/request-payment",
                "pending-payment",
                ActorRole::Customer,
            ))
            .with_transition(TransitionSpec::new(
                "transition/confirm-payment",
                "pending-payment",
                "paid",
                ActorRole::Customer,
            ))
            .with_transition(TransitionSpec::new(
                "transition/mark-delivered",
                "paid",
                "delivered",
                ActorRole::Provider,
            ))
            .with_transition(TransitionSpec::new(
                "transition/mark-received",
                "delivered",
                "received",
                ActorRole::Customer,
            ))
            .with_transition(TransitionSpec::new(
                "transition/cancel",
                "paid",
                "canceled",
                ActorRole::Operator,
            ))
    }

    fn make_tx(transitions: &[(&str, ActorRole)]) -> Transaction {
        Transaction::from_log(
            "linear-test",
            1,
            transitions
                .iter()
                .map(|(name, by)| TransitionLogEntry::new(*name, *by))
                .collect(),
        )
    }

    #[test]
    fn test_current_state() {
        let def = make_definition();
        let tx = make_tx(&[
            ("transition/request-payment", ActorRole::Customer),
            ("transition/confirm-payment", ActorRole::Customer),
        ]);

        assert_eq!(def.current_state(&tx).unwrap(), &StateName::new("paid"));
    }

    #[test]
    fn test_current_state_unknown_transition_is_strict_error() {
        let def = make_definition();
        let tx = make_tx(&[("transition/no-such-thing", ActorRole::Customer)]);

        assert!(matches!(
            def.current_state(&tx),
            Err(ProcessError::UnknownTransition { .. })
        ));
    }

    #[test]
    fn test_current_state_empty_log_is_strict_error() {
        let def = make_definition();
        let tx = make_tx(&[]);

        assert!(matches!(
            def.current_state(&tx),
            Err(ProcessError::UnknownTransition { .. })
        ));
    }

    #[test]
    fn test_has_passed_state_is_monotonic_and_reflexive() {
        let def = make_definition();
        let tx = make_tx(&[
            ("transition/request-payment", ActorRole::Customer),
            ("transition/confirm-payment", ActorRole::Customer),
            ("transition/mark-delivered", ActorRole::Provider),
            ("transition/mark-received", ActorRole::Customer),
        ]);

        // Every state along the taken path, including the current one
        assert!(def.has_passed_state("pending-payment", &tx));
        assert!(def.has_passed_state("paid", &tx));
        assert!(def.has_passed_state("delivered", &tx));
        assert!(def.has_passed_state("received", &tx));

        // The branch not taken
        assert!(!def.has_passed_state("canceled", &tx));
    }

    #[test]
    fn test_has_passed_state_cancelled_branch() {
        let def = make_definition();
        let tx = make_tx(&[
            ("transition/request-payment", ActorRole::Customer),
            ("transition/confirm-payment", ActorRole::Customer),
            ("transition/cancel", ActorRole::Operator),
        ]);

        assert!(def.has_passed_state("paid", &tx));
        assert!(def.has_passed_state("canceled", &tx));
        // Never delivered: cancellation must not imply happy-path progress
        assert!(!def.has_passed_state("delivered", &tx));
        assert!(!def.has_passed_state("received", &tx));
    }

    #[test]
    fn test_has_passed_state_prefixed_and_malformed_input() {
        let def = make_definition();
        let tx = make_tx(&[("transition/request-payment", ActorRole::Customer)]);

        assert!(def.has_passed_state("state/pending-payment", &tx));
        assert!(!def.has_passed_state("", &tx));
        assert!(!def.has_passed_state("/", &tx));
        assert!(!def.has_passed_state("state/", &tx));
    }

    #[test]
    fn test_actor_may() {
        let def = make_definition();
        let cancel = TransitionName::new("transition/cancel");

        assert!(def.actor_may(&cancel, ActorRole::Operator));
        assert!(!def.actor_may(&cancel, ActorRole::Customer));
        assert!(!def.actor_may(&TransitionName::new("transition/unknown"), ActorRole::Operator));
    }

    #[test]
    fn test_log_actors_consistent() {
        let def = make_definition();

        let good = make_tx(&[
            ("transition/request-payment", ActorRole::Customer),
            ("transition/confirm-payment", ActorRole::Customer),
        ]);
        assert!(def.log_actors_consistent(&good));

        let bad = make_tx(&[("transition/request-payment", ActorRole::Provider)]);
        assert!(!def.log_actors_consistent(&bad));
    }
}
