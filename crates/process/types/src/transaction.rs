//! Transactions and their transition logs
//!
//! The marketplace API is the sole producer of transition logs. The engine
//! treats them as read-only input: every query returns fresh values and
//! never writes back.

use crate::{ActorRole, TransitionName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Transaction Identifier ───────────────────────────────────────────

/// Unique identifier for a marketplace transaction
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Transition Log ───────────────────────────────────────────────────

/// One recorded transition in a transaction's log
///
/// Array order is authoritative; `created_at` is informational and never
/// used for re-sorting. `offer_in_subunits` is present only on entries of
/// negotiation processes that carry a monetary offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionLogEntry {
    /// The transition that fired
    pub transition: TransitionName,
    /// Who triggered it
    pub by: ActorRole,
    /// When it was recorded by the marketplace API
    pub created_at: DateTime<Utc>,
    /// Offer amount in currency subunits, for offer-bearing transitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_in_subunits: Option<i64>,
}

impl TransitionLogEntry {
    pub fn new(transition: impl Into<TransitionName>, by: ActorRole) -> Self {
        Self {
            transition: transition.into(),
            by,
            created_at: Utc::now(),
            offer_in_subunits: None,
        }
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn with_offer(mut self, subunits: i64) -> Self {
        self.offer_in_subunits = Some(subunits);
        self
    }
}

// ── Offer ────────────────────────────────────────────────────────────

/// A monetary offer tied to a specific negotiation transition
///
/// Offers arrive out-of-band from the transition log and must align
/// positionally with the log's offer-bearing subsequence: same count, same
/// transition names, same actors, same order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// The offer-bearing transition this amount belongs to
    pub transition: TransitionName,
    /// Who made the offer
    pub by: ActorRole,
    /// Amount in currency subunits
    pub offer_in_subunits: i64,
}

impl Offer {
    pub fn new(transition: impl Into<TransitionName>, by: ActorRole, subunits: i64) -> Self {
        Self {
            transition: transition.into(),
            by,
            offer_in_subunits: subunits,
        }
    }
}

// ── Transaction ──────────────────────────────────────────────────────

/// The attributes of a transaction as consumed by the process engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAttributes {
    /// The process this transaction runs, e.g. `default-purchase`
    pub process_name: String,
    /// The version of the process definition on the server
    pub process_version: u32,
    /// The most recent transition; equals the final log entry
    pub last_transition: TransitionName,
    /// The ordered transition log
    pub transitions: Vec<TransitionLogEntry>,
}

/// A marketplace transaction, reduced to what process queries need
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: TransactionId,
    /// Process name, version, last transition and the transition log
    pub attributes: TransactionAttributes,
}

impl Transaction {
    pub fn new(
        process_name: impl Into<String>,
        process_version: u32,
        last_transition: impl Into<TransitionName>,
        transitions: Vec<TransitionLogEntry>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            attributes: TransactionAttributes {
                process_name: process_name.into(),
                process_version,
                last_transition: last_transition.into(),
                transitions,
            },
        }
    }

    /// Build a transaction whose `last_transition` is taken from the log
    ///
    /// An empty log yields an empty last-transition name, which no process
    /// graph recognizes; queries on such a transaction fail strictly.
    pub fn from_log(
        process_name: impl Into<String>,
        process_version: u32,
        transitions: Vec<TransitionLogEntry>,
    ) -> Self {
        let last = transitions
            .last()
            .map(|entry| entry.transition.clone())
            .unwrap_or_else(|| TransitionName::new(""));
        Self::new(process_name, process_version, last, transitions)
    }

    pub fn process_name(&self) -> &str {
        &self.attributes.process_name
    }

    pub fn last_transition(&self) -> &TransitionName {
        &self.attributes.last_transition
    }

    pub fn transitions(&self) -> &[TransitionLogEntry] {
        &self.attributes.transitions
    }

    /// Whether this transition appears anywhere in the log
    pub fn has_transition(&self, transition: &TransitionName) -> bool {
        self.attributes
            .transitions
            .iter()
            .any(|entry| &entry.transition == transition)
    }

    /// Whether `last_transition` agrees with the final log entry
    ///
    /// The producing API maintains this invariant; the engine trusts it and
    /// does not re-validate beyond using `last_transition` directly.
    pub fn is_consistent(&self) -> bool {
        self.attributes
            .transitions
            .last()
            .map(|entry| entry.transition == self.attributes.last_transition)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_log() -> Vec<TransitionLogEntry> {
        vec![
            TransitionLogEntry::new("transition/request-payment", ActorRole::Customer),
            TransitionLogEntry::new("transition/confirm-payment", ActorRole::Customer),
        ]
    }

    #[test]
    fn test_from_log_uses_final_entry() {
        let tx = Transaction::from_log("default-purchase", 1, make_log());
        assert_eq!(
            tx.last_transition(),
            &TransitionName::new("transition/confirm-payment")
        );
        assert!(tx.is_consistent());
    }

    #[test]
    fn test_inconsistent_log_detected() {
        let tx = Transaction::new(
            "default-purchase",
            1,
            "transition/mark-delivered",
            make_log(),
        );
        assert!(!tx.is_consistent());
    }

    #[test]
    fn test_has_transition() {
        let tx = Transaction::from_log("default-purchase", 1, make_log());
        assert!(tx.has_transition(&TransitionName::new("transition/request-payment")));
        assert!(!tx.has_transition(&TransitionName::new("transition/mark-delivered")));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let entry = TransitionLogEntry::new("transition/make-offer", ActorRole::Customer)
            .with_offer(15_000);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["transition"], "transition/make-offer");
        assert_eq!(json["by"], "customer");
        assert_eq!(json["offerInSubunits"], 15_000);
        assert!(json.get("createdAt").is_some());

        // Entries without an offer omit the field entirely
        let plain = TransitionLogEntry::new("transition/inquire", ActorRole::Customer);
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json.get("offerInSubunits").is_none());
    }

    #[test]
    fn test_transaction_id() {
        let id = TransactionId::generate();
        assert!(!id.0.is_empty());
        assert!(id.short().len() <= 8);

        let named = TransactionId::new("tx-1");
        assert_eq!(format!("{}", named), "tx-1");
    }
}
