//! The `default-purchase` process
//!
//! Stock purchase flow: payment is captured up front, the provider ships,
//! the customer confirms receipt (or disputes), and both sides review.
//! Cancellation and expiry short-circuits branch off the happy path.

use crate::definition::{ProcessDefinition, ProcessName, TransitionSpec};
use process_types::ActorRole;

pub const NAME: &str = "default-purchase";

pub mod states {
    pub const INQUIRY: &str = "inquiry";
    pub const PENDING_PAYMENT: &str = "pending-payment";
    pub const PAYMENT_EXPIRED: &str = "payment-expired";
    pub const PURCHASED: &str = "purchased";
    pub const DELIVERED: &str = "delivered";
    pub const DISPUTED: &str = "disputed";
    pub const CANCELED: &str = "canceled";
    pub const RECEIVED: &str = "received";
    pub const REVIEWED_BY_CUSTOMER: &str = "reviewed-by-customer";
    pub const REVIEWED_BY_PROVIDER: &str = "reviewed-by-provider";
    pub const REVIEWED: &str = "reviewed";
}

pub mod transitions {
    pub const INQUIRE: &str = "transition/inquire";
    pub const REQUEST_PAYMENT: &str = "transition/request-payment";
    pub const REQUEST_PAYMENT_AFTER_INQUIRY: &str = "transition/request-payment-after-inquiry";
    pub const CONFIRM_PAYMENT: &str = "transition/confirm-payment";
    pub const EXPIRE_PAYMENT: &str = "transition/expire-payment";
    pub const MARK_DELIVERED: &str = "transition/mark-delivered";
    pub const OPERATOR_MARK_DELIVERED: &str = "transition/operator-mark-delivered";
    pub const CANCEL: &str = "transition/cancel";
    pub const AUTO_CANCEL: &str = "transition/auto-cancel";
    pub const MARK_RECEIVED_FROM_PURCHASED: &str = "transition/mark-received-from-purchased";
    pub const MARK_RECEIVED: &str = "transition/mark-received";
    pub const AUTO_MARK_RECEIVED: &str = "transition/auto-mark-received";
    pub const DISPUTE: &str = "transition/dispute";
    pub const OPERATOR_DISPUTE: &str = "transition/operator-dispute";
    pub const MARK_RECEIVED_FROM_DISPUTED: &str = "transition/mark-received-from-disputed";
    pub const CANCEL_FROM_DISPUTED: &str = "transition/cancel-from-disputed";
    pub const AUTO_CANCEL_FROM_DISPUTED: &str = "transition/auto-cancel-from-disputed";
    pub const REVIEW_1_BY_CUSTOMER: &str = "transition/review-1-by-customer";
    pub const REVIEW_1_BY_PROVIDER: &str = "transition/review-1-by-provider";
    pub const REVIEW_2_BY_CUSTOMER: &str = "transition/review-2-by-customer";
    pub const REVIEW_2_BY_PROVIDER: &str = "transition/review-2-by-provider";
    pub const EXPIRE_REVIEW_PERIOD: &str = "transition/expire-review-period";
    pub const EXPIRE_CUSTOMER_REVIEW_PERIOD: &str = "transition/expire-customer-review-period";
    pub const EXPIRE_PROVIDER_REVIEW_PERIOD: &str = "transition/expire-provider-review-period";
}

pub fn definition() -> ProcessDefinition {
    use states::*;
    use transitions::*;
    use ActorRole::{Customer, Operator, Provider, System};

    ProcessDefinition::new(ProcessName::new(NAME))
        .with_state(INQUIRY)
        .with_state(PENDING_PAYMENT)
        .with_state(PAYMENT_EXPIRED)
        .with_state(PURCHASED)
        .with_state(DELIVERED)
        .with_state(DISPUTED)
        .with_state(CANCELED)
        .with_state(RECEIVED)
        .with_state(REVIEWED_BY_CUSTOMER)
        .with_state(REVIEWED_BY_PROVIDER)
        .with_state(REVIEWED)
        .with_transition(TransitionSpec::initial(INQUIRE, INQUIRY, Customer))
        .with_transition(TransitionSpec::initial(
            REQUEST_PAYMENT,
            PENDING_PAYMENT,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REQUEST_PAYMENT_AFTER_INQUIRY,
            INQUIRY,
            PENDING_PAYMENT,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            CONFIRM_PAYMENT,
            PENDING_PAYMENT,
            PURCHASED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_PAYMENT,
            PENDING_PAYMENT,
            PAYMENT_EXPIRED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            MARK_DELIVERED,
            PURCHASED,
            DELIVERED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            OPERATOR_MARK_DELIVERED,
            PURCHASED,
            DELIVERED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(CANCEL, PURCHASED, CANCELED, Operator))
        .with_transition(TransitionSpec::new(
            AUTO_CANCEL,
            PURCHASED,
            CANCELED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            MARK_RECEIVED_FROM_PURCHASED,
            PURCHASED,
            RECEIVED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            MARK_RECEIVED,
            DELIVERED,
            RECEIVED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            AUTO_MARK_RECEIVED,
            DELIVERED,
            RECEIVED,
            System,
        ))
        .with_transition(TransitionSpec::new(DISPUTE, DELIVERED, DISPUTED, Customer))
        .with_transition(TransitionSpec::new(
            OPERATOR_DISPUTE,
            DELIVERED,
            DISPUTED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(
            MARK_RECEIVED_FROM_DISPUTED,
            DISPUTED,
            RECEIVED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(
            CANCEL_FROM_DISPUTED,
            DISPUTED,
            CANCELED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(
            AUTO_CANCEL_FROM_DISPUTED,
            DISPUTED,
            CANCELED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_CUSTOMER,
            RECEIVED,
            REVIEWED_BY_CUSTOMER,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_PROVIDER,
            RECEIVED,
            REVIEWED_BY_PROVIDER,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_2_BY_CUSTOMER,
            REVIEWED_BY_PROVIDER,
            REVIEWED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_2_BY_PROVIDER,
            REVIEWED_BY_CUSTOMER,
            REVIEWED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_REVIEW_PERIOD,
            RECEIVED,
            REVIEWED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_CUSTOMER_REVIEW_PERIOD,
            REVIEWED_BY_PROVIDER,
            REVIEWED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_PROVIDER_REVIEW_PERIOD,
            REVIEWED_BY_CUSTOMER,
            REVIEWED,
            System,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use process_types::{StateName, TransitionName};

    #[test]
    fn test_definition_validates() {
        assert!(definition().validate().is_ok());
    }

    #[test]
    fn test_review_expiry_transitions_land_on_reviewed() {
        let def = definition();
        for name in [
            transitions::EXPIRE_REVIEW_PERIOD,
            transitions::EXPIRE_CUSTOMER_REVIEW_PERIOD,
            transitions::EXPIRE_PROVIDER_REVIEW_PERIOD,
            transitions::REVIEW_2_BY_CUSTOMER,
            transitions::REVIEW_2_BY_PROVIDER,
        ] {
            let dest = def.destination_of(&TransitionName::new(name)).unwrap();
            assert_eq!(dest, &StateName::new(states::REVIEWED), "{name}");
        }
    }

    #[test]
    fn test_only_customer_confirms_payment() {
        let def = definition();
        let confirm = TransitionName::new(transitions::CONFIRM_PAYMENT);
        assert!(def.actor_may(&confirm, ActorRole::Customer));
        assert!(!def.actor_may(&confirm, ActorRole::Provider));
    }

    #[test]
    fn test_received_is_reachable_from_three_states() {
        let def = definition();
        let into_received = def.transitions_into(states::RECEIVED);
        assert_eq!(into_received.len(), 4);

        let sources_covered = [states::PURCHASED, states::DELIVERED, states::DISPUTED]
            .into_iter()
            .all(|s| into_received.iter().any(|t| t.from.includes(s)));
        assert!(sources_covered);
    }

    #[test]
    fn test_two_initial_transitions() {
        let def = definition();
        assert_eq!(def.initial_transitions().len(), 2);
    }
}
