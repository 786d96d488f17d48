//! The `default-booking` process
//!
//! Calendar booking flow: payment is preauthorized, the provider accepts
//! or declines, completion fires after the booking period, and both sides
//! review.

use crate::definition::{ProcessDefinition, ProcessName, TransitionSpec};
use process_types::ActorRole;

pub const NAME: &str = "default-booking";

pub mod states {
    pub const INQUIRY: &str = "inquiry";
    pub const PENDING_PAYMENT: &str = "pending-payment";
    pub const PAYMENT_EXPIRED: &str = "payment-expired";
    pub const PREAUTHORIZED: &str = "preauthorized";
    pub const DECLINED: &str = "declined";
    pub const EXPIRED: &str = "expired";
    pub const ACCEPTED: &str = "accepted";
    pub const CANCELED: &str = "canceled";
    pub const DELIVERED: &str = "delivered";
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
    pub const ACCEPT: &str = "transition/accept";
    pub const OPERATOR_ACCEPT: &str = "transition/operator-accept";
    pub const DECLINE: &str = "transition/decline";
    pub const OPERATOR_DECLINE: &str = "transition/operator-decline";
    pub const EXPIRE: &str = "transition/expire";
    pub const CANCEL: &str = "transition/cancel";
    pub const COMPLETE: &str = "transition/complete";
    pub const OPERATOR_COMPLETE: &str = "transition/operator-complete";
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
        .with_state(PREAUTHORIZED)
        .with_state(DECLINED)
        .with_state(EXPIRED)
        .with_state(ACCEPTED)
        .with_state(CANCELED)
        .with_state(DELIVERED)
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
            PREAUTHORIZED,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            EXPIRE_PAYMENT,
            PENDING_PAYMENT,
            PAYMENT_EXPIRED,
            System,
        ))
        .with_transition(TransitionSpec::new(
            ACCEPT,
            PREAUTHORIZED,
            ACCEPTED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            OPERATOR_ACCEPT,
            PREAUTHORIZED,
            ACCEPTED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(
            DECLINE,
            PREAUTHORIZED,
            DECLINED,
            Provider,
        ))
        .with_transition(TransitionSpec::new(
            OPERATOR_DECLINE,
            PREAUTHORIZED,
            DECLINED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(EXPIRE, PREAUTHORIZED, EXPIRED, System))
        .with_transition(TransitionSpec::new(CANCEL, ACCEPTED, CANCELED, Operator))
        .with_transition(TransitionSpec::new(COMPLETE, ACCEPTED, DELIVERED, System))
        .with_transition(TransitionSpec::new(
            OPERATOR_COMPLETE,
            ACCEPTED,
            DELIVERED,
            Operator,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_CUSTOMER,
            DELIVERED,
            REVIEWED_BY_CUSTOMER,
            Customer,
        ))
        .with_transition(TransitionSpec::new(
            REVIEW_1_BY_PROVIDER,
            DELIVERED,
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
            DELIVERED,
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
    fn test_preauthorized_has_three_outcomes() {
        let def = definition();
        let out = def.transitions_from(states::PREAUTHORIZED);
        assert_eq!(out.len(), 5);

        let destinations: Vec<_> = out.iter().map(|t| t.to.as_str()).collect();
        assert!(destinations.contains(&states::ACCEPTED));
        assert!(destinations.contains(&states::DECLINED));
        assert!(destinations.contains(&states::EXPIRED));
    }

    #[test]
    fn test_completion_is_automatic_or_operator() {
        let def = definition();
        assert_eq!(
            def.expected_actor(&TransitionName::new(transitions::COMPLETE)),
            Some(ActorRole::System)
        );
        assert_eq!(
            def.expected_actor(&TransitionName::new(transitions::OPERATOR_COMPLETE)),
            Some(ActorRole::Operator)
        );
    }

    #[test]
    fn test_confirm_payment_preauthorizes() {
        let def = definition();
        assert_eq!(
            def.destination_of(&TransitionName::new(transitions::CONFIRM_PAYMENT)),
            Some(&StateName::new(states::PREAUTHORIZED))
        );
    }
}
